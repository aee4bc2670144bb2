//! Table-of-contents overlay
//!
//! Open/closed is independent of the scene cursor. While open the overlay
//! holds a pointer subscription; closing it (jump, Esc, outside press) or
//! leaving the player drops the subscription.

use vibeparse_core::{Chapter, Script};

use crate::overlay::{OverlayGuard, OverlayKind, PointerRegistry};

/// One rendered line of the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocLine {
    /// Chapter heading (primary file or "Overview")
    Chapter(String),
    /// `{n}. {title}` for scene `index`
    Scene { index: usize, label: String },
    /// "Skipped files" heading
    SkippedHeading,
    SkippedFile(String),
}

/// Flatten chapters, scenes and skipped files into display lines
pub fn toc_lines(script: &Script, chapters: &[Chapter]) -> Vec<TocLine> {
    let mut lines = Vec::with_capacity(script.len() + chapters.len());
    for chapter in chapters {
        lines.push(TocLine::Chapter(chapter.title.clone()));
        for index in chapter.scenes.clone() {
            if let Some(scene) = script.scenes.get(index) {
                lines.push(TocLine::Scene {
                    index,
                    label: format!("{}. {}", index + 1, scene.title),
                });
            }
        }
    }
    if !script.skipped_files.is_empty() {
        lines.push(TocLine::SkippedHeading);
        lines.extend(script.skipped_files.iter().cloned().map(TocLine::SkippedFile));
    }
    lines
}

/// Open TOC overlay
#[derive(Debug)]
pub struct TocOverlay {
    /// Highlighted scene index
    pub selected: usize,
    pub guard: OverlayGuard,
}

impl TocOverlay {
    pub fn open(pointers: &PointerRegistry, current: usize) -> Self {
        Self {
            selected: current,
            guard: OverlayGuard::acquire(pointers, OverlayKind::Toc),
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
