//! Player page state
//!
//! A [`PlayerPage`] is created on navigation to `/player/{id}` and is in
//! exactly one of three states: loading, failed, or loaded. Everything that
//! only makes sense for a loaded script (cursor, TOC, audio) lives inside
//! [`LoadedPlayer`], so it cannot exist without a script.

use vibeparse_core::{Chapter, CodeHighlight, GithubTarget, Scene, Script};

use crate::audio::{AudioPlayer, MediaDelivery, MediaElement};
use crate::cursor::SceneCursor;
use crate::overlay::PointerRegistry;
use crate::toc::TocOverlay;

/// Fallback message when a script cannot be loaded
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load script";

/// Player route state
#[derive(Debug)]
pub struct PlayerPage {
    pub script_id: String,
    pub load: LoadState,
    /// Repository the script was generated from, when known
    pub source: Option<GithubTarget>,
}

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(Box<LoadedPlayer>),
}

impl PlayerPage {
    pub fn new(script_id: impl Into<String>) -> Self {
        Self {
            script_id: script_id.into(),
            load: LoadState::Loading,
            source: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&LoadedPlayer> {
        match &self.load {
            LoadState::Loaded(player) => Some(player.as_ref()),
            _ => None,
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut LoadedPlayer> {
        match &mut self.load {
            LoadState::Loaded(player) => Some(player.as_mut()),
            _ => None,
        }
    }
}

/// A loaded script and its playback state
#[derive(Debug)]
pub struct LoadedPlayer {
    pub script: Script,
    pub chapters: Vec<Chapter>,
    pub cursor: SceneCursor,
    pub toc: Option<TocOverlay>,
    /// Highlight targeted by copy, within the current scene
    pub focused_highlight: usize,
    /// Vertical scroll of the scene body
    pub scroll: u16,
    /// Largest useful scroll offset, recorded by the renderer
    pub scroll_max: u16,
    pub media: MediaElement,
    pub audio: AudioPlayer,
}

impl LoadedPlayer {
    /// `None` for a script without scenes
    pub fn new(script: Script) -> Option<Self> {
        let cursor = SceneCursor::new(script.len())?;
        let chapters = script.chapters();
        let mut media = MediaElement::new();
        let mut audio = AudioPlayer::mount(&media, 0);
        let duration = script.scenes[0].duration;
        for delivery in media.load(duration) {
            audio.handle(&delivery);
        }

        Some(Self {
            script,
            chapters,
            cursor,
            toc: None,
            focused_highlight: 0,
            scroll: 0,
            scroll_max: 0,
            media,
            audio,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.script.scenes[self.cursor.index()]
    }

    pub fn focused(&self) -> Option<&CodeHighlight> {
        self.scene().code_highlights.get(self.focused_highlight)
    }

    pub fn next(&mut self) -> bool {
        let changed = self.cursor.next();
        if changed {
            self.scene_changed();
        }
        changed
    }

    pub fn previous(&mut self) -> bool {
        let changed = self.cursor.previous();
        if changed {
            self.scene_changed();
        }
        changed
    }

    pub fn jump(&mut self, target: usize) -> bool {
        let changed = self.cursor.jump(target);
        if changed {
            self.scene_changed();
        }
        changed
    }

    /// Reset per-scene view state and remount the audio player
    fn scene_changed(&mut self) {
        let index = self.cursor.index();
        self.focused_highlight = 0;
        self.scroll = 0;
        self.scroll_max = 0;
        self.media.pause();
        // Mount first so the new player sees LoadedMetadata; the assignment
        // drops the old player and its subscriptions.
        self.audio = AudioPlayer::mount(&self.media, index);
        let duration = self.script.scenes[index].duration;
        let deliveries = self.media.load(duration);
        self.deliver(&deliveries);
    }

    pub fn cycle_highlight(&mut self, forward: bool) {
        let count = self.scene().code_highlights.len();
        if count == 0 {
            return;
        }
        self.focused_highlight = if forward {
            (self.focused_highlight + 1) % count
        } else {
            (self.focused_highlight + count - 1) % count
        };
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll as i32 + delta).clamp(0, self.scroll_max as i32);
        self.scroll = next as u16;
    }

    pub fn open_toc(&mut self, pointers: &PointerRegistry) {
        if self.toc.is_none() {
            self.toc = Some(TocOverlay::open(pointers, self.cursor.index()));
        }
    }

    pub fn close_toc(&mut self) {
        self.toc = None;
    }

    pub fn toggle_audio(&mut self) -> bool {
        let playing = self.media.toggle();
        self.audio.playing = playing;
        if playing {
            self.audio.finished = false;
        }
        // A restart from the end moves the clock back to zero.
        self.audio.position = self.media.position();
        playing
    }

    pub fn seek_audio(&mut self, delta: f64) {
        let target = self.media.position() + delta;
        let deliveries = self.media.seek(target);
        self.deliver(&deliveries);
    }

    pub fn advance_audio(&mut self, dt: f64) -> Vec<MediaDelivery> {
        let deliveries = self.media.advance(dt);
        self.deliver(&deliveries);
        deliveries
    }

    fn deliver(&mut self, deliveries: &[MediaDelivery]) {
        for delivery in deliveries {
            self.audio.handle(delivery);
        }
    }
}
