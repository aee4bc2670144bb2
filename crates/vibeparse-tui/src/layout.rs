//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar (glass container)
    pub header: Rect,
    /// Page content
    pub body: Rect,
    /// Toast or key hints
    pub status: Rect,
}

/// Player page areas inside the body
#[derive(Debug, Clone, Copy)]
pub struct PlayerAreas {
    pub progress: Rect,
    pub scene: Rect,
    pub audio: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: top border + title row + bottom border
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the body for the player: gauge on top, transport at the bottom
pub fn player(body: Rect) -> PlayerAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(body);

    PlayerAreas {
        progress: chunks[0],
        scene: chunks[1],
        audio: chunks[2],
    }
}

/// Centered column for the form, at most `max_width` wide
pub fn form_column(body: Rect, max_width: u16) -> Rect {
    let width = body.width.min(max_width);
    let x = body.x + (body.width - width) / 2;
    Rect::new(x, body.y, width, body.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.status.height, 1);
    }

    #[test]
    fn test_player_layout() {
        let areas = player(Rect::new(0, 3, 80, 20));

        assert_eq!(areas.progress, Rect::new(0, 3, 80, 1));
        assert_eq!(areas.scene.height, 18);
        assert_eq!(areas.audio.y, 22);
    }

    #[test]
    fn test_form_column_is_centered_and_capped() {
        let column = form_column(Rect::new(0, 3, 100, 20), 72);
        assert_eq!(column, Rect::new(14, 3, 72, 20));

        let narrow = form_column(Rect::new(0, 3, 40, 20), 72);
        assert_eq!(narrow, Rect::new(0, 3, 40, 20));
    }
}
