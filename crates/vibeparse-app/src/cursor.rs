//! Scene navigation cursor

/// Position within a loaded script
///
/// `len >= 1` holds by construction, so `index` is always a valid scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneCursor {
    index: usize,
    len: usize,
}

impl SceneCursor {
    /// Cursor at the first scene; `None` for an empty script
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; present for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    /// Advance one scene. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back one scene. Returns whether the index changed.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jump to an absolute scene; out-of-range targets are ignored
    pub fn jump(&mut self, target: usize) -> bool {
        if target >= self.len || target == self.index {
            return false;
        }
        self.index = target;
        true
    }

    /// `(index + 1) / len`, in `(0, 1]`
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.len as f64
    }

    /// "Scene i of N"
    pub fn label(&self) -> String {
        format!("Scene {} of {}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script_has_no_cursor() {
        assert!(SceneCursor::new(0).is_none());
    }

    #[test]
    fn test_next_stops_at_last() {
        let mut cursor = SceneCursor::new(2).unwrap();
        assert!(cursor.next());
        assert_eq!(cursor.index(), 1);
        assert!(!cursor.next());
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_previous_stops_at_first() {
        let mut cursor = SceneCursor::new(3).unwrap();
        assert!(!cursor.previous());
        assert_eq!(cursor.index(), 0);
        cursor.jump(2);
        assert!(cursor.previous());
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut cursor = SceneCursor::new(3).unwrap();
        assert!(!cursor.jump(3));
        assert!(!cursor.jump(usize::MAX));
        assert_eq!(cursor.index(), 0);
        assert!(cursor.jump(2));
        assert!(!cursor.jump(2));
    }

    #[test]
    fn test_progress_and_label() {
        let mut cursor = SceneCursor::new(4).unwrap();
        assert_eq!(cursor.progress(), 0.25);
        assert_eq!(cursor.label(), "Scene 1 of 4");
        cursor.jump(3);
        assert_eq!(cursor.progress(), 1.0);
        assert_eq!(cursor.label(), "Scene 4 of 4");
    }

    #[test]
    fn test_single_scene_script() {
        let mut cursor = SceneCursor::new(1).unwrap();
        assert!(cursor.is_first() && cursor.is_last());
        assert!(!cursor.next());
        assert!(!cursor.previous());
        assert_eq!(cursor.progress(), 1.0);
    }
}
