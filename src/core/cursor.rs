/// Keyboard highlight over the visible suggestion rows
///
/// Arrow keys move the highlight and wrap at both ends.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    current: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted row, if any
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Move down one row, wrapping to the top
    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.current = match (len, self.current) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some((i + 1) % len),
        };
        self.current
    }

    /// Move up one row, wrapping to the bottom
    pub fn previous(&mut self, len: usize) -> Option<usize> {
        self.current = match (len, self.current) {
            (0, _) => None,
            (len, None) | (len, Some(0)) => Some(len - 1),
            (len, Some(i)) => Some((i - 1).min(len - 1)),
        };
        self.current
    }

    /// Highlight a row directly (pointer hover)
    pub fn set(&mut self, index: usize, len: usize) {
        self.current = (index < len).then_some(index);
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}
