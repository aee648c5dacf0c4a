//! Text cursor

/// A position on one side of a grapheme.
///
/// The cursor is either before (leading) or after (trailing) the grapheme at
/// `index`, in logical order. A text of `n` graphemes has cursors from
/// `{0, before}` to `{n - 1, after}`; an empty text only `{0, before}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextCursor {
    index: usize,
    after: bool,
}

impl TextCursor {
    pub fn new(index: usize, after: bool) -> Self {
        Self { index, after }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn after(self) -> bool {
        self.after
    }

    pub fn before(self) -> bool {
        !self.after
    }

    pub fn start_of_text(self) -> bool {
        self.index == 0 && !self.after
    }

    pub fn end_of_text(self, size: usize) -> bool {
        size == 0 || (self.index + 1 >= size && self.after)
    }

    /// Clamp into a text of `size` graphemes.
    ///
    /// A cursor past the end moves to the trailing side of the last grapheme.
    pub fn resize(self, size: usize) -> Self {
        if size == 0 {
            Self::default()
        } else if self.index >= size {
            Self::new(size - 1, true)
        } else {
            self
        }
    }

    /// The same position expressed on the leading side of the next grapheme,
    /// when there is one.
    pub fn before_neighbor(self, size: usize) -> Self {
        if self.after && self.index + 1 < size {
            Self::new(self.index + 1, false)
        } else {
            self
        }
    }

    /// The same position expressed on the trailing side of the previous
    /// grapheme, when there is one.
    pub fn after_neighbor(self) -> Self {
        if !self.after && self.index > 0 {
            Self::new(self.index - 1, true)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize() {
        assert_eq!(TextCursor::new(5, false).resize(3), TextCursor::new(2, true));
        assert_eq!(TextCursor::new(1, true).resize(3), TextCursor::new(1, true));
        assert_eq!(TextCursor::new(1, true).resize(0), TextCursor::default());
    }

    #[test]
    fn neighbors() {
        let c = TextCursor::new(1, true);
        assert_eq!(c.before_neighbor(3), TextCursor::new(2, false));
        assert_eq!(c.before_neighbor(2), c);
        assert_eq!(TextCursor::new(2, false).after_neighbor(), c);
        assert_eq!(TextCursor::default().after_neighbor(), TextCursor::default());
    }

    #[test]
    fn text_ends() {
        assert!(TextCursor::default().start_of_text());
        assert!(TextCursor::new(2, true).end_of_text(3));
        assert!(!TextCursor::new(2, false).end_of_text(3));
        assert!(TextCursor::default().end_of_text(0));
    }
}
