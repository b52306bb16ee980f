/// A cursor for byte-wise scanning of one block's text.
///
/// Only ASCII delimiters are ever matched, so every index the cursor stops at
/// while matching is a char boundary and safe to slice at.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advance until `stop` is under the cursor. Returns false at end of input.
    pub fn seek(&mut self, stop: u8) -> bool {
        while let Some(b) = self.peek() {
            if b == stop {
                return true;
            }
            self.i += 1;
        }
        false
    }

    /// Text between `start` and the current index.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn seek_stops_on_delimiter() {
        let mut cur = Cursor::new("ab$cd");
        assert!(cur.seek(b'$'));
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.slice_from(0), "ab");
    }

    #[test]
    fn seek_runs_to_end_when_missing() {
        let mut cur = Cursor::new("abc");
        assert!(!cur.seek(b'$'));
        assert!(cur.eof());
    }

    #[test]
    fn slicing_around_multibyte_text() {
        let mut cur = Cursor::new("é$x$");
        assert!(cur.seek(b'$'));
        assert_eq!(cur.slice_from(0), "é");
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
    }
}
