/// Markdown-style link `[text](href)`.
///
/// Text runs to the first `]` and href to the first `)`; both must be
/// non-empty. The href is kept verbatim.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const HREF_OPEN: u8 = b'(';
    pub const HREF_CLOSE: u8 = b')';
}
