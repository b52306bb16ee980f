/// Inline math delimited by single dollars: `$E=mc^2$`.
///
/// The span needs at least one character between the dollars and may not
/// contain a dollar itself, so `$$` is literal text.
pub struct MathSpan;

impl MathSpan {
    pub const DOLLAR: u8 = b'$';
}
