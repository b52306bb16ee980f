//! Boundary to whatever typesets math.
//!
//! The engine never interprets LaTeX. It hands the raw source and a display
//! flag to a [`MathTypesetter`], which must return safe markup and must not
//! fail on malformed input.

/// Inline math sits in running text; display math gets its own line and may
/// carry a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathMode {
    Inline,
    Display,
}

impl MathMode {
    pub fn class(self) -> &'static str {
        match self {
            MathMode::Inline => "math math-inline",
            MathMode::Display => "math math-display",
        }
    }
}

pub trait MathTypesetter {
    /// Returns an already-escaped HTML fragment for `source`.
    fn typeset(&self, source: &str, mode: MathMode) -> String;
}

/// Emits the escaped source in a `data-math` element.
///
/// The source stays readable as-is, and a client-side KaTeX pass can pick the
/// element up later by its `data-math` attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceTypesetter;

impl MathTypesetter for SourceTypesetter {
    fn typeset(&self, source: &str, mode: MathMode) -> String {
        let (open, close) = match mode {
            MathMode::Inline => ("\\(", "\\)"),
            MathMode::Display => ("\\[", "\\]"),
        };
        format!(
            r#"<span class="{}" data-math="{}">{open}{}{close}</span>"#,
            mode.class(),
            html_escape::encode_double_quoted_attribute(source),
            html_escape::encode_text(source),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_math_is_escaped() {
        let html = SourceTypesetter.typeset("a<b & \"c\"", MathMode::Inline);
        insta::assert_snapshot!(html, @r#"<span class="math math-inline" data-math="a&lt;b &amp; &quot;c&quot;">\(a&lt;b &amp; "c"\)</span>"#);
    }

    #[test]
    fn display_math_uses_display_delimiters() {
        let html = SourceTypesetter.typeset("E=mc^2", MathMode::Display);
        assert!(html.starts_with(r#"<span class="math math-display""#));
        assert!(html.contains(r"\[E=mc^2\]"));
    }

    #[test]
    fn malformed_source_never_fails() {
        let html = SourceTypesetter.typeset(r"\frac{", MathMode::Inline);
        assert!(html.contains(r"\frac{"));
    }
}
