use serde::{Deserialize, Serialize};

/// The four emphasis styles, each owning its delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emphasis {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

impl Emphasis {
    /// Pass order. Bold runs before italic, so `**` is never read as two `*`.
    pub const ORDER: [Emphasis; 4] = [
        Emphasis::Bold,
        Emphasis::Italic,
        Emphasis::Underline,
        Emphasis::Strikethrough,
    ];

    pub fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "*",
            Emphasis::Underline => "__",
            Emphasis::Strikethrough => "~~",
        }
    }

    /// HTML/JSX element name.
    pub fn tag(self) -> &'static str {
        match self {
            Emphasis::Bold => "strong",
            Emphasis::Italic => "em",
            Emphasis::Underline => "u",
            Emphasis::Strikethrough => "del",
        }
    }
}
