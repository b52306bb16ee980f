//! # Inline Kinds
//!
//! Each inline construct owns its delimiters. The scanners in `parser` and
//! `emphasis` read these constants and never hardcode `$`, `[` or `**`.
//!
//! - **`MathSpan`**: `DOLLAR = b'$'`
//! - **`Link`**: `[text](href)` brackets
//! - **`Emphasis`**: `**`, `*`, `__`, `~~` and their fixed pass order

pub mod emphasis;
pub mod link;
pub mod math_span;

pub use emphasis::Emphasis;
pub use link::Link;
pub use math_span::MathSpan;
