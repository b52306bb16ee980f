//! # Inline Markup
//!
//! Turns one raw text field into a tree of [`InlineNode`]s. This is the only
//! place inline markup is interpreted; the editor preview, the read-only
//! preview and the exported artifact all render from its output.
//!
//! ## Passes
//!
//! 1. `$…$` math spans are split out first and never scanned again.
//! 2. Plain pieces are split on `[text](href)` links.
//! 3. The rest runs through four emphasis passes in fixed order: bold `**`,
//!    italic `*`, underline `__`, strikethrough `~~`.
//!
//! Because the passes are sequential, `**a*b*c**` is bold containing an
//! italic `b`, never the other way round.
//!
//! ## Modules
//!
//! - **`types`**: `Segment`, `LinkPart` and the `InlineNode` tree
//! - **`kinds`**: delimiter ownership for math, links and emphasis
//! - **`cursor`**: byte cursor used by the math and link scanners
//! - **`parser`**: `render_inline()` entry point with `try_parse_*` helpers
//! - **`emphasis`**: the emphasis passes and tree repair

pub mod cursor;
pub mod emphasis;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::Emphasis;
pub use parser::{render_inline, split_links, split_math};
pub use types::{InlineNode, LinkPart, Segment};
