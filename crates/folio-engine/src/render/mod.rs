//! # Block Rendering
//!
//! [`describe`] is the single dispatch over block variants. It produces a
//! [`BlockView`]: a leaf-independent [`Node`] tree for read-only display and
//! the rows of the block's editor form.
//!
//! Consumers supply the leaf:
//! - the desktop editor turns form rows into inputs,
//! - the desktop preview turns `display` into DOM elements,
//! - [`jsx`] turns `display` into source text for the published artifact.
//!
//! Because all three walk the same description, class names, optional parts
//! and attribute order cannot drift between them.

pub mod describe;
pub mod jsx;
pub mod view;

pub use describe::{BlockView, FieldKey, FieldSpec, FormRow, InputKind, describe, display, form};
pub use view::{Attr, AttrName, AttrValue, Element, LINK_CLASS, LINK_REL, LINK_TARGET, Node, Tag};
