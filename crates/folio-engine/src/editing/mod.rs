/*!
 * # Editing Core
 *
 * The editor owns exactly one [`Document`](crate::model::Document) through an
 * [`EditorSession`]. Nothing else mutates it.
 *
 * ## Command-Based Editing
 * - Every edit is a [`Cmd`]: block insertion, content and property updates,
 *   legend rows, removal, reordering, and the metadata fields.
 * - `EditorSession::apply` returns a [`Patch`] carrying the new version and
 *   the block that changed, so the UI only re-renders what moved.
 * - Commands aimed at a block that no longer exists are no-ops, which keeps a
 *   stale event from a removed block harmless.
 *
 * ## Drag Reordering
 * - [`DragSession`] holds a gesture in flight. The provisional order is
 *   always a permutation of the committed list.
 * - Only a drop on a valid slot produces a `Cmd::MoveBlock`; anything else
 *   leaves the document exactly as it was.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use folio_engine::editing::{Cmd, EditorSession};
 * use folio_engine::model::BlockType;
 *
 * let mut session = EditorSession::new();
 * let patch = session.apply(Cmd::AddBlock { block_type: BlockType::Paragraph });
 * let id = patch.changed.unwrap();
 * session.apply(Cmd::UpdateContent { id, content: "Hello *world*".to_string() });
 * assert_eq!(session.document().blocks[0].content, "Hello *world*");
 * ```
 */

pub mod commands;
pub mod drag;
pub mod patch;
pub mod session;

pub use commands::Cmd;
pub use drag::DragSession;
pub use patch::Patch;
pub use session::EditorSession;
