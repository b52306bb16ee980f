pub mod add_block_menu;
pub mod block_editor;
pub mod block_list;
pub mod document_preview;
pub mod legend_editor;
pub mod load_dialog;
pub mod math_view;
pub mod metadata_form;
pub mod node_view;
pub mod toast;

pub use add_block_menu::*;
pub use block_editor::*;
pub use block_list::*;
pub use document_preview::*;
pub use legend_editor::*;
pub use load_dialog::*;
pub use math_view::*;
pub use metadata_form::*;
pub use node_view::*;
pub use toast::*;
