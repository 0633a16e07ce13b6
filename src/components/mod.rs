//! UI Components
//!
//! Reusable Leptos components.

mod top_bar;
mod login_form;
mod register_form;
mod board_list;
mod board_view;
mod board_column;
mod card_tile;
mod drop_zone;
mod card_composer;
mod card_editor;
mod share_board_modal;
mod templates_modal;
mod remove_confirm_button;

pub use top_bar::TopBar;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use board_list::BoardList;
pub use board_view::{handle_board_drop, BoardView};
pub use board_column::BoardColumn;
pub use card_tile::CardTile;
pub use drop_zone::DropZone;
pub use card_composer::CardComposer;
pub use card_editor::CardEditor;
pub use share_board_modal::ShareBoardModal;
pub use templates_modal::TemplatesModal;
pub use remove_confirm_button::{Removal, RemoveConfirmButton};
