//! Domain Layer
//!
//! Board, column and card entities plus the wire shapes returned by the API.

mod board;
mod card;
mod user;

pub use board::*;
pub use card::*;
pub use user::*;
