pub use self::{board_encoding::*, cell::*, game_move::*};

pub(crate) mod board_encoding;
pub(crate) mod cell;
pub(crate) mod game_move;
