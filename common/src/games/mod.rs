mod broadcaster;

pub mod tictactoe;

pub use broadcaster::{GameBroadcaster, GameCommand, InputSource};
