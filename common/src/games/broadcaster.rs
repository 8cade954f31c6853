use std::future::Future;

use tokio::sync::mpsc;

use super::tictactoe::{GameMode, GameView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    SelectCell(usize),
    SetMode(GameMode),
    Restart,
    Quit,
}

/// Where the session gets its events from. `None` means the source is gone.
pub trait InputSource: Send {
    fn next_command(&mut self) -> impl Future<Output = Option<GameCommand>> + Send;
}

impl InputSource for mpsc::UnboundedReceiver<GameCommand> {
    fn next_command(&mut self) -> impl Future<Output = Option<GameCommand>> + Send {
        self.recv()
    }
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, view: GameView) -> impl Future<Output = ()> + Send;
}
