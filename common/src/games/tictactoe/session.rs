use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::bot_controller::calculate_minimax_move_with_score;
use super::controller::{BotTicket, GameController, GameView};
use super::settings::TicTacToeSessionSettings;
use crate::games::{GameBroadcaster, GameCommand, InputSource};
use crate::log;

#[derive(Debug)]
struct BotMoveResult {
    generation: u64,
    index: Option<usize>,
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Drives one controller until the input source closes or asks to quit.
    /// Everything that touches the board runs on this loop, one event at a time.
    pub async fn run(
        settings: TicTacToeSessionSettings,
        mut input: impl InputSource,
        broadcaster: impl GameBroadcaster,
    ) -> GameView {
        let mut controller = GameController::new(settings.mode);
        let (bot_tx, mut bot_rx) = mpsc::unbounded_channel::<BotMoveResult>();
        let mut bot_task: Option<JoinHandle<()>> = None;

        log!("Session started in {} mode", controller.mode());
        broadcaster.broadcast_state(controller.view()).await;

        loop {
            if let Some(ticket) = controller.schedule_bot_move() {
                bot_task = Some(spawn_bot_move(ticket, settings.bot_delay, bot_tx.clone()));
                broadcaster.broadcast_state(controller.view()).await;
            }

            tokio::select! {
                command = input.next_command() => {
                    match command {
                        Some(GameCommand::SelectCell(index)) => {
                            if !controller.select_cell(index) {
                                continue;
                            }
                        }
                        Some(GameCommand::SetMode(mode)) => {
                            cancel_bot_move(&mut bot_task);
                            controller.set_mode(mode);
                        }
                        Some(GameCommand::Restart) => {
                            cancel_bot_move(&mut bot_task);
                            controller.restart();
                        }
                        Some(GameCommand::Quit) | None => break,
                    }
                }
                Some(result) = bot_rx.recv() => {
                    bot_task = None;
                    if !controller.apply_bot_move(result.generation, result.index) {
                        continue;
                    }
                }
            }

            broadcaster.broadcast_state(controller.view()).await;
        }

        cancel_bot_move(&mut bot_task);
        log!("Session finished");
        controller.view()
    }
}

fn spawn_bot_move(
    ticket: BotTicket,
    delay: Duration,
    bot_tx: mpsc::UnboundedSender<BotMoveResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let generation = ticket.generation;
        let calculated_move =
            tokio::task::spawn_blocking(move || calculate_minimax_move_with_score(&ticket.input))
                .await;

        let index = match calculated_move {
            Ok(Some(scored)) => {
                log!("Bot chose cell {} (score {})", scored.index, scored.score);
                Some(scored.index)
            }
            Ok(None) => None,
            Err(e) => {
                log!("Bot move failed: {}", e);
                None
            }
        };

        let _ = bot_tx.send(BotMoveResult { generation, index });
    })
}

fn cancel_bot_move(bot_task: &mut Option<JoinHandle<()>>) {
    if let Some(handle) = bot_task.take() {
        handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameMode, Mark};

    #[derive(Clone)]
    struct ChannelBroadcaster {
        tx: mpsc::UnboundedSender<GameView>,
    }

    impl GameBroadcaster for ChannelBroadcaster {
        async fn broadcast_state(&self, view: GameView) {
            let _ = self.tx.send(view);
        }
    }

    struct Harness {
        commands: mpsc::UnboundedSender<GameCommand>,
        views: mpsc::UnboundedReceiver<GameView>,
        handle: JoinHandle<GameView>,
    }

    fn start(mode: GameMode, bot_delay_ms: u64) -> Harness {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (view_tx, views) = mpsc::unbounded_channel();
        let settings = TicTacToeSessionSettings::new(mode, bot_delay_ms);
        let handle = tokio::spawn(TicTacToeSession::run(
            settings,
            command_rx,
            ChannelBroadcaster { tx: view_tx },
        ));
        Harness { commands, views, handle }
    }

    async fn wait_for(
        views: &mut mpsc::UnboundedReceiver<GameView>,
        condition: impl Fn(&GameView) -> bool,
    ) -> GameView {
        loop {
            let view = views.recv().await.unwrap();
            if condition(&view) {
                return view;
            }
        }
    }

    #[tokio::test]
    async fn test_pvp_session_places_marks() {
        let mut harness = start(GameMode::PvP, 0);
        harness.commands.send(GameCommand::SelectCell(4)).unwrap();
        harness.commands.send(GameCommand::SelectCell(4)).unwrap();
        harness.commands.send(GameCommand::SelectCell(0)).unwrap();

        let view = wait_for(&mut harness.views, |v| v.board[0] != Mark::Empty).await;
        assert_eq!(view.board[4], Mark::X);
        assert_eq!(view.board[0], Mark::O);
        assert_eq!(view.current_mark, Mark::X);

        harness.commands.send(GameCommand::Quit).unwrap();
        let final_view = harness.handle.await.unwrap();
        assert_eq!(final_view, view);
    }

    #[tokio::test]
    async fn test_ai_replies_after_human_move() {
        let mut harness = start(GameMode::PvAI, 0);
        harness.commands.send(GameCommand::SelectCell(0)).unwrap();

        let view = wait_for(&mut harness.views, |v| {
            v.board.iter().any(|&cell| cell == Mark::O)
        })
        .await;
        assert!(!view.bot_pending);
        assert_eq!(view.current_mark, Mark::X);
        assert_eq!(view.board.iter().filter(|&&cell| cell == Mark::O).count(), 1);

        drop(harness.commands);
        let final_view = harness.handle.await.unwrap();
        assert_eq!(final_view.board, view.board);
    }

    #[tokio::test]
    async fn test_human_input_rejected_while_ai_pending() {
        let mut harness = start(GameMode::PvAI, 50);
        harness.commands.send(GameCommand::SelectCell(0)).unwrap();
        wait_for(&mut harness.views, |v| v.bot_pending).await;
        harness.commands.send(GameCommand::SelectCell(1)).unwrap();

        let view = wait_for(&mut harness.views, |v| !v.bot_pending && v.board[0] == Mark::X).await;
        assert_eq!(view.board.iter().filter(|&&cell| cell == Mark::X).count(), 1);
        assert_eq!(view.board.iter().filter(|&&cell| cell == Mark::O).count(), 1);

        harness.commands.send(GameCommand::Quit).unwrap();
        harness.handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_restart_discards_pending_ai_move() {
        let mut harness = start(GameMode::PvAI, 100);
        harness.commands.send(GameCommand::SelectCell(0)).unwrap();
        wait_for(&mut harness.views, |v| v.bot_pending).await;
        harness.commands.send(GameCommand::Restart).unwrap();

        tokio::time::sleep(Duration::from_millis(300)).await;
        harness.commands.send(GameCommand::Quit).unwrap();

        let final_view = harness.handle.await.unwrap();
        assert!(final_view.board.iter().all(|&cell| cell == Mark::Empty));
        assert_eq!(final_view.current_mark, Mark::X);
        assert!(!final_view.bot_pending);
    }

    #[tokio::test]
    async fn test_mode_change_restarts_game() {
        let mut harness = start(GameMode::PvP, 0);
        harness.commands.send(GameCommand::SelectCell(0)).unwrap();
        wait_for(&mut harness.views, |v| v.board[0] == Mark::X).await;
        harness.commands.send(GameCommand::SetMode(GameMode::PvAI)).unwrap();

        let view = wait_for(&mut harness.views, |v| v.mode == GameMode::PvAI).await;
        assert!(view.board.iter().all(|&cell| cell == Mark::Empty));
        assert_eq!(view.current_mark, Mark::X);

        harness.commands.send(GameCommand::Quit).unwrap();
        harness.handle.await.unwrap();
    }
}
