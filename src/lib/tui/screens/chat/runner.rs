//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::state::ChatState;
use super::ui::ChatUI;
use crate::application::controller::ChatController;
use crate::domain::TypingHandle;
use crate::infrastructure::backend::{BackendError, ChatBackend, ChatReply};
use crate::tui::terminal::{TerminalSession, Tui};
use crossterm::event;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// A finished backend call, delivered back to the UI loop
struct ReplyEvent {
    handle: TypingHandle,
    outcome: Result<ChatReply, BackendError>,
}

/// Run the TUI chat interface until the user exits
pub async fn run_chat<B>(
    controller: &mut ChatController<B>,
    endpoint: &str,
) -> io::Result<()>
where
    B: ChatBackend + 'static,
{
    let mut session = TerminalSession::start()?;
    let mut state = ChatState::new();

    let result = run_chat_loop(session.terminal(), &mut state, controller, endpoint).await;

    session.finish()?;
    result
}

/// Internal chat loop
async fn run_chat_loop<B>(
    terminal: &mut Tui,
    state: &mut ChatState,
    controller: &mut ChatController<B>,
    endpoint: &str,
) -> io::Result<()>
where
    B: ChatBackend + 'static,
{
    let (reply_tx, mut reply_rx) = mpsc::channel::<ReplyEvent>(10);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, controller, state, endpoint);
        })?;

        while let Ok(ReplyEvent { handle, outcome }) = reply_rx.try_recv() {
            state.record_reply(outcome.is_err());
            controller.complete(handle, outcome);
            state.scroll_to_bottom();
        }

        let awaiting = controller.is_awaiting_reply();
        let timeout = if awaiting {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            match handle_input(controller.input_mut(), awaiting, event) {
                InputAction::Exit => {
                    info!("Chat closed by user");
                    return Ok(());
                }

                InputAction::Submit => {
                    if let Some(pending) = controller.begin_submit_input() {
                        state.scroll_to_bottom();
                        let backend = controller.backend();
                        let tx = reply_tx.clone();
                        debug!(handle = %pending.handle, "Dispatching message to backend");

                        tokio::spawn(async move {
                            let outcome = backend.send(pending.request).await;
                            let _ = tx
                                .send(ReplyEvent {
                                    handle: pending.handle,
                                    outcome,
                                })
                                .await;
                        });
                    }
                }

                InputAction::ScrollUp => state.scroll_up(),
                InputAction::ScrollDown => state.scroll_down(),
                InputAction::ScrollTop => state.scroll_to_top(),
                InputAction::ScrollBottom => state.scroll_to_bottom(),
                InputAction::None => {}
            }
        } else if awaiting {
            state.tick_loading();
        }
    }
}
