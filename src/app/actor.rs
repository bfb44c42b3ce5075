//! App actor - message loop processing UI events and fetch completions

use tokio::sync::{mpsc, watch};

use crate::app::state::AppState;
use crate::messages::{FetchCommand, FetchUpdate, RenderState, UiEvent};

/// App actor that processes UI events and fetch completions.
///
/// Publishes render state on a watch channel: the UI holds the receiver,
/// reads the current value whenever it likes, and is notified on change.
pub struct AppActor {
    state: AppState,
    fetch_tx: mpsc::UnboundedSender<FetchCommand>,
    render_tx: watch::Sender<RenderState>,
}

impl AppActor {
    pub fn new(
        fetch_tx: mpsc::UnboundedSender<FetchCommand>,
        render_tx: watch::Sender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            fetch_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut fetch_rx: mpsc::UnboundedReceiver<FetchUpdate>,
    ) {
        // Publish initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.fetch_tx.send(FetchCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(update) = fetch_rx.recv() => {
                    self.state.handle_update(update);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Refresh => {
                if let Some(cmd) = self.state.refresh() {
                    let _ = self.fetch_tx.send(cmd);
                }
            }

            // List navigation
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectFirst => self.state.select_first(),
            UiEvent::SelectLast => self.state.select_last(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
