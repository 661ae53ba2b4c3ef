pub mod state;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::{io, sync::Arc, time::Duration};
use tokio::{sync::mpsc, time};
use tracing::{info, warn};

use crate::{
    app::state::{AppState, Notification, Phase},
    error::RecommendError,
    events::{map_key_to_action, UserAction},
    recommend::RecommendationProvider,
    song::Song,
};

const TICK_MS: u64 = 80; // UI tick (spinner, EQ bars, toasts)

/// Result of one provider call, delivered back to the event loop.
pub type FetchOutcome = Result<Vec<Song>, RecommendError>;

/// Hands a URL to whatever opens links on this machine.
pub type LinkOpener = Box<dyn Fn(&str) -> io::Result<()>>;

pub struct App<P: RecommendationProvider + 'static> {
    pub state: AppState,
    provider: Arc<P>,
    outcome_tx: mpsc::UnboundedSender<FetchOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    opener: LinkOpener,
}

impl<P: RecommendationProvider + 'static> App<P> {
    pub fn new(provider: P) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        App {
            state: AppState::default(),
            provider: Arc::new(provider),
            outcome_tx,
            outcome_rx,
            opener: Box::new(|url: &str| open::that(url)),
        }
    }

    pub fn with_opener(mut self, opener: LinkOpener) -> Self {
        self.opener = opener;
        self
    }

    pub async fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        let mut tick_interval = time::interval(Duration::from_millis(TICK_MS));
        let mut event_stream = EventStream::new();

        loop {
            terminal.draw(|f| crate::ui::render(f, &self.state))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.state.update_eq_bars();
                    self.state.tick_notification();
                }
                Some(outcome) = self.outcome_rx.recv() => {
                    self.apply_outcome(outcome);
                }
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if let Some(action) = map_key_to_action(key, self.state.editing) {
                                self.handle_action(action);
                            }
                        }
                        Some(Err(e)) => warn!("Terminal event error: {e}"),
                        None => self.state.should_quit = true,
                        _ => {}
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    // ── Action handler ────────────────────────────────────────────────────────
    pub fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::Quit => {
                self.state.should_quit = true;
            }
            UserAction::ToggleHelp => {
                self.state.show_help = !self.state.show_help;
            }
            UserAction::FocusInput => {
                self.state.show_help = false;
                self.state.editing = true;
            }
            UserAction::Back => {
                if self.state.editing {
                    self.state.editing = false;
                } else if self.state.show_help {
                    self.state.show_help = false;
                }
            }
            UserAction::Input(c) => {
                self.state.input.push(c);
            }
            UserAction::InputBackspace => {
                self.state.input.pop();
            }
            UserAction::InputClear => {
                self.state.input.clear();
            }
            UserAction::Submit => self.submit(),
            UserAction::Refresh => {
                if self.state.can_refresh() {
                    if let Some(theme) = self.state.begin_refresh() {
                        self.spawn_fetch(theme);
                    }
                }
            }
            UserAction::Retry => {
                // The in-flight task can't be cancelled, so wait for it first.
                if !self.state.phase.is_loading() {
                    info!("Resetting to a fresh session");
                    self.state.reset();
                }
            }
            UserAction::PickTag(i) => {
                if matches!(self.state.phase, Phase::Idle) {
                    self.state.pick_tag(i);
                }
            }
            UserAction::NavigateUp | UserAction::NavigateLeft => self.navigate(-1),
            UserAction::NavigateDown | UserAction::NavigateRight => self.navigate(1),
            UserAction::Select => match self.state.phase {
                Phase::Idle => self.submit(),
                Phase::Results { .. } => self.open_selected_link(),
                Phase::Error { .. } => self.state.reset(),
                Phase::Loading { .. } => {}
            },
            UserAction::OpenLink => self.open_selected_link(),
        }
    }

    fn submit(&mut self) {
        if let Some(theme) = self.state.begin_search() {
            self.spawn_fetch(theme);
        }
    }

    fn navigate(&mut self, delta: isize) {
        match self.state.phase {
            Phase::Idle => {
                self.state.move_tag(delta);
                self.state.pick_tag(self.state.selected_tag);
            }
            Phase::Results { .. } => self.state.move_selection(delta),
            _ => {}
        }
    }

    fn open_selected_link(&mut self) {
        let Some(song) = self.state.selected_song() else {
            return;
        };
        let url = song.video_search_url();
        let title = song.title.clone();
        match (self.opener)(&url) {
            Ok(()) => {
                info!("Opened {url}");
                self.state.set_notification(Notification::info(format!("Opened YouTube search: {title}")));
            }
            Err(e) => {
                warn!("Could not open browser: {e}");
                self.state.set_notification(Notification::error(format!("Could not open browser: {e}")));
            }
        }
    }

    // ── Provider calls ────────────────────────────────────────────────────────
    fn spawn_fetch(&self, theme: String) {
        info!("Fetching recommendations for {theme:?}");
        let provider = self.provider.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = provider.recommend(&theme).await;
            let _ = tx.send(outcome);
        });
    }

    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if !self.state.phase.is_loading() {
            return;
        }
        match &outcome {
            Ok(songs) => {
                info!("Received {} songs", songs.len());
                self.state.set_notification(Notification::info(format!("Curated {} tracks", songs.len())));
            }
            Err(e) => warn!("Recommendation fetch failed: {e}"),
        }
        self.state.complete(outcome);
    }

    /// Waits for the next provider result without touching state.
    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.outcome_rx.recv().await
    }
}
