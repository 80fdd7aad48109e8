use dungeon::{Console, InputEvent, QuitKind, Session};

/// Frame-by-frame driver around a [`Session`]. Once a quit is requested the
/// session is shut down exactly once and further input is ignored.
pub struct AppState {
    pub session: Session,
    finished: Option<QuitKind>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self { session, finished: None }
    }

    /// Processes one frame's input events in order.
    pub fn tick(&mut self, events: &[InputEvent]) -> Option<QuitKind> {
        if self.finished.is_some() {
            return self.finished;
        }
        for event in events {
            if let Some(kind) = self.session.dispatch(event) {
                self.finish(kind);
                break;
            }
        }
        self.finished
    }

    fn finish(&mut self, kind: QuitKind) {
        match self.session.shutdown(kind) {
            Ok(()) => tracing::info!(?kind, "session finished"),
            Err(err) => tracing::error!(error = %err, ?kind, "failed to save on exit"),
        }
        self.finished = Some(kind);
    }

    pub fn render(&self, console: &mut Console) {
        console.clear();
        self.session.render(console);
    }
}
