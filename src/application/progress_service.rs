// Progress service - Use case for measuring progress through a time window
use crate::application::clock::Clock;
use crate::domain::progress::ProgressValue;
use crate::domain::time_window::{TimeWindow, WindowParams};
use chrono::Datelike;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProgressService {
    clock: Arc<dyn Clock>,
}

impl ProgressService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Resolves the window for `params` against the current instant and
    /// reduces it to a percentage.
    pub fn progress(&self, params: &WindowParams) -> ProgressValue {
        let window = TimeWindow::resolve(params, self.clock.now());
        let progress = ProgressValue::from_window(&window);

        tracing::debug!(
            start = %window.start,
            end = %window.end,
            reference = %window.reference,
            percentage = progress.value(),
            "Resolved progress window"
        );

        progress
    }

    pub fn current_year(&self) -> i32 {
        self.clock.now().year()
    }
}
