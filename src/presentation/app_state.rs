// Application state for HTTP handlers
use crate::application::progress_service::ProgressService;

#[derive(Clone)]
pub struct AppState {
    pub progress_service: ProgressService,
}
