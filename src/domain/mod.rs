// Domain layer - time windows and progress values
pub mod error;
pub mod progress;
pub mod time_window;
