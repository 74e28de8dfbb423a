// Application layer - Use cases
pub mod clock;
pub mod progress_service;
