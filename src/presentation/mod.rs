// Presentation layer - HTTP surface
pub mod app_state;
pub mod handlers;
pub mod landing_page;
pub mod router;
