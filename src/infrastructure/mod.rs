// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod http_response;
pub mod render_params;
pub mod svg_renderer;
pub mod system_clock;
