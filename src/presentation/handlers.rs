// HTTP request handlers
use crate::domain::time_window::WindowParams;
use crate::infrastructure::http_response::{html_response, svg_response, NOT_FOUND_BODY};
use crate::infrastructure::svg_renderer::render_progress_svg;
use crate::presentation::app_state::AppState;
use crate::presentation::landing_page::render_landing_page;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

/// Landing page
pub async fn landing_page(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let page = render_landing_page(state.progress_service.current_year());
    match html_response(page) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Progress graphic for `?tz=&start=&end=`, all optional
pub async fn progress_svg(
    query: Option<Query<Vec<(String, String)>>>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    // An undecodable query string counts as empty
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let params = window_params(&pairs);

    let progress = state.progress_service.progress(&params);
    match svg_response(render_progress_svg(progress)) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Fallback for every unknown path
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// First occurrence of each key wins
fn window_params(pairs: &[(String, String)]) -> WindowParams {
    let first = |key: &str| {
        pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    };

    WindowParams {
        tz: first("tz"),
        start: first("start"),
        end: first("end"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_window_params_first_value_wins() {
        let params = window_params(&pairs(&[
            ("tz", "9"),
            ("start", "2024-01-01"),
            ("tz", "-5"),
            ("other", "x"),
        ]));
        assert_eq!(params.tz.as_deref(), Some("9"));
        assert_eq!(params.start.as_deref(), Some("2024-01-01"));
        assert_eq!(params.end, None);
    }

    #[test]
    fn test_window_params_empty() {
        assert_eq!(window_params(&[]), WindowParams::default());
    }
}
