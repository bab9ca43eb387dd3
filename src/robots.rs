use crate::AppState;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// `robots.txt` advertising the landing page. A `robots.txt` in the static
/// directory takes precedence.
pub async fn robots_txt_handler(State(app_state): State<AppState>) -> Response {
    let custom_robots_path = app_state.config.static_files.directory.join("robots.txt");

    if custom_robots_path.exists() {
        match tokio::fs::read_to_string(&custom_robots_path).await {
            Ok(content) => return robots_response(content),
            Err(e) => {
                tracing::error!("Failed to read custom robots.txt: {}", e);
            }
        }
    }

    robots_response(default_robots(app_state.config.app.base_url.as_deref()))
}

pub fn default_robots(base_url: Option<&str>) -> String {
    let mut robots = String::from("User-agent: *\nAllow: /\nDisallow: /api/\n");
    if let Some(base) = base_url {
        robots.push_str(&format!("\nHost: {}\n", base.trim_end_matches('/')));
    }
    robots
}

fn robots_response(content: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        content,
    )
        .into_response()
}
