use super::{HomePage, PageQuery};
use crate::{AppState, contact::FormView, error::AppError};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

pub const HOME_TEMPLATE: &str = "pages/index.html.liquid";
pub const NOT_FOUND_TEMPLATE: &str = "pages/404.html.liquid";
const STYLESHEET: &str = "site.css";

pub async fn home_handler(
    State(app_state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    render_home(&app_state, &query, FormView::default()).await
}

/// Composes and renders the landing page around an existing form state.
pub async fn render_home(app_state: &AppState, query: &PageQuery, form: FormView) -> Response {
    match render_home_html(app_state, query, form).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render landing page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn render_home_html(
    app_state: &AppState,
    query: &PageQuery,
    form: FormView,
) -> Result<String, AppError> {
    let config = &app_state.config;
    let page = HomePage::compose(
        &app_state.content,
        &config.seo,
        config.app.base_url.as_deref(),
        query.clone(),
        form,
    );

    let mut globals = page.globals(&app_state.content, &config.business)?;
    globals.insert(
        "stylesheet".into(),
        liquid::model::Value::scalar(app_state.static_handler.get_versioned_url(STYLESHEET).await),
    );

    Ok(app_state
        .template_engine
        .render_template(HOME_TEMPLATE, &globals)
        .await?)
}

pub async fn not_found_handler(State(app_state): State<AppState>) -> Response {
    let studio_name = app_state.content.studio_name.clone();
    let home_href = PageQuery::default().href("");
    let stylesheet = app_state.static_handler.get_versioned_url(STYLESHEET).await;
    let globals = liquid::object!({
        "studio_name": studio_name,
        "home_href": home_href,
        "stylesheet": stylesheet,
    });

    match app_state
        .template_engine
        .render_page(NOT_FOUND_TEMPLATE, &globals)
        .await
    {
        Ok(html) => (StatusCode::NOT_FOUND, html).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
