use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod contact;
pub mod email;
pub mod error;
pub mod export;
pub mod media;
pub mod page;
pub mod robots;
pub mod seo;
pub mod startup_checks;
pub mod static_files;
pub mod templating;

pub use error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub templates: TemplateConfig,
    pub static_files: StaticConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub seo: seo::SeoConfig,
    #[serde(default)]
    pub business: seo::BusinessProfile,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub email: Option<email::EmailConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub log_level: String,
    /// Public origin of the site, used for absolute links in metadata.
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticConfig {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    /// TOML file replacing the built-in site content.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    pub recipients: Vec<String>,
    #[serde(default = "default_contact_subject")]
    pub subject: String,
}

fn default_contact_subject() -> String {
    "Новая заявка с сайта Два-Кадра".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipients: vec![seo::BusinessProfile::default().email],
            subject: default_contact_subject(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            app: AppConfig {
                name: "Два-Кадра".to_string(),
                log_level: "info".to_string(),
                base_url: None,
            },
            templates: TemplateConfig {
                directory: PathBuf::from("templates"),
            },
            static_files: StaticConfig {
                directory: PathBuf::from("static"),
            },
            content: ContentConfig::default(),
            seo: seo::SeoConfig::default(),
            business: seo::BusinessProfile::default(),
            contact: ContactConfig::default(),
            email: None,
        }
    }
}

use axum::{
    Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use std::{collections::HashMap, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub template_engine: Arc<templating::TemplateEngine>,
    pub static_handler: static_files::StaticFileHandler,
    pub content: Arc<page::SiteContent>,
    pub submitter: contact::DynContactSubmitter,
    pub config: Config,
}

impl AppState {
    /// Loads content and connects the e-mail provider. Everything here is
    /// read-only afterwards.
    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        let template_engine = Arc::new(templating::TemplateEngine::new(
            config.templates.directory.clone(),
        ));

        let static_handler =
            static_files::StaticFileHandler::new(config.static_files.directory.clone());
        static_handler.refresh_file_versions().await;

        let content = Arc::new(page::SiteContent::load(config.content.file.as_deref()).await?);

        let email_config = config.email.clone().unwrap_or_default();
        let provider = email::create_provider(&email_config.provider).await?;
        info!("Contact submissions use the {} e-mail provider", provider.name());

        let submitter: contact::DynContactSubmitter =
            Arc::new(contact::EmailContactSubmitter::new(
                provider,
                &email_config,
                config.contact.recipients.clone(),
                config.contact.subject.clone(),
            ));

        Ok(Self {
            template_engine,
            static_handler,
            content,
            submitter,
            config,
        })
    }

    /// Swaps the outbound submission backend.
    pub fn with_submitter(mut self, submitter: contact::DynContactSubmitter) -> Self {
        self.submitter = submitter;
        self
    }
}

async fn static_file_handler(
    State(app_state): State<AppState>,
    Path(path): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    app_state
        .static_handler
        .serve(&path, params.contains_key("v"))
        .await
}

/// Content images are referenced as `/images/...` and live in the static
/// directory's `images/` folder.
async fn image_file_handler(
    State(app_state): State<AppState>,
    Path(path): Path<String>,
) -> impl IntoResponse {
    app_state
        .static_handler
        .serve(&format!("images/{}", path), false)
        .await
}

pub async fn create_app(config: Config) -> Result<Router, AppError> {
    Ok(router(AppState::from_config(config).await?))
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(page::home_handler))
        .route("/contact", post(contact::contact_form_handler))
        .route("/api/contact", post(contact::api_contact_handler))
        .route("/robots.txt", get(robots::robots_txt_handler))
        .route("/static/{*path}", get(static_file_handler))
        .route("/images/{*path}", get(image_file_handler))
        .fallback(page::not_found_handler)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let method = request.method();
                    let uri = request.uri();
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::info_span!(
                        "http_request",
                        method = %method,
                        uri = %uri,
                        matched_path,
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    let headers = request.headers();
                    let user_agent = headers
                        .get("user-agent")
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("-");
                    let referer = headers
                        .get("referer")
                        .and_then(|h| h.to_str().ok())
                        .unwrap_or("-");

                    tracing::info!(
                        target: "access_log",
                        method = %request.method(),
                        path = %request.uri().path(),
                        query = ?request.uri().query(),
                        user_agent = %user_agent,
                        referer = %referer,
                        "request"
                    );
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let size = response
                            .headers()
                            .get("content-length")
                            .and_then(|h| h.to_str().ok())
                            .unwrap_or("-");

                        tracing::info!(
                            target: "access_log",
                            status = %response.status(),
                            size = %size,
                            latency_ms = %latency.as_millis(),
                            "response"
                        );
                    },
                ),
        )
        .with_state(app_state)
}
