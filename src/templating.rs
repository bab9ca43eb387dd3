use axum::{http::StatusCode, response::Html};
use liquid::partials::{EagerCompiler, InMemorySource};
use std::{collections::HashMap, path::PathBuf, sync::Arc, time::SystemTime};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

type Partials = EagerCompiler<InMemorySource>;

pub const PARTIALS_DIR: &str = "partials";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Liquid error: {0}")]
    LiquidError(#[from] liquid::Error),
}

/// Loads Liquid templates from disk, keeping each one until its file
/// changes.
///
/// Pages live anywhere under the template directory. Every file in
/// `partials/` can be pulled into a page with `{% include "<file name>" %}`.
pub struct TemplateEngine {
    template_dir: PathBuf,
    cache: Arc<RwLock<HashMap<String, CachedTemplate>>>,
}

struct CachedTemplate {
    content: String,
    modified: SystemTime,
}

impl TemplateEngine {
    pub fn new(template_dir: PathBuf) -> Self {
        Self {
            template_dir,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn template_dir(&self) -> &std::path::Path {
        &self.template_dir
    }

    async fn load_template(&self, path: &str) -> Result<String, TemplateError> {
        let template_path = self.template_dir.join(path);

        let metadata = match tokio::fs::metadata(&template_path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TemplateError::NotFound(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let modified = metadata.modified()?;

        if let Some(cached) = self.cache.read().await.get(path)
            && cached.modified >= modified
        {
            debug!("Using cached template for {}", path);
            return Ok(cached.content.clone());
        }

        info!("Loading template: {}", path);
        let content = tokio::fs::read_to_string(&template_path).await?;

        self.cache.write().await.insert(
            path.to_string(),
            CachedTemplate {
                content: content.clone(),
                modified,
            },
        );

        Ok(content)
    }

    async fn load_partials(&self) -> Result<Partials, TemplateError> {
        let mut partials = Partials::empty();
        let dir = self.template_dir.join(PARTIALS_DIR);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No partials directory at {:?}", dir);
                return Ok(partials);
            }
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !file_name.ends_with(".liquid") {
                continue;
            }
            let content = self
                .load_template(&format!("{}/{}", PARTIALS_DIR, file_name))
                .await?;
            partials.add(file_name, content);
        }

        Ok(partials)
    }

    pub async fn has_template(&self, template_name: &str) -> bool {
        tokio::fs::metadata(self.template_dir.join(template_name))
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    pub async fn render_template(
        &self,
        template_name: &str,
        globals: &liquid::Object,
    ) -> Result<String, TemplateError> {
        let source = self.load_template(template_name).await?;
        let partials = self.load_partials().await?;

        let parser = liquid::ParserBuilder::with_stdlib()
            .partials(partials)
            .build()?;
        let template = parser.parse(&source)?;

        Ok(template.render(globals)?)
    }

    /// Renders a page for an HTTP response; failures are logged and become
    /// a 500.
    pub async fn render_page(
        &self,
        template_name: &str,
        globals: &liquid::Object,
    ) -> Result<Html<String>, StatusCode> {
        match self.render_template(template_name, globals).await {
            Ok(html) => Ok(Html(html)),
            Err(e) => {
                error!("Template rendering error in {}: {}", template_name, e);
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

#[cfg(test)]
#[path = "templating_tests.rs"]
mod tests;
