use crate::{AppError, AppState, contact::FormView, page::PageQuery};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Renders the landing page in its initial state into `output/index.html`
/// and copies the static directory next to it.
pub async fn export_site(state: &AppState, output: &Path) -> Result<PathBuf, AppError> {
    tokio::fs::create_dir_all(output).await?;

    let html =
        crate::page::render_home_html(state, &PageQuery::default(), FormView::default()).await?;
    let index = output.join("index.html");
    tokio::fs::write(&index, html).await?;
    info!("Wrote {:?}", index);

    let static_dir = &state.config.static_files.directory;
    if static_dir.is_dir() {
        let copied = copy_tree(static_dir, &output.join("static")).await?;
        info!("Copied {} static files", copied);

        // Content images are linked from the site root.
        let images = static_dir.join("images");
        if images.is_dir() {
            copy_tree(&images, &output.join("images")).await?;
        }
    } else {
        warn!("Static directory {:?} not found, skipping", static_dir);
    }

    Ok(index)
}

async fn copy_tree(source: &Path, target: &Path) -> Result<usize, AppError> {
    let mut copied = 0;
    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry.map_err(std::io::Error::from)?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            tokio::fs::create_dir_all(&destination).await?;
        } else if entry.file_type().is_file() {
            debug!("Copying {:?}", relative);
            tokio::fs::copy(entry.path(), &destination).await?;
            copied += 1;
        }
    }
    Ok(copied)
}
