use crate::media::{GalleryImage, Testimonial, TrustIndicator, Video};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

const BUILTIN: &str = include_str!("../../content/site.toml");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml_edit::de::Error),

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeroContent {
    pub title: String,
    pub lead: String,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AboutContent {
    pub image: String,
    pub image_alt: String,
    pub location: String,
    pub since: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContactInfo {
    pub phone: String,
    pub phone_href: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SocialLink {
    pub name: String,
    pub handle: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeachingItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Everything the landing page shows that is not interaction state.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteContent {
    pub studio_name: String,
    pub footer_about: String,
    pub copyright: String,
    #[serde(default)]
    pub also_filming: Vec<String>,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub contacts: ContactInfo,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub teaching: Vec<TeachingItem>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub trust_indicators: Vec<TrustIndicator>,
}

impl SiteContent {
    /// The content shipped with the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::parse(BUILTIN)
    }

    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml_edit::de::from_str(source)?;
        content.check_ids()?;
        Ok(content)
    }

    pub async fn load_from_file(path: &Path) -> Result<Self, ContentError> {
        info!("Loading site content from {:?}", path);
        let source = tokio::fs::read_to_string(path).await?;
        Self::parse(&source)
    }

    /// Loads `path` when given, otherwise the built-in content.
    pub async fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::load_from_file(path).await,
            None => Self::builtin(),
        }
    }

    // Selection is addressed by id, so ids must be unique per collection.
    fn check_ids(&self) -> Result<(), ContentError> {
        unique("video", self.videos.iter().map(|v| v.id.as_str()))?;
        unique("gallery image", self.gallery.iter().map(|g| g.id.as_str()))?;
        unique("testimonial", self.testimonials.iter().map(|t| t.id.as_str()))?;
        Ok(())
    }
}

fn unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
