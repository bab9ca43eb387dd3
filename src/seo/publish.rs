use super::{MetaAttribute, MetaEntry, MetadataSurface, SeoConfig};
use tracing::debug;

/// Writes `config` onto the surface. Safe to call repeatedly: existing
/// entries are updated in place, never duplicated.
pub fn publish(config: &SeoConfig, surface: &mut dyn MetadataSurface) {
    surface.set_title(&config.title);
    upsert(surface, "og:title", &config.title);
    upsert(surface, "twitter:title", &config.title);

    upsert(surface, "description", &config.description);
    upsert(surface, "og:description", &config.description);
    upsert(surface, "twitter:description", &config.description);

    if let Some(keywords) = &config.keywords {
        upsert(surface, "keywords", &keywords.join(", "));
    }

    if let Some(image) = &config.image {
        upsert(surface, "og:image", image);
        upsert(surface, "twitter:image", image);
    }

    if let Some(url) = &config.url {
        upsert(surface, "og:url", url);
        upsert(surface, "twitter:url", url);
    }

    if let Some(content_type) = &config.content_type {
        upsert(surface, "og:type", content_type);
    }
}

pub fn upsert(surface: &mut dyn MetadataSurface, key: &str, content: &str) {
    match surface.find_mut(key) {
        Some(entry) => entry.content = content.to_string(),
        None => {
            debug!(key, "Creating metadata entry");
            surface.append(MetaEntry {
                attribute: MetaAttribute::for_key(key),
                key: key.to_string(),
                content: content.to_string(),
            });
        }
    }
}
