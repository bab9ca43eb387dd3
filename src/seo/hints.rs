use serde::Serialize;

/// Responsive image hints for `<img sizes>` and `<picture>` sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageHint {
    pub sizes: &'static str,
    pub formats: &'static [&'static str],
}

pub const HERO: ImageHint = ImageHint {
    sizes: "(max-width: 640px) 100vw, (max-width: 1024px) 90vw, 1200px",
    formats: &["webp", "jpg"],
};

pub const GALLERY: ImageHint = ImageHint {
    sizes: "(max-width: 640px) 100vw, (max-width: 1024px) 50vw, 33vw",
    formats: &["webp", "jpg"],
};

pub const THUMBNAIL: ImageHint = ImageHint {
    sizes: "(max-width: 640px) 100vw, (max-width: 1024px) 50vw, 25vw",
    formats: &["webp", "jpg"],
};
