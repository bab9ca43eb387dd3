use serde::{Deserialize, Serialize};

/// Interaction state carried in the landing page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageQuery {
    /// Gallery category slug.
    pub category: Option<String>,
    /// Gallery image open in the lightbox.
    pub image: Option<String>,
    /// Playing video.
    pub video: Option<String>,
    /// Testimonial category slug.
    pub reviews: Option<String>,
}

impl PageQuery {
    pub fn with_category(&self, slug: &str) -> Self {
        Self {
            category: Some(slug.to_string()),
            ..self.clone()
        }
    }

    pub fn with_image(&self, id: &str) -> Self {
        Self {
            image: Some(id.to_string()),
            ..self.clone()
        }
    }

    pub fn without_image(&self) -> Self {
        Self {
            image: None,
            ..self.clone()
        }
    }

    pub fn with_video(&self, id: &str) -> Self {
        Self {
            video: Some(id.to_string()),
            ..self.clone()
        }
    }

    pub fn with_reviews(&self, slug: &str) -> Self {
        Self {
            reviews: Some(slug.to_string()),
            ..self.clone()
        }
    }

    /// Link to the landing page in this state, scrolled to `anchor`.
    /// The `all` sentinel is left out of the URL.
    pub fn href(&self, anchor: &str) -> String {
        let params: Vec<String> = [
            ("category", &self.category),
            ("image", &self.image),
            ("video", &self.video),
            ("reviews", &self.reviews),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty() && *v != crate::media::ALL_SLUG)
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();

        let mut href = String::from("/");
        if !params.is_empty() {
            href.push('?');
            href.push_str(&params.join("&"));
        }
        if !anchor.is_empty() {
            href.push('#');
            href.push_str(anchor);
        }
        href
    }
}
