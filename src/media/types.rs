use serde::{Deserialize, Serialize};

/// Anything that can be addressed in a grid by its identifier.
pub trait MediaItem {
    fn id(&self) -> &str;
}

/// A closed set of labels used to filter a media collection.
pub trait CategoryTag: std::fmt::Debug + Copy + Eq + Sized + 'static {
    /// Every tag, in the order it is offered to visitors.
    const ALL: &'static [Self];

    fn slug(&self) -> &'static str;
    fn label(&self) -> &'static str;

    fn icon(&self) -> Option<&'static str> {
        None
    }

    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.slug() == slug)
    }
}

pub trait Categorized: MediaItem {
    type Category: CategoryTag;

    fn category(&self) -> Self::Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Filming,
    Studio,
    Editing,
    Festival,
}

impl CategoryTag for GalleryCategory {
    const ALL: &'static [Self] = &[
        GalleryCategory::Filming,
        GalleryCategory::Studio,
        GalleryCategory::Editing,
        GalleryCategory::Festival,
    ];

    fn slug(&self) -> &'static str {
        match self {
            GalleryCategory::Filming => "filming",
            GalleryCategory::Studio => "studio",
            GalleryCategory::Editing => "editing",
            GalleryCategory::Festival => "festival",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            GalleryCategory::Filming => "Съемки",
            GalleryCategory::Studio => "Студия",
            GalleryCategory::Editing => "Монтаж",
            GalleryCategory::Festival => "Фестивали",
        }
    }

    fn icon(&self) -> Option<&'static str> {
        Some(match self {
            GalleryCategory::Filming => "📹",
            GalleryCategory::Studio => "🎥",
            GalleryCategory::Editing => "✂️",
            GalleryCategory::Festival => "🏆",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialCategory {
    Parent,
    Student,
    Teacher,
}

impl CategoryTag for TestimonialCategory {
    const ALL: &'static [Self] = &[
        TestimonialCategory::Parent,
        TestimonialCategory::Student,
        TestimonialCategory::Teacher,
    ];

    fn slug(&self) -> &'static str {
        match self {
            TestimonialCategory::Parent => "parent",
            TestimonialCategory::Student => "student",
            TestimonialCategory::Teacher => "teacher",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TestimonialCategory::Parent => "Родитель",
            TestimonialCategory::Student => "Ученик",
            TestimonialCategory::Teacher => "Педагог",
        }
    }

    fn icon(&self) -> Option<&'static str> {
        Some(match self {
            TestimonialCategory::Parent => "👨‍👩‍👧",
            TestimonialCategory::Student => "🎬",
            TestimonialCategory::Teacher => "👨‍🏫",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub category: GalleryCategory,
    pub title: String,
    pub description: String,
}

impl MediaItem for GalleryImage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for GalleryImage {
    type Category = GalleryCategory;

    fn category(&self) -> GalleryCategory {
        self.category
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub embed_url: String,
    pub duration: String,
    pub date: String,
}

impl MediaItem for Video {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub text: String,
    pub rating: u8,
    pub category: TestimonialCategory,
}

impl MediaItem for Testimonial {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Categorized for Testimonial {
    type Category = TestimonialCategory;

    fn category(&self) -> TestimonialCategory {
        self.category
    }
}

/// A headline figure shown under the testimonials grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustIndicator {
    pub number: String,
    pub label: String,
    pub icon: String,
}
