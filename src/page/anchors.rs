use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorTarget {
    Cta,
    About,
}

impl AnchorTarget {
    pub fn id(&self) -> &'static str {
        match self {
            AnchorTarget::Cta => "cta-section",
            AnchorTarget::About => "about-section",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Smooth,
}

impl ScrollBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub target: AnchorTarget,
    pub behavior: ScrollBehavior,
}

/// The two calls to action in the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroButton {
    Enroll,
    LearnMore,
}

impl HeroButton {
    pub const ALL: [HeroButton; 2] = [HeroButton::Enroll, HeroButton::LearnMore];

    pub fn label(&self) -> &'static str {
        match self {
            HeroButton::Enroll => "Записаться на занятие",
            HeroButton::LearnMore => "Узнать больше",
        }
    }

    pub fn target(&self) -> AnchorTarget {
        match self {
            HeroButton::Enroll => AnchorTarget::Cta,
            HeroButton::LearnMore => AnchorTarget::About,
        }
    }

    pub fn activate(&self) -> ScrollRequest {
        ScrollRequest {
            target: self.target(),
            behavior: ScrollBehavior::Smooth,
        }
    }
}
