mod anchors;
mod compose;
mod content;
mod handlers;
mod query;
mod scroll;

pub use anchors::{AnchorTarget, HeroButton, ScrollBehavior, ScrollRequest};
pub use compose::HomePage;
pub use content::{
    AboutContent, ContactInfo, ContentError, HeroContent, Project, SiteContent, SocialLink,
    TeachingItem,
};
pub use handlers::{HOME_TEMPLATE, NOT_FOUND_TEMPLATE, home_handler, not_found_handler, render_home};
pub(crate) use handlers::render_home_html;
pub use query::PageQuery;
pub use scroll::{MountedNavBar, NavBar, SCROLL_THRESHOLD, ScrollSignal};

#[cfg(test)]
mod tests;
