use super::*;
use crate::{
    contact::FormView,
    media::{CategoryFilter, GalleryCategory, TestimonialCategory},
    seo::{BusinessProfile, SeoConfig},
};

fn compose(query: PageQuery) -> HomePage {
    let content = SiteContent::builtin().unwrap();
    HomePage::compose(
        &content,
        &SeoConfig::default(),
        None,
        query,
        FormView::default(),
    )
}

#[test]
fn test_nav_threshold() {
    assert!(!NavBar::at_offset(0.0).is_scrolled());
    assert!(!NavBar::at_offset(SCROLL_THRESHOLD).is_scrolled());
    assert!(NavBar::at_offset(50.5).is_scrolled());
    assert_eq!(NavBar::at_offset(10.0).class(), "bg-transparent");
    assert_eq!(NavBar::at_offset(120.0).class(), "bg-white shadow-lg");
}

#[test]
fn test_nav_syncs_on_mount() {
    let signal = ScrollSignal::new();
    signal.emit(200.0);

    let mounted = NavBar::default().mount(&signal);
    assert!(mounted.nav().is_scrolled());
}

#[test]
fn test_nav_follows_signal() {
    let signal = ScrollSignal::new();
    let mut mounted = NavBar::default().mount(&signal);
    assert!(!mounted.nav().is_scrolled());

    signal.emit(75.0);
    assert!(mounted.sync());
    assert!(mounted.nav().is_scrolled());

    signal.emit(80.0);
    assert!(!mounted.sync());

    signal.emit(0.0);
    assert!(mounted.sync());
    assert!(!mounted.nav().is_scrolled());
}

#[test]
fn test_unmount_releases_subscription() {
    let signal = ScrollSignal::new();
    assert_eq!(signal.subscriber_count(), 0);

    let first = NavBar::default().mount(&signal);
    let second = NavBar::default().mount(&signal);
    assert_eq!(signal.subscriber_count(), 2);

    first.unmount();
    assert_eq!(signal.subscriber_count(), 1);

    drop(second);
    assert_eq!(signal.subscriber_count(), 0);
}

#[tokio::test]
async fn test_next_waits_for_scroll() {
    let signal = ScrollSignal::new();
    let mut mounted = NavBar::default().mount(&signal);

    signal.emit(300.0);
    assert!(mounted.next().await);
    assert!(mounted.nav().is_scrolled());

    drop(signal);
    assert!(!mounted.next().await);
}

#[test]
fn test_hero_buttons_scroll_smoothly() {
    assert_eq!(AnchorTarget::Cta.id(), "cta-section");
    assert_eq!(AnchorTarget::About.id(), "about-section");

    let enroll = HeroButton::Enroll.activate();
    assert_eq!(enroll.target, AnchorTarget::Cta);
    assert_eq!(enroll.behavior, ScrollBehavior::Smooth);

    let learn_more = HeroButton::LearnMore.activate();
    assert_eq!(learn_more.target, AnchorTarget::About);
    assert_eq!(learn_more.behavior.as_str(), "smooth");
}

#[test]
fn test_builtin_content() {
    let content = SiteContent::builtin().unwrap();
    assert_eq!(content.studio_name, "Два-Кадра");
    assert_eq!(content.videos.len(), 4);
    assert_eq!(content.gallery.len(), 5);
    assert_eq!(content.testimonials.len(), 6);
    assert_eq!(content.teaching.len(), 6);
    assert_eq!(content.trust_indicators.len(), 3);
}

#[test]
fn test_content_rejects_duplicate_ids() {
    let source = format!(
        "{}\n[[videos]]\nid = \"1\"\ntitle = \"t\"\ndescription = \"d\"\nthumbnail = \"x.jpg\"\nembed_url = \"https://example.com\"\nduration = \"1:00\"\ndate = \"2024\"\n",
        include_str!("../../content/site.toml")
    );
    match SiteContent::parse(&source) {
        Err(ContentError::DuplicateId { kind, id }) => {
            assert_eq!(kind, "video");
            assert_eq!(id, "1");
        }
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_content_load_from_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("site.toml");
    let source = include_str!("../../content/site.toml")
        .replacen("studio_name = \"Два-Кадра\"", "studio_name = \"Test\"", 1);
    tokio::fs::write(&path, source).await.unwrap();

    let content = SiteContent::load(Some(&path)).await.unwrap();
    assert_eq!(content.studio_name, "Test");

    let missing = SiteContent::load(Some(&temp_dir.path().join("nope.toml"))).await;
    assert!(matches!(missing, Err(ContentError::IoError(_))));
}

#[test]
fn test_compose_defaults() {
    let page = compose(PageQuery::default());

    assert_eq!(page.gallery.filter(), CategoryFilter::All);
    assert_eq!(page.gallery.visible().len(), 5);
    assert!(page.gallery.selected().is_none());
    assert_eq!(page.playlist.current().map(|v| v.id.as_str()), Some("1"));
    assert_eq!(page.testimonials.visible().len(), 6);
    assert!(!page.nav.is_scrolled());
    assert_eq!(page.meta.get("og:type"), Some("website"));
}

#[test]
fn test_compose_applies_query() {
    let page = compose(PageQuery {
        category: Some("filming".to_string()),
        image: Some("4".to_string()),
        video: Some("3".to_string()),
        reviews: Some("teacher".to_string()),
    });

    assert_eq!(
        page.gallery.filter(),
        CategoryFilter::Only(GalleryCategory::Filming)
    );
    let ids: Vec<&str> = page.gallery.visible().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "4"]);
    assert_eq!(page.gallery.selected().map(|g| g.id.as_str()), Some("4"));
    assert_eq!(page.playlist.current().map(|v| v.id.as_str()), Some("3"));
    assert_eq!(
        page.testimonials.filter(),
        CategoryFilter::Only(TestimonialCategory::Teacher)
    );
    assert_eq!(page.testimonials.visible().len(), 2);
}

#[test]
fn test_compose_ignores_unknown_state() {
    let page = compose(PageQuery {
        category: Some("cartoons".to_string()),
        image: Some("99".to_string()),
        video: Some("99".to_string()),
        reviews: Some("critic".to_string()),
    });

    assert_eq!(page.gallery.filter(), CategoryFilter::All);
    assert!(page.gallery.selected().is_none());
    assert_eq!(page.playlist.current().map(|v| v.id.as_str()), Some("1"));
    assert_eq!(page.testimonials.filter(), CategoryFilter::All);
    assert_eq!(page.query, PageQuery::default());
}

#[test]
fn test_compose_absolutizes_metadata() {
    let content = SiteContent::builtin().unwrap();
    let seo = SeoConfig {
        url: None,
        ..SeoConfig::default()
    };
    let page = HomePage::compose(
        &content,
        &seo,
        Some("https://studio.example"),
        PageQuery::default(),
        FormView::default(),
    );

    assert_eq!(
        page.meta.get("og:image"),
        Some("https://studio.example/images/hero-kids-filming.jpg")
    );
    assert_eq!(page.meta.get("og:url"), Some("https://studio.example/"));
}

#[test]
fn test_globals_cover_every_section() {
    let content = SiteContent::builtin().unwrap();
    let page = compose(PageQuery::default().with_image("2"));
    let globals = page.globals(&content, &BusinessProfile::default()).unwrap();

    for key in [
        "head",
        "nav",
        "hero",
        "hero_buttons",
        "about",
        "teaching",
        "projects",
        "playlist",
        "gallery",
        "testimonials",
        "form",
        "contacts",
        "social_links",
        "current_year",
    ] {
        assert!(globals.contains_key(key), "missing {}", key);
    }

    let json = serde_json::to_value(&globals).unwrap();
    assert_eq!(
        json["gallery"]["lightbox"]["backdrop"],
        "rgba(0, 0, 0, 0.6)"
    );
    assert_eq!(
        json["gallery"]["lightbox"]["close_href"],
        "/#gallery"
    );
    assert_eq!(json["gallery"]["categories"][0]["slug"], "all");
    assert_eq!(json["gallery"]["categories"][0]["active"], true);
    assert_eq!(json["head"]["structured_data"].as_array().unwrap().len(), 3);
    assert_eq!(json["hero_buttons"][0]["target"], "cta-section");
    assert_eq!(json["form"]["submit_label"], "Записаться на занятие");
    assert_eq!(json["form"]["submitting_label"], "Отправка...");
    assert_eq!(
        json["testimonials"]["cards"][0]["stars"]
            .as_array()
            .unwrap()
            .len(),
        5
    );
}
