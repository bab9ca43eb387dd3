use super::{
    AnchorTarget, HeroButton, NavBar, PageQuery, SCROLL_THRESHOLD, SiteContent,
    content::{AboutContent, ContactInfo, HeroContent, Project, SocialLink, TeachingItem},
};
use crate::{
    contact::FormView,
    media::{
        CategoryChip, CategoryFilter, CategoryTag, FilterGrid, Gallery, GalleryImage,
        LIGHTBOX_BACKDROP, Playlist, Star, Testimonial, Testimonials, TrustIndicator, Video,
        VideoPlaylist, stars,
    },
    seo::{
        self, BreadcrumbItem, BusinessProfile, MetaDocument, SeoConfig, hints, schema::to_script_json,
    },
};
use chrono::Datelike;
use serde::Serialize;
use tracing::debug;

const GALLERY_ANCHOR: &str = "gallery";
const VIDEOS_ANCHOR: &str = "videos";
const REVIEWS_ANCHOR: &str = "reviews";

/// The landing page with all interaction state resolved for one request.
#[derive(Debug)]
pub struct HomePage {
    pub query: PageQuery,
    pub nav: NavBar,
    pub gallery: Gallery,
    pub playlist: VideoPlaylist,
    pub testimonials: Testimonials,
    pub form: FormView,
    pub meta: MetaDocument,
}

#[derive(Debug, Serialize)]
struct ChipView {
    slug: &'static str,
    label: &'static str,
    icon: Option<&'static str>,
    active: bool,
    href: String,
}

#[derive(Debug, Serialize)]
struct GalleryTile<'a> {
    image: &'a GalleryImage,
    href: String,
}

#[derive(Debug, Serialize)]
struct LightboxView<'a> {
    image: &'a GalleryImage,
    close_href: String,
    backdrop: &'static str,
}

#[derive(Debug, Serialize)]
struct GalleryView<'a> {
    categories: Vec<ChipView>,
    items: Vec<GalleryTile<'a>>,
    lightbox: Option<LightboxView<'a>>,
    sizes: &'static str,
}

#[derive(Debug, Serialize)]
struct PlaylistEntry<'a> {
    video: &'a Video,
    active: bool,
    href: String,
}

#[derive(Debug, Serialize)]
struct PlaylistView<'a> {
    current: Option<&'a Video>,
    entries: Vec<PlaylistEntry<'a>>,
    thumbnail_sizes: &'static str,
}

#[derive(Debug, Serialize)]
struct TestimonialCard<'a> {
    testimonial: &'a Testimonial,
    stars: Vec<Star>,
    category_label: &'static str,
    category_icon: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct TestimonialsView<'a> {
    categories: Vec<ChipView>,
    cards: Vec<TestimonialCard<'a>>,
    indicators: &'a [TrustIndicator],
}

#[derive(Debug, Serialize)]
struct HeroButtonView {
    label: &'static str,
    target: &'static str,
    behavior: &'static str,
}

#[derive(Debug, Serialize)]
struct NavView<'a> {
    class: &'static str,
    scrolled: bool,
    threshold: f64,
    studio_name: &'a str,
    social_links: &'a [SocialLink],
}

#[derive(Debug, Serialize)]
struct HeadView {
    meta_html: String,
    structured_data: Vec<String>,
}

#[derive(Debug, Serialize)]
struct HomeView<'a> {
    head: HeadView,
    nav: NavView<'a>,
    hero: &'a HeroContent,
    hero_buttons: Vec<HeroButtonView>,
    hero_sizes: &'static str,
    about: &'a AboutContent,
    about_anchor: &'static str,
    cta_anchor: &'static str,
    teaching: &'a [TeachingItem],
    projects: &'a [Project],
    also_filming: &'a [String],
    playlist: PlaylistView<'a>,
    gallery: GalleryView<'a>,
    testimonials: TestimonialsView<'a>,
    form: &'a FormView,
    contacts: &'a ContactInfo,
    social_links: &'a [SocialLink],
    footer_about: &'a str,
    copyright: &'a str,
    current_year: i32,
}

fn chips(list: Vec<CategoryChip>, href: impl Fn(&str) -> String) -> Vec<ChipView> {
    list.into_iter()
        .map(|chip| ChipView {
            href: href(chip.slug),
            slug: chip.slug,
            label: chip.label,
            icon: chip.icon,
            active: chip.active,
        })
        .collect()
}

impl HomePage {
    /// Resolves `query` against the content. Unknown categories fall back
    /// to showing everything; unknown ids are ignored.
    pub fn compose(
        content: &SiteContent,
        seo_config: &SeoConfig,
        base_url: Option<&str>,
        query: PageQuery,
        form: FormView,
    ) -> Self {
        let mut gallery = FilterGrid::new(content.gallery.clone());
        if let Some(slug) = query.category.as_deref() {
            gallery.set_filter(CategoryFilter::parse(slug));
        }
        if let Some(id) = query.image.as_deref()
            && let Err(e) = gallery.select(id)
        {
            debug!("Ignoring lightbox request: {}", e);
        }

        let mut playlist = Playlist::new(content.videos.clone());
        if let Some(id) = query.video.as_deref()
            && let Err(e) = playlist.select(id)
        {
            debug!("Ignoring video request: {}", e);
        }

        let mut testimonials = FilterGrid::new(content.testimonials.clone());
        if let Some(slug) = query.reviews.as_deref() {
            testimonials.set_filter(CategoryFilter::parse(slug));
        }

        let mut meta = MetaDocument::new();
        seo::publish(&absolutize(seo_config, base_url), &mut meta);

        // Links built from here on only carry state that actually applied.
        let query = PageQuery {
            category: filter_slug(gallery.filter()),
            image: gallery.selected().map(|image| image.id.clone()),
            video: query.video.filter(|id| playlist.is_current(id)),
            reviews: filter_slug(testimonials.filter()),
        };

        Self {
            query,
            nav: NavBar::default(),
            gallery,
            playlist,
            testimonials,
            form,
            meta,
        }
    }

    fn structured_data(&self, business: &BusinessProfile) -> Vec<String> {
        let mut crumbs = vec![BreadcrumbItem::new(&business.name, &business.url)];
        if let Some(image) = self.gallery.selected() {
            crumbs.push(BreadcrumbItem::new(
                "Галерея",
                join_url(&business.url, &format!("#{}", GALLERY_ANCHOR)),
            ));
            crumbs.push(BreadcrumbItem::new(
                &image.title,
                join_url(&business.url, &self.query.href(GALLERY_ANCHOR)),
            ));
        }

        [
            seo::local_business_schema(business),
            seo::organization_schema(business),
            seo::breadcrumb_schema(&crumbs),
        ]
        .iter()
        .map(to_script_json)
        .collect()
    }

    /// Template globals for `pages/index.html.liquid`.
    pub fn globals(
        &self,
        content: &SiteContent,
        business: &BusinessProfile,
    ) -> Result<liquid::Object, liquid::Error> {
        let query = &self.query;

        let gallery = GalleryView {
            categories: chips(self.gallery.categories(), |slug| {
                query.with_category(slug).without_image().href(GALLERY_ANCHOR)
            }),
            items: self
                .gallery
                .visible()
                .into_iter()
                .map(|image| GalleryTile {
                    image,
                    href: query.with_image(&image.id).href(GALLERY_ANCHOR),
                })
                .collect(),
            lightbox: self.gallery.selected().map(|image| LightboxView {
                image,
                close_href: query.without_image().href(GALLERY_ANCHOR),
                backdrop: LIGHTBOX_BACKDROP,
            }),
            sizes: hints::GALLERY.sizes,
        };

        let playlist = PlaylistView {
            current: self.playlist.current(),
            entries: self
                .playlist
                .items()
                .iter()
                .map(|video| PlaylistEntry {
                    video,
                    active: self.playlist.is_current(&video.id),
                    href: query.with_video(&video.id).href(VIDEOS_ANCHOR),
                })
                .collect(),
            thumbnail_sizes: hints::THUMBNAIL.sizes,
        };

        let testimonials = TestimonialsView {
            categories: chips(self.testimonials.categories(), |slug| {
                query.with_reviews(slug).href(REVIEWS_ANCHOR)
            }),
            cards: self
                .testimonials
                .visible()
                .into_iter()
                .map(|testimonial| TestimonialCard {
                    testimonial,
                    stars: stars(testimonial.rating),
                    category_label: testimonial.category.label(),
                    category_icon: testimonial.category.icon(),
                })
                .collect(),
            indicators: &content.trust_indicators,
        };

        let view = HomeView {
            head: HeadView {
                meta_html: self.meta.to_html(),
                structured_data: self.structured_data(business),
            },
            nav: NavView {
                class: self.nav.class(),
                scrolled: self.nav.is_scrolled(),
                threshold: SCROLL_THRESHOLD,
                studio_name: &content.studio_name,
                social_links: &content.social_links,
            },
            hero: &content.hero,
            hero_buttons: HeroButton::ALL
                .iter()
                .map(|button| {
                    let request = button.activate();
                    HeroButtonView {
                        label: button.label(),
                        target: request.target.id(),
                        behavior: request.behavior.as_str(),
                    }
                })
                .collect(),
            hero_sizes: hints::HERO.sizes,
            about: &content.about,
            about_anchor: AnchorTarget::About.id(),
            cta_anchor: AnchorTarget::Cta.id(),
            teaching: &content.teaching,
            projects: &content.projects,
            also_filming: &content.also_filming,
            playlist,
            gallery,
            testimonials,
            form: &self.form,
            contacts: &content.contacts,
            social_links: &content.social_links,
            footer_about: &content.footer_about,
            copyright: &content.copyright,
            current_year: chrono::Utc::now().year(),
        };

        liquid::to_object(&view)
    }
}

fn filter_slug<C: CategoryTag>(filter: CategoryFilter<C>) -> Option<String> {
    match filter {
        CategoryFilter::All => None,
        CategoryFilter::Only(tag) => Some(tag.slug().to_string()),
    }
}

/// Makes the image and canonical URL absolute when a base URL is known,
/// since link previews ignore relative paths.
fn absolutize(config: &SeoConfig, base_url: Option<&str>) -> SeoConfig {
    let Some(base) = base_url else {
        return config.clone();
    };
    SeoConfig {
        image: config.image.as_deref().map(|image| join_url(base, image)),
        url: Some(
            config
                .url
                .as_deref()
                .map(|url| join_url(base, url))
                .unwrap_or_else(|| join_url(base, "/")),
        ),
        ..config.clone()
    }
}

fn join_url(base: &str, path: &str) -> String {
    url::Url::parse(base)
        .and_then(|base| base.join(path))
        .map(|joined| joined.to_string())
        .unwrap_or_else(|_| path.to_string())
}
