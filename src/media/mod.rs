// Media module - filterable grids, playlist and testimonials
mod error;
mod grid;
mod playlist;
mod rating;
mod types;

pub use error::MediaError;
pub use grid::{
    ALL_ICON, ALL_LABEL, ALL_SLUG, CategoryChip, CategoryFilter, FilterGrid, LIGHTBOX_BACKDROP,
};
pub use playlist::Playlist;
pub use rating::{MAX_RATING, Star, stars};
pub use types::*;

pub type Gallery = FilterGrid<GalleryImage>;
pub type Testimonials = FilterGrid<Testimonial>;
pub type VideoPlaylist = Playlist<Video>;
