use super::{Categorized, CategoryTag, MediaError};
use serde::Serialize;
use tracing::debug;

/// Background of the full-screen lightbox behind the detail panel.
pub const LIGHTBOX_BACKDROP: &str = "rgba(0, 0, 0, 0.6)";

pub const ALL_SLUG: &str = "all";
pub const ALL_LABEL: &str = "Все";
pub const ALL_ICON: &str = "🎬";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C: CategoryTag> CategoryFilter<C> {
    /// Unknown slugs fall back to `All`, so the filter never holds an
    /// undeclared tag.
    pub fn parse(slug: &str) -> Self {
        if slug == ALL_SLUG {
            return CategoryFilter::All;
        }
        C::from_slug(slug)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(active) => *active == category,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_SLUG,
            CategoryFilter::Only(tag) => tag.slug(),
        }
    }
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChip {
    pub slug: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub active: bool,
}

/// An ordered item collection with a category filter and an optional
/// focused item shown in an overlay.
#[derive(Debug, Clone)]
pub struct FilterGrid<T: Categorized> {
    items: Vec<T>,
    filter: CategoryFilter<T::Category>,
    // Index into `items`, which never changes after construction.
    selected: Option<usize>,
}

impl<T: Categorized> FilterGrid<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            filter: CategoryFilter::All,
            selected: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter(&self) -> CategoryFilter<T::Category> {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter<T::Category>) {
        debug!(filter = filter.slug(), "Grid filter changed");
        self.filter = filter;
    }

    pub fn visible(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| self.filter.matches(item.category()))
            .collect()
    }

    pub fn categories(&self) -> Vec<CategoryChip> {
        let all = CategoryChip {
            slug: ALL_SLUG,
            label: ALL_LABEL,
            icon: Some(ALL_ICON),
            active: self.filter == CategoryFilter::All,
        };

        std::iter::once(all)
            .chain(T::Category::ALL.iter().map(|tag| CategoryChip {
                slug: tag.slug(),
                label: tag.label(),
                icon: tag.icon(),
                active: self.filter == CategoryFilter::Only(*tag),
            }))
            .collect()
    }

    pub fn select(&mut self, id: &str) -> Result<&T, MediaError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| MediaError::UnknownItem(id.to_string()))?;
        self.selected = Some(index);
        Ok(&self.items[index])
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.map(|index| &self.items[index])
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
