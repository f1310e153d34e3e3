//! Listing view model.
//!
//! [`render`] turns a [`ListingResult`] into everything the grid shows:
//! poster cards with their badges, the pagination controls and the total.
//! The output depends on the result alone, so the same listing always
//! produces the same view and each render replaces the previous one whole.

use crate::config::TMDB_BASE_URL;
use crate::models::{ItemId, ItemSummary, ListingResult};

/// One poster in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosterCard {
    pub id: ItemId,
    pub title: String,
    pub poster_url: Option<String>,
    /// Distinguishing edition label, `None` for theatrical or blank versions.
    pub version_badge: Option<String>,
    pub format_badge: Option<String>,
    /// Item is on the wish list.
    pub wanted: bool,
    /// Link to the external metadata page (or a search for it).
    pub link_url: String,
    /// Full record for the edit dialog.
    pub item: ItemSummary,
}

/// Previous/next controls and the page label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    /// Target page of the "previous" control, when shown.
    pub prev: Option<u32>,
    /// Target page of the "next" control, when shown.
    pub next: Option<u32>,
    pub label: String,
}

/// Everything the listing area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub cards: Vec<PosterCard>,
    pub pagination: PaginationView,
    pub total_count: u64,
}

impl GridView {
    pub fn ids(&self) -> Vec<ItemId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

pub fn render(listing: &ListingResult) -> GridView {
    GridView {
        cards: listing.items.iter().map(poster_card).collect(),
        pagination: pagination(listing.page, listing.total_pages),
        total_count: listing.total_count,
    }
}

fn poster_card(item: &ItemSummary) -> PosterCard {
    let format = item.format.trim();
    PosterCard {
        id: item.id,
        title: item.title.clone(),
        poster_url: Some(item.poster_url.clone()).filter(|p| !p.is_empty()),
        version_badge: version_badge(&item.version),
        format_badge: (!format.is_empty()).then(|| format.to_string()),
        wanted: item.is_wanted(),
        link_url: external_link(item),
        item: item.clone(),
    }
}

pub fn pagination(page: u32, total_pages: u32) -> PaginationView {
    PaginationView {
        prev: (page > 1).then(|| page - 1),
        next: (page < total_pages).then(|| page + 1),
        label: format!("Page {} of {}", page, total_pages.max(1)),
    }
}

/// Normalized edition label for a raw version string.
///
/// Blank and theatrical versions get no badge; known editions are matched by
/// substring regardless of case; anything else passes through trimmed.
pub fn version_badge(raw: &str) -> Option<String> {
    let version = raw.trim();
    let lower = version.to_lowercase();
    if version.is_empty() || lower == "theatrical" {
        return None;
    }
    let label = if lower.contains("director") {
        "Director's Cut"
    } else if lower.contains("extended") {
        "Extended Cut"
    } else if lower.contains("collector") {
        "Collector's Edition"
    } else if lower.contains("special") {
        "Special Edition"
    } else {
        version
    };
    Some(label.to_string())
}

/// Movie page when the external id is known, otherwise a title (+ year) search.
pub fn external_link(item: &ItemSummary) -> String {
    match item.external_id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => format!("{}/movie/{}", TMDB_BASE_URL, urlencoding::encode(id)),
        None => {
            let mut query = item.title.clone();
            if !item.year.is_empty() {
                query.push(' ');
                query.push_str(&item.year);
            }
            format!("{}/search?query={}", TMDB_BASE_URL, urlencoding::encode(&query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, title: &str) -> ItemSummary {
        ItemSummary {
            id,
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_version_badge_mapping() {
        assert_eq!(
            version_badge("Director's Cut (Extended)").as_deref(),
            Some("Director's Cut")
        );
        assert_eq!(version_badge("DIRECTOR'S CUT").as_deref(), Some("Director's Cut"));
        assert_eq!(version_badge("extended edition").as_deref(), Some("Extended Cut"));
        assert_eq!(
            version_badge("Collector's Box").as_deref(),
            Some("Collector's Edition")
        );
        assert_eq!(version_badge("SPECIAL").as_deref(), Some("Special Edition"));
        assert_eq!(version_badge("  Unrated  ").as_deref(), Some("Unrated"));
        assert_eq!(version_badge("Theatrical"), None);
        assert_eq!(version_badge(" theatrical "), None);
        assert_eq!(version_badge(""), None);
    }

    #[test]
    fn test_version_badge_is_idempotent() {
        for raw in ["Director's Cut (Extended)", "extended", "Collector", "special ed", "Unrated"] {
            let once = version_badge(raw).unwrap();
            assert_eq!(version_badge(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn test_pagination_controls() {
        for (page, pages) in [(1, 1), (1, 3), (2, 3), (3, 3), (1, 0), (5, 2)] {
            let view = pagination(page, pages);
            assert_eq!(view.prev.is_some(), page > 1, "prev for {page}/{pages}");
            assert_eq!(view.next.is_some(), page < pages, "next for {page}/{pages}");
        }
        let middle = pagination(2, 3);
        assert_eq!(middle.prev, Some(1));
        assert_eq!(middle.next, Some(3));
        assert_eq!(middle.label, "Page 2 of 3");
    }

    #[test]
    fn test_empty_listing_renders_nothing() {
        let listing = ListingResult {
            items: vec![],
            page: 1,
            total_pages: 1,
            total_count: 0,
        };
        let view = render(&listing);
        assert!(view.is_empty());
        assert_eq!(view.pagination.prev, None);
        assert_eq!(view.pagination.next, None);
        assert_eq!(view.total_count, 0);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut wanted = item(2, "Heat");
        wanted.status = "wanted".to_string();
        wanted.format = "DVD".to_string();
        wanted.version = "Theatrical".to_string();
        let listing = ListingResult {
            items: vec![item(1, "Alien"), wanted],
            page: 1,
            total_pages: 2,
            total_count: 3,
        };
        let view = render(&listing);
        assert_eq!(view, render(&listing));
        assert_eq!(view.ids(), vec![1, 2]);
        assert!(!view.cards[0].wanted);
        assert_eq!(view.cards[0].format_badge, None);
        assert!(view.cards[1].wanted);
        assert_eq!(view.cards[1].format_badge.as_deref(), Some("DVD"));
        assert_eq!(view.cards[1].version_badge, None);
    }

    #[test]
    fn test_external_link() {
        let mut alien = item(1, "Alien");
        alien.year = "1979".to_string();
        assert_eq!(
            external_link(&alien),
            "https://www.themoviedb.org/search?query=Alien%201979"
        );
        alien.external_id = Some("348".to_string());
        assert_eq!(external_link(&alien), "https://www.themoviedb.org/movie/348");
    }
}
