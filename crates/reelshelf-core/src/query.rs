//! Listing query state.
//!
//! [`QueryState`] is the full set of parameters that decide which movies are
//! listed and in what order. Every setter persists the field it changes and,
//! except [`QueryState::set_page`], sends the user back to page 1.

use std::collections::BTreeSet;

use crate::config::{endpoints, keys};
use crate::prefs::{self, PreferenceStore};

/// Listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Title, case-insensitive ascending
    #[default]
    Alpha,
    /// Most recently added first
    Recent,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Alpha, SortOrder::Recent];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Recent => "recent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Alpha => "Title (A-Z)",
            Self::Recent => "Recently added",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }
}

/// Ownership status restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// No restriction (encoded as the empty string)
    Any,
    #[default]
    Owned,
    Wanted,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "",
            Self::Owned => "owned",
            Self::Wanted => "wanted",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" => Some(Self::Any),
            "owned" => Some(Self::Owned),
            "wanted" => Some(Self::Wanted),
            _ => None,
        }
    }

    /// Filter implied by the status checkboxes: exactly one checked selects
    /// it, none or both means no restriction.
    pub fn from_checked(checked: &[StatusFilter]) -> Self {
        match checked {
            [only] => *only,
            _ => Self::Any,
        }
    }
}

/// Current listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub query: String,
    pub sort: SortOrder,
    pub letter_filter: String,
    pub status_filter: StatusFilter,
    pub format_filters: BTreeSet<String>,
    pub page_size: Option<u32>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            query: String::new(),
            sort: SortOrder::default(),
            letter_filter: String::new(),
            status_filter: StatusFilter::default(),
            format_filters: BTreeSet::new(),
            page_size: None,
        }
    }
}

impl QueryState {
    /// Restore the last-used query from `store`. Page always starts at 1.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let sort = store
            .get(keys::SORT)
            .and_then(|s| SortOrder::parse(&s))
            .unwrap_or_default();
        let status_filter = store
            .get(keys::STATUS)
            .and_then(|s| StatusFilter::parse(&s))
            .unwrap_or_default();
        let letter_filter = store
            .get(keys::LETTER)
            .filter(|l| is_single_char(l))
            .unwrap_or_default();
        let format_filters = prefs::read_json::<_, Vec<String>>(store, keys::FORMATS)
            .map(normalize_formats)
            .unwrap_or_default();

        Self {
            page: 1,
            query: store.get(keys::SEARCH).unwrap_or_default(),
            sort,
            letter_filter,
            status_filter,
            format_filters,
            page_size: prefs::read_positive(store, keys::PAGE_SIZE),
        }
    }

    /// Move to page `n`. Session-only; zero is ignored.
    pub fn set_page(&mut self, n: u32) -> Self {
        if n >= 1 {
            self.page = n;
        }
        self.clone()
    }

    /// Replace the search text. Clears the letter filter.
    pub fn set_query<S: PreferenceStore + ?Sized>(&mut self, store: &mut S, text: &str) -> Self {
        self.query = text.to_string();
        self.letter_filter.clear();
        prefs::persist(store, keys::SEARCH, text);
        prefs::persist(store, keys::LETTER, "");
        self.reset_page()
    }

    pub fn set_sort<S: PreferenceStore + ?Sized>(&mut self, store: &mut S, sort: SortOrder) -> Self {
        self.sort = sort;
        prefs::persist(store, keys::SORT, sort.as_str());
        self.reset_page()
    }

    /// Jump to titles starting with `letter`; empty clears the jump. Longer
    /// strings are ignored.
    pub fn set_letter_filter<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        letter: &str,
    ) -> Self {
        if !letter.is_empty() && !is_single_char(letter) {
            return self.clone();
        }
        self.letter_filter = letter.to_string();
        prefs::persist(store, keys::LETTER, letter);
        self.reset_page()
    }

    pub fn set_status_filter<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        status: StatusFilter,
    ) -> Self {
        self.status_filter = status;
        prefs::persist(store, keys::STATUS, status.as_str());
        self.reset_page()
    }

    pub fn set_format_filters<S, I>(&mut self, store: &mut S, formats: I) -> Self
    where
        S: PreferenceStore + ?Sized,
        I: IntoIterator<Item = String>,
    {
        self.format_filters = normalize_formats(formats);
        let encoded: Vec<&str> = self.format_filters.iter().map(String::as_str).collect();
        prefs::persist_json(store, keys::FORMATS, &encoded);
        self.reset_page()
    }

    /// `None` restores the server default; `Some(0)` is ignored.
    pub fn set_page_size<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        size: Option<u32>,
    ) -> Self {
        match size {
            Some(0) => return self.clone(),
            Some(n) => prefs::persist(store, keys::PAGE_SIZE, &n.to_string()),
            None => prefs::forget(store, keys::PAGE_SIZE),
        }
        self.page_size = size;
        self.reset_page()
    }

    /// Drop status and format restrictions. Status is stored as the empty
    /// string rather than removed, so a reload keeps "no restriction".
    pub fn clear_filters<S: PreferenceStore + ?Sized>(&mut self, store: &mut S) -> Self {
        self.status_filter = StatusFilter::Any;
        self.format_filters.clear();
        prefs::forget(store, keys::FORMATS);
        prefs::persist(store, keys::STATUS, StatusFilter::Any.as_str());
        self.reset_page()
    }

    fn reset_page(&mut self) -> Self {
        self.page = 1;
        self.clone()
    }

    /// Query parameters for the listing endpoint, in request order.
    pub fn request_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("status", self.status_filter.as_str().to_string()),
        ];
        if let Some(size) = self.page_size {
            params.push(("page_size", size.to_string()));
        }
        if !self.query.is_empty() {
            params.push(("q", self.query.clone()));
        }
        if !self.letter_filter.is_empty() {
            params.push(("starts_with", self.letter_filter.clone()));
        }
        if !self.format_filters.is_empty() {
            let joined: Vec<&str> = self.format_filters.iter().map(String::as_str).collect();
            params.push(("formats", joined.join(",")));
        }
        params
    }

    /// Listing path with percent-encoded query string.
    pub fn listing_path(&self) -> String {
        format!("{}?{}", endpoints::SEARCH, encode_params(&self.request_params()))
    }
}

/// `k=v&k=v` with both sides percent-encoded.
pub fn encode_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn is_single_char(s: &str) -> bool {
    s.chars().count() == 1
}

fn normalize_formats<I: IntoIterator<Item = String>>(formats: I) -> BTreeSet<String> {
    formats
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}
