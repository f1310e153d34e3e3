//! User-visible notifications (toasts).

use crate::error::{FailureKind, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Error,
}

/// One toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub poster_url: Option<String>,
    pub level: NoticeLevel,
}

/// Pending toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    next_id: u64,
    items: Vec<Notice>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a toast and return its id.
    pub fn push(
        &mut self,
        level: NoticeLevel,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        poster_url: Option<String>,
    ) -> u64 {
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            title: title.into(),
            subtitle: subtitle.into(),
            poster_url: poster_url.filter(|p| !p.is_empty()),
            level,
        });
        self.next_id
    }

    pub fn success(&mut self, title: impl Into<String>, subtitle: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, title, subtitle, None)
    }

    /// `"{action} failed"` with the generic network/server message.
    pub fn failure(&mut self, action: &str, kind: FailureKind) -> u64 {
        self.push(
            NoticeLevel::Error,
            format!("{action} failed"),
            kind.message(),
            None,
        )
    }

    pub fn rejected(&mut self, err: &ValidationError) -> u64 {
        self.push(NoticeLevel::Info, err.heading(), err.to_string(), None)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }
}
