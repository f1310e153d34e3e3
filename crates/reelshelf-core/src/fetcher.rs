//! Listing fetch sequencing.
//!
//! Every listing request is issued as a [`FetchTicket`] carrying a sequence
//! number. Only the most recently issued ticket may update the grid; results
//! for older tickets are discarded, so a slow response can never overwrite a
//! newer render. In-flight requests are not cancelled.

use crate::query::QueryState;

/// An issued listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    /// Query snapshot the request was built from.
    pub query: QueryState,
}

/// Issues tickets and decides which results are still wanted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fetcher {
    issued: u64,
    in_flight: bool,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag a new request for `query`. Supersedes every earlier ticket.
    pub fn issue(&mut self, query: &QueryState) -> FetchTicket {
        self.issued += 1;
        self.in_flight = true;
        tracing::debug!(seq = self.issued, page = query.page, "listing fetch issued");
        FetchTicket {
            seq: self.issued,
            query: query.clone(),
        }
    }

    /// Whether `ticket` is the latest one. Accepting it settles the fetcher.
    pub fn accept(&mut self, ticket: &FetchTicket) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.issued,
                "discarding stale listing response"
            );
            return false;
        }
        self.in_flight = false;
        true
    }

    /// A request for the latest ticket is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn latest_seq(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_accepted() {
        let mut fetcher = Fetcher::new();
        let mut q = QueryState::default();
        let first = fetcher.issue(&q);
        q.set_page(2);
        let second = fetcher.issue(&q);

        assert!(fetcher.is_loading());
        assert!(fetcher.accept(&second));
        assert!(!fetcher.is_loading());
        assert!(!fetcher.accept(&first));
        assert_eq!(second.query.page, 2);
    }

    #[test]
    fn test_stale_accept_keeps_loading_flag() {
        let mut fetcher = Fetcher::new();
        let q = QueryState::default();
        let first = fetcher.issue(&q);
        let _second = fetcher.issue(&q);
        assert!(!fetcher.accept(&first));
        assert!(fetcher.is_loading());
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let mut fetcher = Fetcher::new();
        let q = QueryState::default();
        let seqs: Vec<u64> = (0..4).map(|_| fetcher.issue(&q).seq).collect();
        assert_eq!(seqs, vec![1, 2, 3, 4]);
        assert_eq!(fetcher.latest_seq(), 4);
    }
}
