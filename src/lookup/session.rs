//! Search-session coordination with stale-response cancellation.
//!
//! The lookup runs off the interaction thread, so by the time a response
//! arrives the user may have typed a newer query or closed the panel.
//! Each dispatched query gets a token carrying a monotonically
//! increasing generation; a response is applied only if its token still
//! matches the latest generation. Discarding stale responses is a
//! correctness requirement: a fast typist must never see results for an
//! abandoned query.

use crate::cards::Commander;

use super::query::{SearchQuery, MAX_RESULTS};

/// The network-facing lookup collaborator.
///
/// Given a query, returns candidate cards restricted to legendary
/// creatures, ordered by name. Transport and format are the
/// implementor's business; errors degrade to an empty result list.
pub trait CardSource {
    type Error: std::fmt::Display;

    fn search(&mut self, query: &SearchQuery) -> Result<Vec<Commander>, Self::Error>;
}

/// Proof that a query was dispatched under a specific generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryToken {
    generation: u64,
}

/// One open search panel's coordination state.
///
/// ```
/// use commander_tally::lookup::SearchSession;
///
/// let mut session = SearchSession::new();
/// let stale = session.begin();
/// let fresh = session.begin();
///
/// assert!(!session.apply(stale, Ok::<_, String>(vec![])));
/// assert!(session.apply(fresh, Ok::<_, String>(vec![])));
/// ```
#[derive(Debug, Default)]
pub struct SearchSession {
    generation: u64,
    in_flight: bool,
    results: Vec<Commander>,
}

impl SearchSession {
    /// Open a fresh session with no results.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new dispatched query, superseding all earlier ones.
    pub fn begin(&mut self) -> QueryToken {
        self.generation += 1;
        self.in_flight = true;
        QueryToken {
            generation: self.generation,
        }
    }

    /// Apply a query's response.
    ///
    /// Returns true if the response was current and the results were
    /// stored (errors store an empty list). A stale token, one issued
    /// before a newer `begin`, `clear`, or `close`, leaves the session
    /// untouched and returns false.
    pub fn apply<E: std::fmt::Display>(
        &mut self,
        token: QueryToken,
        response: Result<Vec<Commander>, E>,
    ) -> bool {
        if token.generation != self.generation {
            tracing::debug!(
                stale = token.generation,
                current = self.generation,
                "discarding superseded lookup response"
            );
            return false;
        }

        self.in_flight = false;
        self.results = match response {
            Ok(mut cards) => {
                cards.truncate(MAX_RESULTS);
                cards
            }
            Err(err) => {
                tracing::debug!(%err, "lookup failed, degrading to empty results");
                Vec::new()
            }
        };
        true
    }

    /// Dispatch a query against a synchronous source and apply it.
    pub fn run<S: CardSource>(&mut self, source: &mut S, query: &SearchQuery) -> &[Commander] {
        let token = self.begin();
        let response = source.search(query);
        self.apply(token, response);
        self.results()
    }

    /// Drop the current results and invalidate outstanding queries.
    ///
    /// Used when the text field goes blank.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.in_flight = false;
        self.results.clear();
    }

    /// Close the panel. Responses still in flight will be discarded.
    pub fn close(&mut self) {
        self.clear();
    }

    /// Whether a dispatched query is still unanswered.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.in_flight
    }

    /// The current result list, at most `MAX_RESULTS` entries.
    #[must_use]
    pub fn results(&self) -> &[Commander] {
        &self.results
    }
}
