//! Commander-name lookup coordination.
//!
//! The lookup itself is an external collaborator; this module owns the
//! pieces with correctness requirements around it:
//!
//! - `Debouncer`: only the most recent text within the idle window is
//!   dispatched.
//! - `SearchSession`: generation-counter cancellation so a stale
//!   response never lands after a newer query or a closed panel.
//! - `SearchQuery` / `parse_search_payload`: query restriction to
//!   legendary creatures and tolerant payload decoding.

pub mod debounce;
pub mod query;
pub mod session;

pub use debounce::{Debouncer, DEBOUNCE_WINDOW};
pub use query::{parse_search_payload, SearchQuery, MAX_RESULTS};
pub use session::{CardSource, QueryToken, SearchSession};
