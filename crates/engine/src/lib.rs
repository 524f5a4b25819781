//! Interaction core for the movie search autocomplete.
//!
//! Leaves first:
//! - [`debounce`]: cancellable scheduled call with a quiet-period deadline
//! - [`stale_guard`]: drops responses whose request has been superseded
//! - [`highlight`]: literal, case-insensitive match splitting
//! - [`suggestions`]: list visibility and the bounded keyboard/mouse cursor
//! - [`controller`]: composes the above around the query text
//!
//! Nothing here performs I/O; time is passed in as `Instant`s.

pub mod controller;
pub mod debounce;
pub mod highlight;
pub mod stale_guard;
pub mod suggestions;
pub mod text_input;

pub use controller::{Autocomplete, NavOutcome};
pub use debounce::Debouncer;
pub use highlight::{Segment, highlight};
pub use stale_guard::StaleGuard;
pub use suggestions::{ListPhase, NavKey, SuggestionList};
pub use text_input::TextInputState;
