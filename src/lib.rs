#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Overline-Core is a deterministic ball-by-ball cricket scoring kernel.
//!
//! It is the pure computation core of a tournament operations platform: given
//! a match's current state plus one delivery's raw facts, it computes the
//! resulting delta (runs, extras, wicket, next strike), folds it into a fresh
//! immutable state snapshot, and keeps an applied-delivery log that makes undo
//! an exact one-ball rollback. The kernel performs no I/O of any kind; callers
//! exchange in-memory values with it and own everything else.
//!
//! The flow for one ball:
//!
//! 1. Build a [`DeliveryInput`] from the latest state via
//!    [`DeliveryInput::builder`].
//! 2. [`MatchState::apply_delivery`] validates it, computes a
//!    [`DeliveryOutcome`], and returns the next state with a new history
//!    entry; the previous state is untouched.
//! 3. [`MatchState::undo`] pops the last history entry and restores its
//!    captured pre-delivery snapshot wholesale.

// Shared leaf vocabulary (ids, run counts, extra/boundary/wicket enums).
pub mod types;

// Delivery input/outcome records and the input builder.
pub mod delivery;

// Innings snapshot, per-player cards, history, match state.
pub mod state;

// Kernel error types.
pub mod error;

// The calculator, reducer, and undo logic.
pub mod engine;

// Re-export the working set at the crate root.
pub use delivery::{DeliveryBuilder, DeliveryInput, DeliveryOutcome, Dismissal, WicketInput};
pub use engine::compute_outcome;
pub use error::DeliveryError;
pub use state::{AppliedDelivery, BatterCard, BatterSlot, BowlerCard, Extras, Innings, MatchState};
pub use types::{Boundary, ExtraKind, PlayerId, Runs, WicketKind};
