//! Meal-period clock.
//!
//! Maps the restaurant's local wall-clock hour onto breakfast, lunch, dinner
//! or closed. Boundaries are whole hours, so the current period is
//! re-evaluated by polling rather than by waking at each boundary.

pub use clock::*;
pub use period::*;
pub use watcher::*;

mod clock;
mod period;
mod watcher;
