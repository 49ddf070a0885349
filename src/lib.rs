//! autojump - weighted directory jumping
//!
//! Shared modules for the autojump CLI: the persisted weight store and the
//! fuzzy matcher that picks a jump target from it.

pub mod config;
pub mod errors;
pub mod logging;
pub mod matcher;
pub mod store;

pub use matcher::{Candidate, Matcher, SENTINEL};
pub use store::WeightStore;
