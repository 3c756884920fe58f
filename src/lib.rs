//! Score builder project submissions and rank them for the showcase gallery.
//!
//! A submission is validated at the boundary ([`submission::validate_submission`]),
//! scored by additive heuristics plus one injected quality roll
//! ([`scoring::calculate_score`]), and appended to an in-memory
//! [`gallery::Gallery`]. Display order is derived on demand by
//! [`gallery::rank`] and never stored.

pub mod browser;
pub mod config;
pub mod gallery;
pub mod output;
pub mod scoring;
pub mod submission;
pub mod submit;
pub mod thumbnail;
