#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::float_cmp
)]

//! Preview-versus-live aesthetics comparison.
//!
//! A page's preview and live variants are scored by a remote service
//! ([`scoring`]), aligned metric by metric ([`compare`]), and rendered as a
//! color-coded table ([`render`]). [`overlay`] ties the steps together for one
//! host page.

pub mod compare;
pub mod config;
pub mod error;
pub mod overlay;
pub mod render;
pub mod scoring;
pub mod ui;

pub use compare::{ComparisonTable, build};
pub use config::Config;
pub use error::{FetchFailure, PreviewError};
pub use scoring::{Fetched, MetricSet, ScoreSource, ScoringClient, parse};
