mod core;
mod observability;
mod overlay;
mod scoring;

pub use self::core::Config;
pub use observability::ObservabilityConfig;
pub use overlay::OverlayConfig;
pub use scoring::ScoringConfig;
