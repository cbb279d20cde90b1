mod builder;
mod types;

mod contract;
mod revenue;
mod track;

pub use contract::*;
pub use revenue::*;
pub use track::*;

pub(crate) const STANDARD: &str = "resona";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const TRACK: &str = "TRACK_UPDATE";
pub(crate) const REVENUE: &str = "REVENUE_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
