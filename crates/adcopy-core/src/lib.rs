//! adcopy core: brief data model, lookup catalog and error model
//!
//! Shared by the scorer, the generators and the HTTP surface. Nothing in here
//! performs I/O; every lookup resolves to a value, never an error.

pub mod brief;
pub mod catalog;
pub mod error;
pub mod fingerprint;

pub use brief::{parse_benefit_lines, CopyBrief};
pub use catalog::{AwarenessLevel, MasterStyle, Niche, NichePreset, Tone};
pub use error::AdcopyError;
pub use fingerprint::fingerprint;

/// Engine version reported by the API
pub const ADCOPY_VERSION: &str = env!("CARGO_PKG_VERSION");
