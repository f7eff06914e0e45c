//! Core of the etacalc download estimator: unit tables, ETA and percent
//! computation, and the form model the CLI drives.

pub mod config;
pub mod error;
pub mod eta;
pub mod form;
pub mod logging;
pub mod measurement;
pub mod options;

pub use error::{FormError, UnitError};
pub use eta::{compute_eta, format_duration, percent_complete};
pub use measurement::{generate_measurements, Base, Measurement};
pub use options::{resolve_unit, Field, UnitOption};
