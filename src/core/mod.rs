//! Core business logic abstractions

pub mod config;
pub mod convert;
pub mod rates;
pub mod record;
pub mod time_ago;

// Re-export main types for cleaner imports
pub use config::{AppConfig, Locale, OutputFormat};
pub use convert::{Conversion, convert};
pub use rates::{RateProvider, RateSnapshot};
pub use record::ConversionRecord;
