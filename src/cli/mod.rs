pub mod args;
pub mod convert;
pub mod history;
pub mod output;
pub mod prompt;
pub mod ui;

pub use args::{Cli, ConversionRequest};
pub use output::Presenter;
