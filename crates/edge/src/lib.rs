pub mod cli;
pub mod settings;
pub mod wagtail;

mod error;

pub use error::Error;
