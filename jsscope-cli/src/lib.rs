pub mod api_client;
pub mod error;
pub mod input;

pub use error::{CliError, CliResult};
