pub mod config;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use domain::model::Person;
