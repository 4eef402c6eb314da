pub mod config;
pub mod host;
pub mod path_validation;
