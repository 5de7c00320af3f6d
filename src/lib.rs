// Library entry point
pub mod cli;
pub mod constants;
pub mod error;
pub mod logging;
pub mod settings;
