pub mod opts;
pub mod run;
