pub mod base;
pub mod classification;
pub mod config;
pub mod core_gap;
pub mod emphasis;
pub mod enhancement;
pub mod fit_scoring;
