pub mod clap_styles;
pub mod datetime;
pub mod error;
pub mod global_init;
