pub mod csv;
pub mod file;
pub mod fs;
pub mod json;
pub mod rtt_csv;
