pub mod cli;
pub mod commands;
pub mod io;
pub mod render;
pub mod utils;
