pub mod treetime_cli;
pub mod verbosity;
