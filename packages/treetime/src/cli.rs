pub mod dispatch;
pub mod parsed_args;
pub mod registry;
pub mod subcommand;
pub mod usage;
