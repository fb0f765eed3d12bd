pub mod clock_args;
pub mod clock_model;
pub mod run_clock;
