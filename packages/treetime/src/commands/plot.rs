pub mod plot_args;
pub mod run_plot;
