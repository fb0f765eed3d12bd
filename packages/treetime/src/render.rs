pub mod backend;
pub mod renderer;
pub mod rtt_chart;
