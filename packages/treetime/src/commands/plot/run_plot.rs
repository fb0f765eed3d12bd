use crate::cli::subcommand::HandlerOutput;
use crate::commands::clock::clock_model::ClockModel;
use crate::commands::plot::plot_args::TreetimePlotArgs;
use crate::io::rtt_csv::read_rtt_table;
use crate::render::renderer::{ChartSize, Renderer};
use crate::render::rtt_chart::draw_rtt_chart;
use eyre::WrapErr;
use log::warn;

pub fn run_plot(args: &TreetimePlotArgs) -> HandlerOutput {
  let records = read_rtt_table(&args.input, &(&args.columns).into())?;

  let model = match ClockModel::from_records(&records) {
    Ok(model) => Some(model),
    Err(report) => {
      warn!("Root-to-tip regression line will not be drawn: {report}");
      None
    }
  };

  let renderer = Renderer::from_environment().with_size(ChartSize::new(args.width, args.height));

  draw_rtt_chart(&renderer, &records, model.as_ref(), &args.output)
    .wrap_err_with(|| format!("When plotting '{}'", args.input.display()))?;

  Ok(None)
}
