use crate::cli::subcommand::HandlerOutput;
use crate::commands::clock::clock_args::TreetimeClockArgs;
use crate::commands::clock::clock_model::{ClockModel, ClockModelSummary};
use crate::io::json::{json_write_file, JsonPretty};
use crate::io::rtt_csv::read_rtt_table;
use crate::render::renderer::Renderer;
use crate::render::rtt_chart::draw_rtt_chart;
use eyre::WrapErr;
use log::info;

pub fn run_clock(args: &TreetimeClockArgs) -> HandlerOutput {
  let records = read_rtt_table(&args.dates, &(&args.columns).into())?;
  info!("Read {} tips from '{}'", records.len(), args.dates.display());

  let model = ClockModel::from_records(&records).wrap_err("When estimating clock model")?;

  json_write_file(&args.output, &ClockModelSummary::new(&model, records.len()), JsonPretty(true))?;

  if let Some(plot_rtt) = &args.plot_rtt {
    draw_rtt_chart(&Renderer::from_environment(), &records, Some(&model), plot_rtt)
      .wrap_err("When drawing root-to-tip chart")?;
  }

  Ok(None)
}
