use anyhow::Context;
use clap::Parser;
use generator::mix::random_mix;
use impactcore::{CoefficientTable, EnergyMix, MixValidationError};
use report_bridge::bridge::{bridge_bind_address, ReportBridge};
use report_bridge::model::ScenarioReport;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{ScenarioConfig, SLIDER_DEFAULTS};
use workflow::runner::Runner;

mod generator;
mod report_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Household energy mix impact tracker")]
struct Args {
    /// Load a scenario (usage, mix, baseline) from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Monthly electricity usage in kWh
    #[arg(long, default_value_t = 500.0)]
    monthly_usage: f64,
    #[arg(long, default_value_t = 40.0)]
    coal: f64,
    #[arg(long, default_value_t = 30.0)]
    natural_gas: f64,
    #[arg(long, default_value_t = 5.0)]
    oil: f64,
    #[arg(long, default_value_t = 10.0)]
    hydropower: f64,
    #[arg(long, default_value_t = 10.0)]
    solar: f64,
    #[arg(long, default_value_t = 5.0)]
    nuclear: f64,
    /// Replace the slider shares with a random mix drawn from this seed
    #[arg(long)]
    random_seed: Option<u64>,
    /// Print deaths per TWh and gCO2eq per kWh for every source
    #[arg(long, default_value_t = false)]
    list_sources: bool,
    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Append each report as a JSON line to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Keep the HTTP bridge alive for incoming evaluations
    #[arg(long, default_value_t = false)]
    serve: bool,
}

impl Args {
    fn slider_mix(&self) -> EnergyMix {
        let shares = [
            self.coal,
            self.natural_gas,
            self.oil,
            self.hydropower,
            self.solar,
            self.nuclear,
        ];
        SLIDER_DEFAULTS
            .iter()
            .zip(shares)
            .map(|((source, _), share)| (source.display_name(), share))
            .collect()
    }

    fn scenario_config(&self) -> anyhow::Result<ScenarioConfig> {
        if let Some(path) = &self.scenario {
            return ScenarioConfig::load(path);
        }
        let mix = match self.random_seed {
            Some(seed) => {
                let names: Vec<&str> = SLIDER_DEFAULTS
                    .iter()
                    .map(|(source, _)| source.display_name())
                    .collect();
                random_mix(seed, &names)
            }
            None => self.slider_mix(),
        };
        Ok(ScenarioConfig::from_args(self.monthly_usage, mix))
    }
}

fn print_sources() {
    println!("{:<12} {:>14} {:>16}", "Source", "Deaths/TWh", "gCO2eq/kWh");
    for profile in CoefficientTable::standard().profiles() {
        println!(
            "{:<12} {:>14.2} {:>16.0}",
            profile.name, profile.mortality_rate, profile.carbon_intensity
        );
    }
}

fn append_report(path: &Path, report: &ScenarioReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut line = serde_json::to_string(report).context("serializing report")?;
    line.push('\n');
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report file {}", path.display()))?;
    file.write_all(line.as_bytes())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_sources {
        print_sources();
        if !args.serve {
            return Ok(());
        }
    }

    let config = args.scenario_config()?;
    let runner = Arc::new(Runner::new());
    let bridge = ReportBridge::new(runner.clone());

    match runner.execute(&config) {
        Ok(report) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serializing report")?
                );
            } else {
                for line in report.summary_lines() {
                    println!("{}", line);
                }
            }
            if let Some(path) = &args.report {
                append_report(path, &report)?;
            }
            bridge.publish(&report);
        }
        Err(err) if args.serve => {
            bridge.publish_status(&format!("initial scenario rejected: {:#}", err));
        }
        Err(err) => {
            if let Some(invalid) = err.downcast_ref::<MixValidationError>() {
                eprintln!("{}", invalid);
            }
            return Err(err);
        }
    }

    let (calculations, errors) = runner.metrics();
    log::debug!("calculations={} errors={}", calculations, errors);

    if args.serve {
        let (addr, _server) = bridge.serve(bridge_bind_address())?;
        bridge.publish_status(&format!("HTTP bridge on {} (Ctrl+C to stop)...", addr));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn slider_flags_build_default_mix() {
        let args = Args::parse_from(["tracker"]);
        let config = args.scenario_config().unwrap();
        assert_eq!(config.mix, workflow::config::default_mix());
        assert_eq!(config.monthly_usage_kwh, 500.0);
    }

    #[test]
    fn slider_flags_override_shares() {
        let args = Args::parse_from(["tracker", "--coal", "0", "--solar", "50", "--monthly-usage", "300"]);
        let config = args.scenario_config().unwrap();
        assert_eq!(config.mix.share("Coal"), 0.0);
        assert_eq!(config.mix.share("Solar"), 50.0);
        assert_eq!(config.annual_energy_kwh(), 3600.0);
    }

    #[test]
    fn random_seed_replaces_sliders() {
        let args = Args::parse_from(["tracker", "--random-seed", "11"]);
        let config = args.scenario_config().unwrap();
        assert_eq!(config.mix.total(), 100.0);
        assert_eq!(config.mix.len(), SLIDER_DEFAULTS.len());
    }

    #[test]
    fn append_report_writes_json_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports/impact.jsonl");
        let report = Runner::new().execute(&ScenarioConfig::default()).unwrap();
        append_report(&path, &report).unwrap();
        append_report(&path, &report).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: ScenarioReport = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, report);
    }
}
