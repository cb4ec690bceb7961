use std::path::PathBuf;

use alurom::{codegen, scenarios, simulate, AluRom};
use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, Level};

/// Generates the Verilog package of the ALU + ROM datapath and runs the reference test vectors
/// through the cycle-accurate model.
#[derive(Debug, Parser)]
#[command(name = "alurom-examples", version)]
struct Cli {
    /// Directory the Verilog modules are written to.
    #[arg(long, default_value = "./build")]
    build_dir: PathBuf,

    /// Writes a waveform of all test vectors, run back to back, to this file.
    #[arg(long)]
    vcd: Option<PathBuf>,

    /// Clock period of the waveform in nanoseconds.
    #[arg(long, default_value_t = 10)]
    period: u64,

    /// Logs every clock edge.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(level: Level) {
    let _ = tracing_subscriber::fmt().without_time().with_target(false).with_max_level(level).try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { Level::DEBUG } else { Level::INFO });

    codegen::package()
        .gen_vir(&cli.build_dir)
        .with_context(|| format!("failed to generate Verilog in {}", cli.build_dir.display()))?;

    let scenarios = scenarios();
    let mut failed = 0;
    for scenario in &scenarios {
        let outcome = scenario.run();
        if outcome.passed() {
            info!(
                scenario = scenario.name,
                result = outcome.observed.result,
                flag = outcome.observed.flag,
                cycles = outcome.trace.len(),
                "pass"
            );
        } else {
            error!(
                scenario = scenario.name,
                result = outcome.observed.result,
                flag = outcome.observed.flag,
                expected_result = outcome.expected.result,
                expected_flag = outcome.expected.flag,
                "fail"
            );
            failed += 1;
        }
    }

    if let Some(path) = &cli.vcd {
        let stimuli = scenarios.iter().flat_map(|scenario| scenario.stimuli.iter().copied());
        simulate(&mut AluRom::new(), stimuli)
            .dump_vcd(path, cli.period)
            .with_context(|| format!("failed to write waveform to {}", path.display()))?;
    }

    if failed > 0 {
        bail!("{} of {} scenarios failed", failed, scenarios.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["alurom-examples"]);
        assert_eq!(cli.build_dir, PathBuf::from("./build"));
        assert_eq!(cli.vcd, None);
        assert_eq!(cli.period, 10);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_waveform_options() {
        let cli = Cli::parse_from(["alurom-examples", "--vcd", "run.vcd", "--period", "20", "-v"]);
        assert_eq!(cli.vcd, Some(PathBuf::from("run.vcd")));
        assert_eq!(cli.period, 20);
        assert!(cli.verbose);
    }
}
