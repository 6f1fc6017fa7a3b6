use check_swap::config::ProbeConfig;
use check_swap::models::{DisplayUnit, Status};
use check_swap::probe::{self, ProbeError};
use check_swap::{sampler, version};
use clap::{CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[derive(Parser)]
#[command(
    name = "check_swap",
    version = version::VERSION,
    about = "This plugin checks the swap utilization.",
    args_override_self = true,
    after_help = "Examples:\n  check_swap -w 30% -c 50%"
)]
struct Cli {
    /// Warning threshold (range expression)
    #[arg(short, long, value_name = "PERCENT", allow_hyphen_values = true)]
    warning: Option<String>,
    /// Critical threshold (range expression)
    #[arg(short, long, value_name = "PERCENT", allow_hyphen_values = true)]
    critical: Option<String>,
    /// Show output in bytes
    #[arg(short = 'b', long = "byte", overrides_with_all = ["kilobyte", "megabyte", "gigabyte"])]
    byte: bool,
    /// Show output in KB (the default)
    #[arg(short = 'k', long = "kilobyte", overrides_with_all = ["byte", "megabyte", "gigabyte"])]
    kilobyte: bool,
    /// Show output in MB
    #[arg(short = 'm', long = "megabyte", overrides_with_all = ["byte", "kilobyte", "gigabyte"])]
    megabyte: bool,
    /// Show output in GB
    #[arg(short = 'g', long = "gigabyte", overrides_with_all = ["byte", "kilobyte", "megabyte"])]
    gigabyte: bool,
    /// TOML file with default thresholds, unit and procfs paths
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn unit(&self) -> Option<DisplayUnit> {
        if self.byte {
            Some(DisplayUnit::Bytes)
        } else if self.kilobyte {
            Some(DisplayUnit::Kilobytes)
        } else if self.megabyte {
            Some(DisplayUnit::Megabytes)
        } else if self.gigabyte {
            Some(DisplayUnit::Gigabytes)
        } else {
            None
        }
    }
}

fn exit(status: Status) -> ExitCode {
    ExitCode::from(status.code() as u8)
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut command = Cli::command().before_help(version::banner("check_swap"));
    let cli = match command
        .try_get_matches_from_mut(std::env::args_os())
        .and_then(|m| Cli::from_arg_matches(&m))
    {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                exit(Status::Unknown)
            } else {
                exit(Status::Ok)
            };
        }
    };

    let config = match ProbeConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to load config");
            println!("{}", probe::unknown_line(&e));
            return exit(Status::Unknown);
        }
    };

    let (warning, critical) =
        config.threshold_exprs(cli.warning.as_deref(), cli.critical.as_deref());
    let unit = cli.unit().unwrap_or(config.output.unit);
    let source = sampler::default_source(config.sampler.procfs_paths());

    match probe::check(
        source.as_ref(),
        warning,
        critical,
        unit,
        probe::SAMPLE_INTERVAL,
    ) {
        Ok(report) => {
            println!("{}", report.line);
            ExitCode::from(report.exit_code() as u8)
        }
        Err(ProbeError::Threshold(e)) => {
            eprintln!("{}\n", e);
            let _ = command.write_long_help(&mut std::io::stderr());
            exit(Status::Unknown)
        }
        Err(ProbeError::Sampler(e)) => {
            tracing::error!(error = %e, "swap sampling failed");
            println!("{}", probe::unknown_line(&e));
            exit(Status::Unknown)
        }
    }
}
