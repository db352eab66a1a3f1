use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, LevelFilter};
use protmap::demo::{self, DemoConfig, DemoSummary, DEFAULT_OUTPUT, DEFAULT_RADIUS};
use protmap::CError;
use protmap::map::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Parser, Debug)]
#[command(
    name = "protmap",
    version,
    about = "Build or load a small protein structure, query distances and neighbors, draw a top-down map and save it"
)]
struct Cli {
    /// Structure file to load instead of the built-in sample
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Where the structure is saved before being reloaded
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Neighbor search radius in Angstroms
    #[arg(short, long, value_name = "Å", default_value_t = DEFAULT_RADIUS)]
    radius: f64,

    /// Index of the atom used for distances and neighbor search
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    reference: usize,

    /// Map width in columns
    #[arg(long, value_name = "COLS", default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Map height in rows
    #[arg(long, value_name = "ROWS", default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn config(&self) -> DemoConfig {
        DemoConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            reference: self.reference,
            radius: self.radius,
            width: self.width,
            height: self.height,
        }
    }
}

/// Run the demo into `out` and flush it, so a closed stdout is an error
/// rather than silently lost output.
fn run_and_flush<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DemoSummary, CError> {
    let summary = demo::run(config, out)?;
    out.flush()?;
    Ok(summary)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.level_filter())
        .parse_default_env()
        .format_target(false)
        .init();
    debug!("{cli:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_and_flush(&cli.config(), &mut out) {
        Ok(summary) => {
            if !summary.is_success() {
                eprintln!("Finished with failed steps: {}", summary.failed_steps.join(", "));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("could not write output: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts writes but fails when flushed, like a pipe whose reader went away
    struct BrokenPipe(Vec<u8>);

    impl Write for BrokenPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader closed"))
        }
    }

    fn config_in(dir: &tempfile::TempDir) -> DemoConfig {
        DemoConfig {
            output: dir.path().join("protein_data.txt"),
            ..DemoConfig::default()
        }
    }

    #[test]
    fn flush_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = BrokenPipe(Vec::new());
        let err = run_and_flush(&config_in(&dir), &mut out).unwrap_err();
        assert!(matches!(err, CError::IoError(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(!out.0.is_empty());
    }

    #[test]
    fn flushed_run_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let summary = run_and_flush(&config_in(&dir), &mut out).unwrap();
        assert!(summary.is_success());
    }

    #[test]
    fn verbosity_levels() {
        let cli = Cli::parse_from(["protmap", "-vv"]);
        assert_eq!(cli.level_filter(), LevelFilter::Debug);
        let cli = Cli::parse_from(["protmap", "-q"]);
        assert_eq!(cli.level_filter(), LevelFilter::Off);
        assert_eq!(Cli::parse_from(["protmap"]).config(), DemoConfig::default());
    }
}
