//! The demonstration sequence run by the `protmap` binary.
//!
//! Every step reports its own failure and the sequence carries on, so a bad
//! index or an unwritable output path never stops the remaining steps.

use crate::display;
use crate::error::CError;
use crate::format::{load_from_file, save_to_file};
use crate::map::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::protein::Protein;
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "protein_data.txt";
pub const DEFAULT_RADIUS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Structure to load instead of the built-in sample
    pub input: Option<PathBuf>,
    pub output: PathBuf,
    pub reference: usize,
    pub radius: f64,
    pub width: usize,
    pub height: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            input: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            reference: 0,
            radius: DEFAULT_RADIUS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Names of the steps that failed during a run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoSummary {
    pub failed_steps: Vec<&'static str>,
}

impl DemoSummary {
    pub fn is_success(&self) -> bool {
        self.failed_steps.is_empty()
    }
}

/// A small backbone fragment with a side chain
pub fn sample_protein() -> Protein {
    let mut protein = Protein::new("Sample_Protein");
    protein.add_atom("N", 0.0, 0.0, 0.0);
    protein.add_atom("CA", 1.5, 0.0, 0.0);
    protein.add_atom("C", 2.0, 1.4, 0.0);
    protein.add_atom("O", 3.2, 1.6, 0.3);
    protein.add_atom("CB", 2.1, -1.2, 0.8);
    protein.add_atom("CG", 3.6, -1.5, 1.1);
    protein.add_atom("OD", 6.5, 2.5, 3.0);
    protein
}

struct Runner<'a, W: Write> {
    out: &'a mut W,
    summary: DemoSummary,
}

impl<W: Write> Runner<'_, W> {
    fn section(&mut self, title: &str) -> Result<(), CError> {
        writeln!(self.out, "\n=== {title} ===")?;
        Ok(())
    }

    /// Print the text of a successful step, or report the failure
    fn step(&mut self, name: &'static str, result: Result<String, CError>) -> Result<(), CError> {
        match result {
            Ok(text) => write!(self.out, "{text}")?,
            Err(e) => self.fail(name, &e)?,
        }
        Ok(())
    }

    fn fail(&mut self, name: &'static str, e: &CError) -> Result<(), CError> {
        error!("{name} failed: {e}");
        writeln!(self.out, "Error during {name}: {e}")?;
        self.summary.failed_steps.push(name);
        Ok(())
    }
}

/// Run the demonstration, writing everything meant for the user to `out`.
///
/// # Errors
///
/// Only fails if writing to `out` fails. Failures of individual steps are
/// reported in `out`, logged, and listed in the returned summary.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> Result<DemoSummary, CError> {
    let mut runner = Runner {
        out,
        summary: DemoSummary::default(),
    };

    let protein = match &config.input {
        Some(path) => match load_from_file(path) {
            Ok(protein) => protein,
            Err(e) => {
                runner.fail("load input", &e)?;
                info!("falling back to the built-in sample protein");
                sample_protein()
            }
        },
        None => sample_protein(),
    };

    runner.section("Atoms")?;
    runner.step("atom listing", Ok(display::atom_listing(&protein)))?;

    runner.section("Distances")?;
    runner.step(
        "distance table",
        display::distance_table(&protein, config.reference),
    )?;

    runner.section("Neighbors")?;
    runner.step(
        "neighbor search",
        display::neighbor_listing(&protein, config.reference, config.radius),
    )?;

    runner.section("Map")?;
    runner.step(
        "top-down map",
        display::map_view(&protein, config.width, config.height),
    )?;

    runner.section("Save and reload")?;
    match save_to_file(&protein, &config.output) {
        Ok(()) => {
            writeln!(
                runner.out,
                "Saved {} atoms to {}",
                protein.size(),
                config.output.display()
            )?;
            let reloaded = load_from_file(&config.output).map(|p| display::atom_listing(&p));
            runner.step("reload", reloaded)?;
        }
        Err(e) => runner.fail("save", &e)?,
    }

    Ok(runner.summary)
}
