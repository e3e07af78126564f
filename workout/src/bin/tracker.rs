use std::{fs::File, io::Write, path::PathBuf};

use tracing_subscriber::EnvFilter;
use workout::{Package, Workout, WorkoutSummary};

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input csv file with sensor packets, one `code,param,...` per line.
    /// Simulated packets are used if not set
    pub input: Option<PathBuf>,
    /// Also save summaries to csv file. _Note_: will truncate old file if exists
    #[arg(short, long, required = false)]
    pub output: Option<PathBuf>,
    /// Print summaries as json instead of text
    #[arg(short, long, default_value_t = false, required = false)]
    pub json: bool,
    /// Continue with next packet when one fails
    #[arg(short, long, default_value_t = false, required = false)]
    pub keep_going: bool,
    /// Debug logging, otherwise `RUST_LOG` is used with `warn` as default
    #[arg(short, long, default_value_t = false, required = false)]
    pub verbose: bool,
}

fn load_packages(input: Option<PathBuf>) -> Result<Vec<Package>, Box<dyn std::error::Error>> {
    let Some(input) = input else {
        return Ok(workout::default_packages());
    };

    let packages = workout::packages_from_reader(
        File::open(&input).map_err(|e| format!("Failed to read input file. Reason: {e}"))?,
    )
    .map_err(|e| format!("Failed to parse {}. Reason: {e}", input.to_string_lossy()))?;

    Ok(packages)
}

/// Print summary for every packet in order.
///
/// Returns description of every skipped packet, those are only collected with `keep_going`.
fn report<O: Write, W: Write>(
    packages: &[Package],
    json: bool,
    keep_going: bool,
    io: &mut O,
    mut wrt: Option<&mut csv::Writer<W>>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let mut failed = Vec::new();

    for (index, package) in packages.iter().enumerate() {
        let summary: WorkoutSummary = match package.workout().and_then(|this| this.summary()) {
            Ok(summary) => summary,
            Err(e) if keep_going => {
                tracing::error!(index, code = %package.code, "skipping packet: {e}");
                failed.push(format!("packet #{index} ({}): {e}", package.code));
                continue;
            }
            Err(e) => {
                return Err(format!("Packet #{index} ({}) failed. Reason: {e}", package.code).into());
            }
        };

        match json {
            true => writeln!(io, "{}", serde_json::to_string(&summary)?)?,
            false => writeln!(io, "{summary}")?,
        }

        if let Some(wrt) = &mut wrt {
            wrt.serialize(&summary)?;
        }
    }

    Ok(failed)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        input,
        output,
        json,
        keep_going,
        verbose,
    } = <Args as clap::Parser>::parse();

    let filter = match verbose {
        true => EnvFilter::new("debug"),
        false => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let packages = load_packages(input)?;

    tracing::debug!(total = packages.len(), "packets loaded");

    let mut wrt = match &output {
        Some(output) => Some(
            csv::Writer::from_path(output)
                .map_err(|e| format!("Failed to create output file. Reason: {e}"))?,
        ),
        None => None,
    };

    let io = std::io::stdout();
    let mut io = io.lock();

    let failed = report(&packages, json, keep_going, &mut io, wrt.as_mut())?;

    if let Some(mut wrt) = wrt {
        wrt.flush()?;
    }

    if !failed.is_empty() {
        return Err(format!(
            "{} of {} packets failed: {}",
            failed.len(),
            packages.len(),
            failed.join("; ")
        )
        .into());
    }

    Ok(())
}
