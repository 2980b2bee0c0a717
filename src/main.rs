mod samples;

use anyhow::Context;
use shamir::{AuditTranscript, BigInt, LogObserver, Reconstructor, ShareSet, Strategy};
use std::fs;
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tracing::{error, info, warn, Level};

const DEFAULT_FILES: [&str; 2] = ["testcase1.json", "testcase2.json"];

#[derive(Debug, StructOpt)]
#[structopt(
    name = "secret-recovery",
    about = "Recovers the constant term of a secret sharing polynomial from base-encoded shares."
)]
struct Opt {
    /// Share files to process
    ///
    /// Each file holds `keys.n`, `keys.k` and one `{ "base", "value" }` record per share index.
    /// Defaults to testcase1.json and testcase2.json.
    #[structopt(parse(from_os_str))]
    files: Vec<PathBuf>,

    /// Solving strategy: lagrange, linear-system or cross-checked
    #[structopt(long, short, default_value = "lagrange")]
    strategy: Strategy,

    /// Re-check every secret by interpolating over the BN254 scalar field
    #[structopt(long)]
    field_check: bool,

    /// Print the Keccak-256 audit digest of every reconstruction
    #[structopt(long)]
    audit: bool,

    /// Do not write sample fixtures for missing files
    #[structopt(long)]
    no_samples: bool,

    /// Log every decoded point and intermediate result
    #[structopt(long, short)]
    verbose: bool,
}

fn recover_file(path: &Path, opt: &Opt) -> anyhow::Result<BigInt> {
    info!("=== Processing {} ===", path.display());

    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let shares =
        ShareSet::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;

    info!("Number of roots provided (n): {}", shares.total());
    info!("Minimum roots needed (k): {}", shares.threshold());
    info!("Polynomial degree: {}", shares.degree());

    let reconstructor = Reconstructor::new(opt.strategy).with_field_check(opt.field_check);
    let mut observer = (LogObserver, AuditTranscript::new());

    let reconstruction = reconstructor
        .reconstruct(&shares, &mut observer)
        .with_context(|| format!("reconstructing {}", path.display()))?;

    if opt.audit {
        println!("{}: audit digest {}", path.display(), observer.1.hex_digest());
    }

    Ok(reconstruction.secret)
}

fn write_sample(path: &Path) -> anyhow::Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sample = serde_json::to_string_pretty(&samples::sample_for(&file_name))?;

    fs::write(path, sample).with_context(|| format!("writing {}", path.display()))?;
    info!("Created {}", path.display());

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    // also forwards records from the `log` facade used by the library
    tracing_subscriber::fmt()
        .with_max_level(if opt.verbose { Level::DEBUG } else { Level::INFO })
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("installing the tracing collector")?;

    info!("Shamir secret recovery, {} strategy", opt.strategy);

    let mut results: Vec<(PathBuf, Option<BigInt>)> = Vec::new();

    let files: Vec<PathBuf> = if opt.files.is_empty() {
        DEFAULT_FILES.iter().map(PathBuf::from).collect()
    } else {
        opt.files.clone()
    };

    for path in &files {
        if path.exists() {
            let secret = match recover_file(path, &opt) {
                Ok(secret) => Some(secret),
                Err(err) => {
                    error!("Error processing {}: {:#}", path.display(), err);
                    None
                }
            };

            results.push((path.clone(), secret));
        } else if opt.no_samples {
            warn!("File {} not found", path.display());
        } else {
            warn!("File {} not found. Creating sample...", path.display());
            write_sample(path)?;
        }
    }

    println!("{}", "=".repeat(50));
    println!("SUMMARY OF RESULTS:");
    println!("{}", "=".repeat(50));

    for (path, secret) in &results {
        match secret {
            Some(secret) => println!("{}: c = {}", path.display(), secret),
            None => println!("{}: c = null", path.display()),
        }
    }

    Ok(())
}
