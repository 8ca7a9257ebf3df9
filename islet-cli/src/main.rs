//! `islet` — preproinsulin processing pipeline.
//!
//! One subcommand per pipeline stage, plus `run` for the whole chain.
//! The core computations live in `islet-seq`; this binary only handles
//! argument parsing, artifact files, and console output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use islet_seq::{
    clean_record, isoelectric_point, molecular_weight, net_charge_curve, split_preproinsulin,
    PhScan, ProteinSequence, PREPROINSULIN_LEN,
};

mod artifacts;

use artifacts::DataDir;

#[derive(Parser)]
#[command(name = "islet")]
#[command(about = "Preproinsulin record cleaning, segmentation, and biochemical metrics", long_about = None)]
struct Cli {
    /// Directory for intermediate sequence artifacts
    #[arg(long, value_name = "DIR", env = "ISLET_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw ORIGIN-format record into a bare residue sequence
    Clean {
        /// Input record file
        #[arg(default_value = "data/preproinsulin_seq.txt")]
        input: PathBuf,
    },
    /// Split the cleaned sequence into its four biological segments
    Split,
    /// Compute the molecular weight of the mature two-chain molecule
    Weigh,
    /// Tabulate net charge across a pH scan and estimate the pI
    Titrate {
        /// pH increment between scan points
        #[arg(long, default_value_t = 1.0)]
        step: f64,
    },
    /// Run the full pipeline: clean, split, weigh, titrate
    Run {
        /// Input record file
        #[arg(default_value = "data/preproinsulin_seq.txt")]
        input: PathBuf,
    },
    /// Delete generated sequence artifacts
    Reset {
        /// Actually delete; without this flag only list what would go
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    // Stage diagnostics default to visible; RUST_LOG still overrides.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let dir = DataDir::new(&cli.data_dir);

    match cli.command {
        Commands::Clean { input } => {
            cmd_clean(&dir, &input)?;
        }
        Commands::Split => {
            let seq = dir
                .read_sequence(artifacts::PREPRO_CLEAN)
                .context("split stage needs a cleaned sequence; run `islet clean` first")?;
            cmd_split(&dir, &seq)?;
        }
        Commands::Weigh => {
            let (b, a) = read_mature_chains(&dir)?;
            cmd_weigh(&b, &a)?;
        }
        Commands::Titrate { step } => {
            let (b, a) = read_mature_chains(&dir)?;
            cmd_titrate(&b, &a, step)?;
        }
        Commands::Run { input } => {
            let seq = cmd_clean(&dir, &input)?;
            let (b, a) = cmd_split(&dir, &seq)?;
            cmd_weigh(&b, &a)?;
            cmd_titrate(&b, &a, 1.0)?;
        }
        Commands::Reset { yes } => {
            cmd_reset(&dir, yes)?;
        }
    }
    Ok(())
}

fn cmd_clean(dir: &DataDir, input: &Path) -> Result<ProteinSequence> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("reading raw record {}", input.display()))?;
    let seq = clean_record(&raw).context("clean stage failed")?;

    let path = dir.write_sequence(artifacts::PREPRO_CLEAN, &seq)?;
    println!("clean file created: {}", path.display());
    println!("final length: {} residues", seq.len());
    // The length check is part of the stage's result, not a diagnostic:
    // it must reach the user regardless of any log filter.
    match length_warning(seq.len()) {
        None => println!("length OK: {} amino acids", PREPROINSULIN_LEN),
        Some(msg) => eprintln!("WARNING: {}", msg),
    }
    Ok(seq)
}

/// Warning text for a cleaned sequence that is not a full precursor.
fn length_warning(len: usize) -> Option<String> {
    if len == PREPROINSULIN_LEN {
        None
    } else {
        Some(format!(
            "expected {} amino acids, got {}",
            PREPROINSULIN_LEN, len
        ))
    }
}

fn cmd_split(dir: &DataDir, seq: &ProteinSequence) -> Result<(ProteinSequence, ProteinSequence)> {
    info!("input length received: {} amino acids", seq.len());
    let segs = split_preproinsulin(seq).context("split stage failed")?;

    for (name, segment) in [
        (artifacts::SIGNAL_CLEAN, &segs.signal),
        (artifacts::B_CHAIN_CLEAN, &segs.b_chain),
        (artifacts::C_PEPTIDE_CLEAN, &segs.c_peptide),
        (artifacts::A_CHAIN_CLEAN, &segs.a_chain),
    ] {
        let path = dir.write_sequence(name, segment)?;
        info!("{} -> {} residues", path.display(), segment.len());
    }
    Ok((segs.b_chain, segs.a_chain))
}

fn cmd_weigh(b_chain: &ProteinSequence, a_chain: &ProteinSequence) -> Result<()> {
    let report = molecular_weight(b_chain, a_chain).context("weigh stage failed")?;
    println!("computed molecular weight: {:.2} Da", report.computed);
    println!("reference molecular weight: {:.2} Da", report.reference);
    println!("error: {:.4}%", report.error_percent);
    Ok(())
}

fn cmd_titrate(b_chain: &ProteinSequence, a_chain: &ProteinSequence, step: f64) -> Result<()> {
    let scan = PhScan {
        step,
        ..PhScan::default()
    };
    let curve = net_charge_curve(b_chain, a_chain, scan).context("titrate stage failed")?;

    println!("{:<6} | {:>12}", "pH", "net-charge");
    println!("{}", "-".repeat(22));
    for point in &curve {
        println!("{:<6.2} | {:>12.4}", point.ph, point.net_charge);
    }
    match isoelectric_point(&curve) {
        Some(pi) => println!("estimated isoelectric point: pH {:.2}", pi),
        None => println!("no charge sign change across the scanned range"),
    }
    Ok(())
}

fn cmd_reset(dir: &DataDir, yes: bool) -> Result<()> {
    let existing = dir.existing_generated();
    if existing.is_empty() {
        info!("nothing to remove in {}", dir.root().display());
        return Ok(());
    }
    if !yes {
        println!("would remove:");
        for path in &existing {
            println!("  {}", path.display());
        }
        println!("pass --yes to delete");
        return Ok(());
    }
    for path in dir.remove_generated()? {
        info!("removed {}", path.display());
    }
    Ok(())
}

fn read_mature_chains(dir: &DataDir) -> Result<(ProteinSequence, ProteinSequence)> {
    let b = dir
        .read_sequence(artifacts::B_CHAIN_CLEAN)
        .context("missing B-chain artifact; run `islet split` first")?;
    let a = dir
        .read_sequence(artifacts::A_CHAIN_CLEAN)
        .context("missing A-chain artifact; run `islet split` first")?;
    Ok((b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_precursor_needs_no_warning() {
        assert_eq!(length_warning(PREPROINSULIN_LEN), None);
    }

    #[test]
    fn short_record_warns_with_both_lengths() {
        // A non-110 record must always surface a warning to the user,
        // independent of any log filter.
        let msg = length_warning(109).unwrap();
        assert!(msg.contains("110"), "missing expected length: {}", msg);
        assert!(msg.contains("109"), "missing actual length: {}", msg);
    }

    #[test]
    fn long_record_warns_too() {
        assert!(length_warning(111).is_some());
    }
}
