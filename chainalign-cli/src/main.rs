use anyhow::{bail, Context, Result};
use chainalign_core::{semi_global_align, AlignParams, SeedParams};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "chainalign")]
#[command(about = "Seed-chained semi-global alignment of two nucleotide sequences")]
#[command(version)]
struct Cli {
    /// FASTA/FASTQ file holding the first sequence
    seq1: PathBuf,

    /// FASTA/FASTQ file holding the second sequence
    seq2: PathBuf,

    /// K-mer size used to find alignment seeds
    #[arg(short, long, default_value = "10")]
    kmer: usize,

    /// Margin around the seed chain searched by the banded alignment
    #[arg(short, long, default_value = "50")]
    band: usize,

    /// Allowed relative difference between the chain's two spans
    #[arg(short, long, default_value = "0.1")]
    discrepancy: f64,

    /// Also emit the k-mer starting at the final valid position
    #[arg(long)]
    include_final_kmer: bool,

    /// Print the report as JSON instead of the flat record
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn read_first_sequence(path: &Path) -> Result<Vec<u8>> {
    let mut reader = needletail::parse_fastx_file(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    match reader.next() {
        Some(record) => {
            let record =
                record.with_context(|| format!("failed to parse {}", path.display()))?;
            Ok(record.seq().into_owned())
        }
        None => bail!("{} holds no sequence records", path.display()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let seq1 = read_first_sequence(&cli.seq1)?;
    let seq2 = read_first_sequence(&cli.seq2)?;
    log::info!(
        "aligning {} ({} bp) against {} ({} bp)",
        cli.seq1.display(),
        seq1.len(),
        cli.seq2.display(),
        seq2.len()
    );

    let params = AlignParams {
        seed: SeedParams {
            kmer_size: cli.kmer,
            include_final_kmer: cli.include_final_kmer,
            ..Default::default()
        },
        band_width: cli.band,
        allowed_length_discrepancy: cli.discrepancy,
        ..Default::default()
    };

    match semi_global_align(&seq1, &seq2, &params) {
        Some(report) if cli.json => println!("{}", serde_json::to_string_pretty(&report)?),
        Some(report) => println!("{}", report.to_record()),
        None => println!("no alignment found"),
    }
    Ok(())
}
