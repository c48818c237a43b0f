use std::io::Write;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use seqmatch::align::{self, MatchMode, MatchOpt};
use seqmatch::io::{fasta, fastq};
use seqmatch::util::qual;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "seqmatch", author, version, about = "Naive exact / strand-aware / mismatch-tolerant DNA matching", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report every offset of one pattern in the reference
    Match {
        /// Reference FASTA file
        reference: String,
        /// Pattern sequence (A/C/G/T/N)
        pattern: String,
        #[command(flatten)]
        opts: MatchArgs,
    },
    /// Match every read of a FASTQ file against the reference
    Map {
        /// Reference FASTA file
        reference: String,
        /// Reads FASTQ file
        reads: String,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,
        #[command(flatten)]
        opts: MatchArgs,
    },
    /// Print decoded Phred+33 quality scores of every read
    Qual {
        /// Reads FASTQ file
        reads: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Forward strand, no mismatches
    Exact,
    /// Forward strand and reverse complement, no mismatches
    Revcomp,
    /// Forward strand, up to --mismatches mismatches
    Mismatch,
}

#[derive(Args, Debug)]
struct MatchArgs {
    #[arg(long, value_enum, default_value_t = ModeArg::Exact)]
    mode: ModeArg,
    /// Maximum mismatches (only with --mode mismatch, default 0)
    #[arg(short = 'k', long = "mismatches", allow_hyphen_values = true)]
    mismatches: Option<i64>,
    #[arg(short = 't', long = "threads", default_value_t = 1)]
    threads: usize,
    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
}

impl MatchArgs {
    fn to_opt(&self) -> Result<MatchOpt> {
        let mode = match (self.mode, self.mismatches) {
            (ModeArg::Mismatch, k) => MatchMode::Mismatches(k.unwrap_or(0)),
            (mode, Some(_)) => {
                anyhow::bail!("--mismatches requires --mode mismatch (got --mode {:?})", mode)
            }
            (ModeArg::Exact, None) => MatchMode::Exact,
            (ModeArg::Revcomp, None) => MatchMode::ExactWithRevcomp,
        };
        let opt = MatchOpt { mode, threads: self.threads, ..MatchOpt::default() };
        opt.validate()?;
        Ok(opt)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Match { reference, pattern, opts } => run_match(&reference, &pattern, &opts),
        Commands::Map { reference, reads, out, opts } => run_map(&reference, &reads, out.as_deref(), &opts),
        Commands::Qual { reads } => run_qual(&reads),
    }
}

fn init_threads(threads: usize) -> Result<()> {
    if threads > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| anyhow!("cannot build thread pool: {}", e))?;
    }
    Ok(())
}

fn load_genome(reference: &str) -> Result<fasta::Genome> {
    let genome = fasta::read_genome_path(reference)
        .map_err(|e| anyhow!("cannot read reference FASTA '{}': {}", reference, e))?;
    info!("reference: {} ({} bp)", reference, genome.len());
    Ok(genome)
}

fn load_reads(reads: &str) -> Result<fastq::ReadSet> {
    let rs = fastq::read_read_set_path(reads)
        .map_err(|e| anyhow!("cannot read FASTQ '{}': {}", reads, e))?;
    info!("reads: {} ({} records)", reads, rs.len());
    Ok(rs)
}

fn run_match(reference: &str, pattern: &str, args: &MatchArgs) -> Result<()> {
    let opt = args.to_opt()?;
    init_threads(opt.threads)?;
    let genome = load_genome(reference)?;
    let pattern = seqmatch::util::dna::normalize_seq(pattern.as_bytes())
        .map_err(|e| anyhow!("bad pattern: {}", e))?;

    let offsets = opt.run(&pattern, genome.as_bytes())?;
    info!("{} occurrence(s)", offsets.len());

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if args.json {
        serde_json::to_writer(&mut out, &offsets)?;
        writeln!(out)?;
    } else {
        for off in &offsets {
            writeln!(out, "{}", off)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn run_map(reference: &str, reads_path: &str, out_path: Option<&str>, args: &MatchArgs) -> Result<()> {
    let opt = args.to_opt()?;
    init_threads(opt.threads)?;
    let genome = load_genome(reference)?;
    let reads = load_reads(reads_path)?;

    let hits = align::match_reads(genome.as_bytes(), &reads.reads, &opt)?;

    let mut out: Box<dyn Write> = if let Some(p) = out_path {
        let fh = std::fs::File::create(p).map_err(|e| anyhow!("cannot create '{}': {}", p, e))?;
        Box::new(std::io::BufWriter::new(fh))
    } else {
        Box::new(std::io::BufWriter::new(std::io::stdout()))
    };

    if args.json {
        serde_json::to_writer_pretty(&mut out, &hits)?;
        writeln!(out)?;
    } else {
        for h in &hits {
            let offsets = if h.offsets.is_empty() {
                "*".to_string()
            } else {
                h.offsets.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
            };
            writeln!(out, "{}\t{}\t{}", h.name, h.offsets.len(), offsets)?;
        }
    }
    out.flush()?;

    let mapped = hits.iter().filter(|h| !h.offsets.is_empty()).count();
    info!("{}/{} reads matched", mapped, hits.len());
    Ok(())
}

fn run_qual(reads_path: &str) -> Result<()> {
    let reads = load_reads(reads_path)?;
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for r in &reads.reads {
        let scores = qual::decode_qualities(&r.qual);
        let line = scores.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
        writeln!(out, "{}\t{}", r.name, line)?;
    }
    out.flush()?;
    Ok(())
}
