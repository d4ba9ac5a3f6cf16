mod commands;
mod input;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::{compare, sequence};

#[derive(Debug, Parser)]
#[command(name = "nucleo", version, about = "DNA sequence analysis")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Indent JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Base counts and GC/AT content
    Stats {
        /// FASTA or raw sequence file, `-` for stdin
        input: String,
    },
    /// Complement strand
    Complement {
        input: String,
        /// Reverse the complement (antiparallel strand)
        #[arg(long)]
        reverse: bool,
    },
    /// In-frame codons with start/stop flags
    Codons {
        input: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
        frame: u8,
    },
    /// Full-frame protein translation
    Translate {
        input: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
        frame: u8,
    },
    /// Open reading frames on both strands
    Orfs {
        input: String,
        /// Minimum ORF length in nucleotides
        #[arg(long, default_value_t = nucleo_core::orf::DEFAULT_MIN_ORF_LENGTH)]
        min_length: usize,
    },
    /// Every single-sequence analysis at once
    Analyze {
        input: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
        frame: u8,
        #[arg(long, default_value_t = nucleo_core::orf::DEFAULT_MIN_ORF_LENGTH)]
        min_length: usize,
    },
    /// Global alignment and mutation report for two sequences
    Align { first: String, second: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let pretty = cli.pretty;
    match cli.command {
        Command::Stats { input } => sequence::stats(&input, pretty),
        Command::Complement { input, reverse } => sequence::complement(&input, reverse, pretty),
        Command::Codons { input, frame } => sequence::codons(&input, frame, pretty),
        Command::Translate { input, frame } => sequence::translate(&input, frame, pretty),
        Command::Orfs { input, min_length } => sequence::orfs(&input, min_length, pretty),
        Command::Analyze {
            input,
            frame,
            min_length,
        } => sequence::analyze(&input, frame, min_length, pretty),
        Command::Align { first, second } => compare::align(&first, &second, pretty),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
