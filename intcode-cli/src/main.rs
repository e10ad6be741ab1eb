//! Intcode command-line tool
//!
//! Runs, disassembles and inspects Intcode programs.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "intcode")]
#[command(about = "Run and inspect Intcode programs")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a program, printing its outputs
    Run(RunArgs),

    /// Print a disassembly listing
    Disasm {
        /// Program file
        file: PathBuf,
    },

    /// Find the amplifier phase setting with the highest signal
    Amplify {
        /// Program file
        file: PathBuf,

        /// Loop the last amplifier back into the first
        #[arg(long)]
        feedback: bool,

        /// Phase values to permute (default 0..=4, or 5..=9 with --feedback)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        phases: Option<Vec<i64>>,
    },

    /// Search for the noun and verb producing a target value at address 0
    NounVerb {
        /// Program file
        file: PathBuf,

        /// Value wanted at address 0
        #[arg(long, allow_negative_numbers = true)]
        target: i64,

        /// Largest noun and verb to try
        #[arg(long, default_value = "99")]
        max: i64,
    },

    /// Print the size and fingerprint of a program
    Info {
        /// Program file
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub(crate) struct RunArgs {
    /// Program file
    file: PathBuf,

    /// Input value, may be repeated
    #[arg(short = 'i', long = "input", allow_negative_numbers = true)]
    inputs: Vec<i64>,

    /// Prompt on stdin when the program needs more input
    #[arg(long)]
    interactive: bool,

    /// Return to the driver after every output
    #[arg(long)]
    pause: bool,

    /// Value patched into address 1 before running
    #[arg(long, requires = "verb", allow_negative_numbers = true)]
    noun: Option<i64>,

    /// Value patched into address 2 before running
    #[arg(long, requires = "noun", allow_negative_numbers = true)]
    verb: Option<i64>,

    /// Log every executed instruction
    #[arg(long)]
    trace: bool,

    /// Print outputs in 0..=127 as characters and read input lines as text
    #[arg(long)]
    ascii: bool,

    /// Memory growth ceiling in words (unbounded by default)
    #[arg(long)]
    max_memory: Option<usize>,
}

fn init_logging(verbose: u8, trace: bool) {
    let default = match (trace, verbose) {
        (true, _) | (_, 2..) => "intcode=trace",
        (_, 1) => "intcode=debug",
        _ => "intcode=info",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(&cli.command, Command::Run(args) if args.trace);
    init_logging(cli.verbose, trace);

    let result = match cli.command {
        Command::Run(args) => commands::run(args),
        Command::Disasm { file } => commands::disasm(&file),
        Command::Amplify {
            file,
            feedback,
            phases,
        } => commands::amplify(&file, feedback, phases),
        Command::NounVerb { file, target, max } => commands::noun_verb(&file, target, max),
        Command::Info { file } => commands::info(&file),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
