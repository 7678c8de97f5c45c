//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A small password form written in Rust.

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use rpawogen::commands::{form, password_gen};
use rpawogen::passgen::{self, Options};
use rpawogen::setclip::SystemClipboard;
use rpawogen::validation;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "Generate random passwords from a small form", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the interactive password form (default)
    Form {
        /// Seed the generator so a session can be reproduced
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a single password and print it
    Gen(GenArgs),
}

#[derive(Debug, Args)]
struct GenArgs {
    /// Length of the password (4-100)
    #[arg(short, long, value_parser = validation::parse_length)]
    length: usize,

    /// Include lowercase letters
    #[arg(long, default_value_t = false)]
    lowercase: bool,

    /// Include uppercase letters
    #[arg(long, default_value_t = false)]
    uppercase: bool,

    /// Include numbers
    #[arg(long, default_value_t = false)]
    numbers: bool,

    /// Include symbols
    #[arg(long, default_value_t = false)]
    symbols: bool,

    /// Seed the generator for a reproducible password
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,
}

impl From<&GenArgs> for Options {
    fn from(args: &GenArgs) -> Self {
        Self {
            include_lowercase: args.lowercase,
            include_uppercase: args.uppercase,
            include_numbers: args.numbers,
            include_symbols: args.symbols,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Form { seed: None }) {
        Commands::Form { seed } => {
            let mut rng = passgen::password_rng(seed);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            form::run_form(&mut input, &mut output, rng.as_mut(), &mut SystemClipboard)
        }
        Commands::Gen(args) => {
            let options = Options::from(&args);
            let mut clipboard = SystemClipboard;
            let sink = if args.copy { Some(&mut clipboard) } else { None };
            let text =
                password_gen::generate_once(options, args.length, args.seed, args.json, sink)?;
            println!("{}", text);
            Ok(())
        }
    }
}
