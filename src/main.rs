//! mungefmt CLI
//!
//! Usage:
//!   mungefmt [OPTIONS] <COMMAND>
//!
//! Commands:
//!   resolve   Rewrite a template to explicit positional placeholders
//!   format    Resolve a template and substitute arguments
//!   munge     List look-alike variants of a password
//!   unmunge   List plausible originals of a munged password
//!   permute   List ordered arrangements of a word's characters
//!   combine   List selections of a word's characters
//!   scrabble  List every word formed from a word's tiles
//!
//! Options:
//!   -c, --config <FILE>  Configuration file (TOML format)
//!   -v, --verbose        Debug logging on stderr
//!   -h, --help           Print help

use std::fmt::Display;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use mungefmt::combinatorics::{combinations, permutations, scrabble};
use mungefmt::{format, resolve_template, Config, Direction, Generator};

#[derive(Parser)]
#[command(name = "mungefmt")]
#[command(about = "Template resolution and password munging")]
struct Cli {
    /// Configuration file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite a template to explicit positional placeholders
    Resolve {
        /// Template (reads from stdin if not provided)
        template: Option<String>,

        /// Also print name bindings
        #[arg(short, long)]
        names: bool,
    },

    /// Resolve a template and substitute arguments
    Format {
        /// Template to format
        template: String,

        /// Positional arguments
        args: Vec<String>,
    },

    /// List look-alike variants of a password
    Munge {
        password: String,

        /// Print only the number of variants
        #[arg(long)]
        count: bool,
    },

    /// List plausible originals of a munged password
    Unmunge {
        password: String,

        /// Print only the number of variants
        #[arg(long)]
        count: bool,
    },

    /// List ordered arrangements of a word's characters
    Permute {
        word: String,

        /// Characters per arrangement (defaults to all)
        #[arg(short)]
        r: Option<usize>,
    },

    /// List selections of a word's characters
    Combine {
        word: String,

        /// Characters per selection (defaults to all)
        #[arg(short)]
        r: Option<usize>,
    },

    /// List every word formed from a word's tiles
    Scrabble {
        word: String,

        /// Longest word to form (defaults to all tiles)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    debug!(
        pairs = config.table.len(),
        generator = ?config.generator,
        "configuration loaded"
    );

    match cli.command {
        Command::Resolve { template, names } => run_resolve(template, names),
        Command::Format { template, args } => run_format(&template, &args),
        Command::Munge { password, count } => {
            run_generate(&config, &password, Direction::Munge, count)
        }
        Command::Unmunge { password, count } => {
            run_generate(&config, &password, Direction::Unmunge, count)
        }
        Command::Permute { word, r } => {
            let r = r.unwrap_or_else(|| word.chars().count());
            print_lines(permutations(&word, r));
        }
        Command::Combine { word, r } => {
            let r = r.unwrap_or_else(|| word.chars().count());
            print_lines(combinations(&word, r));
        }
        Command::Scrabble { word, limit } => {
            let limit = limit.unwrap_or_else(|| word.chars().count());
            print_lines(scrabble(&word, limit));
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_resolve(template: Option<String>, names: bool) {
    let template = match template {
        Some(t) => t,
        None => read_stdin(),
    };

    let resolved = resolve_template(&template);
    println!("{}", resolved.text);

    if names {
        for (name, index) in &resolved.names {
            println!("{} = {}", name, index);
        }
    }
}

fn run_format(template: &str, args: &[String]) {
    let args: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();

    match format(template, &args) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            // report against the resolved text, which is what the spans index
            let resolved = resolve_template(template);
            eprint!("{}", e.report(&resolved.text, "template"));
            std::process::exit(1);
        }
    }
}

fn run_generate(config: &Config, password: &str, direction: Direction, count: bool) {
    let generator = Generator::with_config(&config.table, config.generator.clone());

    match generator.generate(password, direction) {
        Ok(variants) if count => println!("{}", variants.len()),
        Ok(variants) => {
            for v in variants {
                println!("{}", v);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_lines<E: Display>(result: Result<Vec<String>, E>) {
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_stdin() -> String {
    if io::stdin().is_terminal() {
        eprintln!("Error: no template given and stdin is a terminal");
        std::process::exit(1);
    }

    let mut buffer = String::new();
    match io::stdin().read_to_string(&mut buffer) {
        Ok(_) => buffer.trim_end_matches(['\r', '\n']).to_string(),
        Err(e) => {
            eprintln!("Error reading from stdin: {}", e);
            std::process::exit(1);
        }
    }
}
