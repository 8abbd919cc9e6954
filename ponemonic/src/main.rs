use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ponemonic::{Converter, PonemonicConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ponemonic")]
#[command(about = "Convert between pinyin, Chinese characters and consonant digit codes")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Character dataset to load instead of the bundled table
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Keep only the first reading of each character
    #[arg(long, global = true)]
    no_heteronym: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the input and run the matching conversion
    Convert {
        #[arg(required = true)]
        input: Vec<String>,
    },
    /// Characters for each syllable of a space/comma separated list
    Pinyin {
        #[arg(required = true)]
        list: Vec<String>,
    },
    /// Exact and prefix matches for a single syllable
    Resolve {
        syllable: String,
        /// Print the matches as JSON
        #[arg(long)]
        json: bool,
    },
    /// Candidate characters for every digit of a number
    Number { digits: String },
    /// Digit code of Chinese text
    Chars { text: String },
    /// Print the digit to consonant table
    Table,
    /// Read lines from stdin and convert each one
    Repl,
}

fn load_config(cli: &Cli) -> Result<PonemonicConfig> {
    let mut config = match &cli.config {
        Some(path) => PonemonicConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PonemonicConfig::default(),
    };
    if let Some(dataset) = &cli.dataset {
        config.base_mut().dataset_path = Some(dataset.clone());
    }
    if cli.no_heteronym {
        config.heteronym = false;
    }
    Ok(config)
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn run_repl(converter: &Converter) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let raw = line.context("failed to read stdin")?;
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }
        writeln!(stdout, "{}", converter.classify_and_convert(input))?;
        stdout.flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.log_filter);
    debug!(?config, "configuration resolved");

    let converter = ponemonic::open(&config).context("failed to load character table")?;

    match cli.command {
        Some(Commands::Convert { input }) => {
            print!("{}", converter.classify_and_convert(&input.join(" ")));
        }
        Some(Commands::Pinyin { list }) => {
            print!("{}", converter.pinyin_list_report(&list.join(" ")));
        }
        Some(Commands::Resolve { syllable, json }) => {
            let resolution = converter.resolve(&syllable);
            if json {
                println!("{}", serde_json::to_string(&resolution)?);
            } else {
                println!("exact:  {}", resolution.exact.concat());
                println!("prefix: {}", resolution.prefix.concat());
            }
        }
        Some(Commands::Number { digits }) => {
            print!("{}", converter.number_report(&digits));
        }
        Some(Commands::Chars { text }) => {
            println!("{}", converter.characters_to_digit_string(&text));
        }
        Some(Commands::Table) => {
            print!("{}", converter.consonant_table());
        }
        Some(Commands::Repl) | None => run_repl(&converter)?,
    }
    Ok(())
}
