use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use arpa_respell::dictionary::{convert_dictionary, FailurePolicy};
use arpa_respell::trace_init::init_tracing;
use arpa_respell::{Respeller, SymbolTable};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "respell", about = "ARPABET to SoundSpelling respelling")]
struct Cli {
    /// Write JSON trace logs into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert one phoneme string
    Convert {
        /// ARPABET phonemes, e.g. `B AH1 T ER0`
        #[arg(required = true)]
        phonemes: Vec<String>,
        /// Custom symbol table (TOML)
        #[arg(long)]
        table: Option<PathBuf>,
    },

    /// Show every pipeline stage for one phoneme string
    Explain {
        /// ARPABET phonemes, e.g. `B AH1 T ER0`
        #[arg(required = true)]
        phonemes: Vec<String>,
        /// Custom symbol table (TOML)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert a pronunciation dictionary (`WORD  PHONEMES...` per line)
    Dict {
        /// Input dictionary file
        input: PathBuf,
        /// Output file (`WORD<TAB>RESPELLING` per line)
        output: PathBuf,
        /// Custom symbol table (TOML)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Stop at the first bad record instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Symbol table tools
    Table {
        #[command(subcommand)]
        command: TableCommand,
    },
}

#[derive(Subcommand)]
enum TableCommand {
    /// Print the embedded default table
    Export,
    /// Check a custom table file
    Validate {
        /// Table file (TOML)
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace = init_tracing(cli.log_dir.as_deref());

    match cli.command {
        Command::Convert { phonemes, table } => {
            let respeller = open_respeller(table.as_deref());
            let out = die!(respeller.convert(&phonemes.join(" ")), "Error: {}");
            println!("{out}");
        }
        Command::Explain {
            phonemes,
            table,
            json,
        } => explain(&open_respeller(table.as_deref()), &phonemes.join(" "), json),
        Command::Dict {
            input,
            output,
            table,
            strict,
        } => dict(&open_respeller(table.as_deref()), &input, &output, strict),
        Command::Table { command } => match command {
            TableCommand::Export => print!("{}", SymbolTable::default_toml()),
            TableCommand::Validate { file } => {
                let table = die!(SymbolTable::from_toml_file(&file), "Error: {}");
                println!("OK: {} mappings", table.len());
            }
        },
    }
}

fn open_respeller(table: Option<&Path>) -> Respeller {
    match table {
        Some(path) => {
            let table = die!(SymbolTable::from_toml_file(path), "Error: {}");
            Respeller::with_table(table)
        }
        None => Respeller::new(),
    }
}

fn explain(respeller: &Respeller, phonemes: &str, json: bool) {
    let trace = die!(respeller.explain(phonemes), "Error: {}");
    if json {
        let out = die!(serde_json::to_string_pretty(&trace), "Error: {}");
        println!("{out}");
        return;
    }

    println!("tokens:    {}", trace.tokens.join(" "));
    println!("mapped:    {}", trace.mapped);
    println!("fragments: {}", trace.fragments.join(" | "));
    if let Some(coda) = &trace.coda {
        println!("coda:      {coda}");
    }
    println!("segmented: {}", trace.segmented);
    println!("respelled: {}", trace.respelled);
}

fn dict(respeller: &Respeller, input: &Path, output: &Path, strict: bool) {
    let reader = BufReader::new(die!(
        File::open(input),
        "Error reading {}: {}",
        input.display()
    ));
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        die!(fs::create_dir_all(parent), "Error creating output dir: {}");
    }
    let writer = BufWriter::new(die!(
        File::create(output),
        "Error writing {}: {}",
        output.display()
    ));
    let policy = if strict {
        FailurePolicy::Abort
    } else {
        FailurePolicy::Skip
    };

    let summary = die!(
        convert_dictionary(respeller, reader, writer, policy),
        "Error: {}"
    );
    println!(
        "converted {} entries, skipped {} → {}",
        summary.converted,
        summary.skipped,
        output.display()
    );
}
