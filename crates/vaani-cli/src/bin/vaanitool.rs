use std::fs;
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use vaani_cli::commands::{config_ops, translate_ops, translit_ops};

#[derive(Parser)]
#[command(name = "vaanitool", about = "Vaani transliteration and translation diagnostics")]
struct Cli {
    /// Path to a settings TOML file overriding the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,

    /// Directory for the JSONL trace log (active with the "trace" feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize Indic text to Latin
    Romanize {
        /// Text to romanize
        text: String,
        /// Source language code, or "auto" to detect from the text
        #[arg(short, long, default_value = "auto")]
        lang: String,
        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Render text into the script of another language's reader
    Render {
        /// Text to render
        text: String,
        /// Language the text is written in
        #[arg(long)]
        text_lang: String,
        /// Language whose script the reader expects
        #[arg(long)]
        reader_lang: String,
        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Translate text through the provider fallback chain
    Translate {
        /// Text to translate
        text: String,
        /// Source language code (defaults to settings)
        #[arg(short, long)]
        source: Option<String>,
        /// Target language code (defaults to settings)
        #[arg(short, long)]
        target: Option<String>,
        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Romanize a file of lines and record results to JSONL
    Batch {
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
        /// Source language code, or "auto" to detect per line
        #[arg(short, long, default_value = "auto")]
        lang: String,
    },

    /// Settings maintenance
    Config {
        #[command(subcommand)]
        op: ConfigOp,
    },
}

#[derive(Subcommand)]
enum ConfigOp {
    /// Print the embedded default settings TOML
    Default,
    /// Validate a settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        vaani_core::trace_init::init_tracing(Path::new(dir));
    }

    if let Some(path) = &cli.settings {
        let content = fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading {path}: {e}");
            process::exit(1);
        });
        vaani_core::settings::init_custom(content).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        });
    }

    match cli.command {
        Command::Romanize { text, lang, json } => {
            translit_ops::romanize_cmd(&text, &lang, json);
        }
        Command::Render {
            text,
            text_lang,
            reader_lang,
            json,
        } => {
            translit_ops::render_cmd(&text, &text_lang, &reader_lang, json);
        }
        Command::Translate {
            text,
            source,
            target,
            json,
        } => {
            translate_ops::translate_cmd(&text, source.as_deref(), target.as_deref(), json);
        }
        Command::Batch {
            input_file,
            output_file,
            lang,
        } => {
            translit_ops::batch_cmd(&input_file, &output_file, &lang);
        }
        Command::Config { op } => match op {
            ConfigOp::Default => config_ops::settings_export(),
            ConfigOp::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
