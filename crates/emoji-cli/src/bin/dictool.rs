use clap::{Parser, Subcommand};

use emoji_cli::commands::{self, config_ops, dict_ops};
use emoji_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "dictool", about = "Emoji dictionary build tool")]
struct Cli {
    /// Custom settings TOML file
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON record list into an EMDX snapshot
    Compile {
        /// Input JSON file
        input_file: String,
        /// Output snapshot file
        output_file: String,
    },
    /// Show dictionary info (JSON or snapshot, auto-detected by magic bytes)
    Info {
        /// Dictionary file
        file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Look up a glyph, word or phrase
    Lookup {
        /// Dictionary file
        dict_file: String,
        /// Glyph, word or phrase
        query: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    commands::init_settings(cli.settings.as_deref());

    match cli.command {
        Command::Compile {
            input_file,
            output_file,
        } => dict_ops::compile(&input_file, &output_file),
        Command::Info { file, json } => dict_ops::info(&file, json),
        Command::Lookup { dict_file, query } => dict_ops::lookup(&dict_file, &query),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
