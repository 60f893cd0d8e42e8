use clap::{Parser, Subcommand};

use emoji_cli::commands::{self, translate_ops};
use emoji_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "emojitool", about = "Translate between text and emoji")]
struct Cli {
    /// Dictionary file, JSON records or EMDX snapshot (default: $EMOJI_DICT or data/emoji.json)
    #[arg(long, global = true)]
    dict: Option<String>,
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
    /// Translate text (or stdin) to emoji
    Translate {
        /// Input text; read from stdin when omitted
        text: Option<String>,
        /// Translate emoji to text instead
        #[arg(short, long)]
        reverse: bool,
    },
    /// Show how each part of the input was matched
    Explain {
        /// Input text; read from stdin when omitted
        text: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive translation session
    Repl,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    commands::init_settings(cli.settings.as_deref());

    let dict = cli.dict.as_deref();
    match cli.command {
        Command::Translate { text, reverse } => translate_ops::translate_cmd(dict, text, reverse),
        Command::Explain { text, json } => translate_ops::explain_cmd(dict, text, json),
        Command::Repl => translate_ops::repl_cmd(dict),
    }
}
