use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gloss_cli::commands::manual_ops::{self, ManualOptions};
use gloss_cli::commands::segment_ops::{self, SegmentOptions};
use gloss_cli::commands::{config_ops, dict_ops};

#[derive(Parser)]
#[command(name = "glosstool", about = "Morpheme segmentation and interlinear glossing")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Segment text against a morpheme spec
    Segment {
        /// Text to segment
        text: String,
        /// Morpheme spec file (`morpheme: key=value, ...` per line)
        #[arg(long)]
        dict: String,
        /// Pre-tagged tokens in CoNLL-U format
        #[arg(long)]
        conllu: Option<String>,
        /// Language code (default: settings fallback)
        #[arg(long)]
        lang: Option<String>,
        /// Also print the pseudo-translation line
        #[arg(long)]
        translate: bool,
        /// Align segmented and translation lines word by word
        #[arg(long)]
        interlinear: bool,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Gloss text from an explicit word breakdown
    Manual {
        /// Text to gloss
        text: String,
        /// Breakdown file (`word: root=..., suffix=..., key=value` per line)
        #[arg(long)]
        breakdown: String,
        /// Abbreviation overrides (`key=value` per line)
        #[arg(long)]
        abbrevs: Option<String>,
        /// Align surface and gloss lines word by word
        #[arg(long)]
        interlinear: bool,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show entry counts and contents of a morpheme spec
    DictInfo {
        /// Morpheme spec file
        file: String,
    },
    /// Look up the built-in abbreviation for a feature value
    Abbrev {
        /// Feature value, e.g. `nominative`
        value: String,
    },
    /// Export default settings TOML to stdout
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// TOML file to validate
        file: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("GLOSS_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Segment {
            text,
            dict,
            conllu,
            lang,
            translate,
            interlinear,
            json,
        } => {
            let opts = SegmentOptions {
                dict,
                conllu,
                lang,
                translate,
                interlinear,
                json,
            };
            segment_ops::segment_cmd(&text, &opts);
        }
        Command::Manual {
            text,
            breakdown,
            abbrevs,
            interlinear,
            json,
        } => {
            let opts = ManualOptions {
                breakdown,
                abbrevs,
                interlinear,
                json,
            };
            manual_ops::manual_cmd(&text, &opts);
        }
        Command::DictInfo { file } => dict_ops::info(&file),
        Command::Abbrev { value } => dict_ops::abbrev(&value),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
