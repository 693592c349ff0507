//! CLI interface for vowelsynth

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Formant vowel synthesizer
#[derive(Parser)]
#[command(name = "vowelsynth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print resonator settings for a set of controls
    Formants {
        #[command(flatten)]
        controls: ControlArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the reference vowels
    Vowels,

    /// Render a sustained vowel to a WAV file
    Render {
        #[command(flatten)]
        controls: ControlArgs,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Duration in seconds
        #[arg(short, long, default_value = "2")]
        duration: f64,

        /// Print a text trace of the last rendered samples
        #[arg(long)]
        scope: bool,
    },

    /// Render a glide between two reference vowels to a WAV file
    Glide {
        /// Starting vowel (IPA label or example word)
        from: String,

        /// Ending vowel (IPA label or example word)
        to: String,

        #[command(flatten)]
        controls: ControlArgs,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Duration in seconds
        #[arg(short, long, default_value = "2")]
        duration: f64,
    },

    /// Render the sawtooth generator to a WAV file
    Saw {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Frequency in Hz
        #[arg(long)]
        frequency: Option<f64>,

        /// Linear volume 0..1
        #[arg(long)]
        volume: Option<f64>,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Duration in seconds
        #[arg(short, long, default_value = "2")]
        duration: f64,
    },

    /// Validate a configuration file
    Check {
        /// Configuration file path
        #[arg(short, long, default_value = "vowelsynth.yaml")]
        config: PathBuf,
    },

    /// Generate an example configuration file
    Init,
}

/// Control overrides shared by the vowel commands
#[derive(Args)]
pub struct ControlArgs {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start at a reference vowel (IPA label or example word)
    #[arg(long)]
    pub vowel: Option<String>,

    /// Frontness 0..1
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    pub x: Option<f64>,

    /// Height 0..1
    #[arg(short = 'y', long, allow_negative_numbers = true)]
    pub y: Option<f64>,

    /// Gender factor 0..2
    #[arg(short, long, allow_negative_numbers = true)]
    pub gender: Option<f64>,

    /// Voice quality -1 (tense) .. 1 (breathy)
    #[arg(short, long, allow_negative_numbers = true)]
    pub quality: Option<f64>,

    /// Pitch in Hz
    #[arg(short, long)]
    pub pitch: Option<f64>,

    /// Linear volume
    #[arg(long)]
    pub volume: Option<f64>,

    /// Clamp out-of-range values instead of rejecting them
    #[arg(long)]
    pub clamp: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
