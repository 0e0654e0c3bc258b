//! CLI argument definitions for the Speakophone command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Parser, Subcommand};

/// Speakophone - allophone speech synthesis and dice-roll narration
#[derive(Parser)]
#[command(name = "speakophone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase diagnostic output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Speak text with an allophone voice
    Say {
        /// Path to the voice config (JSON)
        #[arg(long)]
        voice: String,

        /// Text to speak; reads lines from stdin when omitted
        #[arg(short, long)]
        text: Option<String>,

        /// Output WAV file for --text
        #[arg(short, long)]
        out: Option<String>,

        /// Directory for phrases saved with a leading '>' in interactive mode
        #[arg(long, default_value = ".")]
        out_dir: String,
    },

    /// Roll dice and narrate the result from recorded phrases
    Roll {
        /// Path to the dice roller phrase config (JSON)
        #[arg(short, long)]
        config: String,

        /// Number of dice to roll
        #[arg(short, long, default_value_t = 1)]
        dice: u32,

        /// Number of sides per die
        #[arg(short, long, default_value_t = 6)]
        size: u32,

        /// Number of independent rolls, each written to its own file
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Seed for reproducible rolls (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Output WAV file
        #[arg(short, long)]
        out: String,
    },

    /// Synthesize the basic dice-roll phrase set into a directory
    Bake {
        /// Path to the voice config (JSON)
        #[arg(long)]
        voice: String,

        /// Directory to write `<phrase>.wav` files into
        #[arg(long)]
        out_dir: String,
    },

    /// Write every conditioned allophone clip as `<name>_TESTOUT.wav`
    Dump {
        /// Path to the voice config (JSON)
        #[arg(long)]
        voice: String,

        /// Directory to write clips into
        #[arg(long)]
        out_dir: String,
    },

    /// Print the English words for a number
    Number {
        /// The number to name
        #[arg(allow_negative_numbers = true)]
        value: i128,
    },
}
