//! CLI argument parsing for firstwords

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::affirmation::Feeling;
use crate::category::{CreativeType, Inspiration, Pick, Tone};

#[derive(Parser, Debug)]
#[command(name = "fw")]
#[command(author, version, about = "Creative introductions and affirmations", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a creative introduction
    Bio {
        /// Creative type(s), comma-separated; "other" needs --other-type
        #[arg(short = 't', long = "type", value_delimiter = ',')]
        types: Vec<Pick<CreativeType>>,

        /// Inspiration(s), comma-separated; "other" needs --other-inspiration
        #[arg(short, long = "inspiration", value_delimiter = ',')]
        inspirations: Vec<Pick<Inspiration>>,

        /// Tone(s), comma-separated; "other" needs --other-tone
        #[arg(short = 'n', long = "tone", value_delimiter = ',')]
        tones: Vec<Pick<Tone>>,

        /// How you would describe yourself; commas separate traits
        #[arg(short, long, default_value = "")]
        description: String,

        /// Your own creative type, used in place of "other"
        #[arg(long)]
        other_type: Option<String>,

        /// Your own inspiration, used in place of "other"
        #[arg(long)]
        other_inspiration: Option<String>,

        /// Your own tone, used in place of "other"
        #[arg(long)]
        other_tone: Option<String>,

        /// Also print which template was used
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show an affirmation for how you feel
    Affirm {
        /// discouraged, anxious, excited or hopeful
        #[arg(required = true)]
        feeling: Feeling,

        /// Seed for a reproducible pick
        #[arg(short, long)]
        seed: Option<u64>,

        /// Use the single-message pool
        #[arg(long)]
        simple: bool,
    },

    /// List the feelings you can check in with
    Feelings,

    /// List the options for each intro field
    Options,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bio_lists() {
        let cli = Cli::try_parse_from([
            "fw",
            "bio",
            "--type",
            "singer,other",
            "--other-type",
            "Puppeteer",
            "--inspiration",
            "nature",
            "--tone",
            "soft spoken",
            "--description",
            "quiet",
        ])
        .unwrap();
        match cli.command {
            Command::Bio {
                types,
                tones,
                other_type,
                ..
            } => {
                assert_eq!(types, vec![Pick::Known(CreativeType::Singer), Pick::Other]);
                assert_eq!(tones, vec![Pick::Known(Tone::SoftSpoken)]);
                assert_eq!(other_type.as_deref(), Some("Puppeteer"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        assert!(Cli::try_parse_from(["fw", "bio", "--type", "juggler"]).is_err());
        assert!(Cli::try_parse_from(["fw", "affirm", "sleepy"]).is_err());
    }

    #[test]
    fn test_parse_affirm() {
        let cli = Cli::try_parse_from(["fw", "affirm", "Hopeful", "--seed", "4", "--simple"]).unwrap();
        match cli.command {
            Command::Affirm { feeling, seed, simple } => {
                assert_eq!(feeling, Feeling::Hopeful);
                assert_eq!(seed, Some(4));
                assert!(simple);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
