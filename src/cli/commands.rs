//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Journaling helper that understands English date phrases", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Date phrase (e.g., today, yesterday, two days ago, next wednesday)
    #[arg(value_name = "PHRASE")]
    pub phrase: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The date phrase: trailing words joined with single spaces, or
    /// "today" when no words were given
    pub fn date_phrase(&self) -> String {
        if self.phrase.is_empty() {
            "today".to_string()
        } else {
            self.phrase.join(" ")
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
