//! CLI entry point and argument parsing.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::llm::GroqConfig;

#[derive(Parser)]
#[command(name = "lexsift")]
#[command(about = "Legal document analysis using hosted LLM completion")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the completion model
    #[arg(long, global = true, env = "GROQ_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a legal document
    Analyze {
        /// Document to analyze (.pdf, .docx, or plain text)
        file: PathBuf,

        /// Analysis to run: summary, parties, dates, risks, or full
        #[arg(short, long, default_value = "summary")]
        category: String,
    },

    /// Extract and print the document text without analyzing it
    Extract {
        /// Document to extract (.pdf, .docx, or plain text)
        file: PathBuf,
    },

    /// Show completion backend status
    Check,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = GroqConfig::default();
    if let Some(model) = cli.model {
        config.model = model;
    }

    match cli.command {
        Commands::Analyze { file, category } => {
            commands::cmd_analyze(&file, &category, config).await
        }
        Commands::Extract { file } => commands::cmd_extract(&file),
        Commands::Check => commands::cmd_check(config),
    }
}
