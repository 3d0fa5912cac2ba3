mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "devlingo-cli", about = "Daily English phrases for developers", version)]
struct Cli {
    /// Data directory (default: platform local data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory holding the phrases_<category>.json files
    #[arg(long, global = true)]
    phrases: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Show today's phrases (the default)
    Today,

    /// Mark a phrase as learned
    Complete {
        /// Phrase id
        id: String,
    },

    /// Save or unsave a phrase
    Save {
        /// Phrase id
        id: String,
    },

    /// List saved phrases
    Saved,

    /// Show level, streak and per-category counts
    Progress,

    /// Show past days
    History {
        /// Maximum days shown, most recent first
        #[arg(long, default_value = "14")]
        limit: usize,
    },

    /// List categories with phrase counts
    Categories,

    /// List phrases in a category
    Category {
        /// Category name (e.g. "codeReview" or "Code Review")
        name: String,
    },

    /// Search phrases by English text or context
    Search {
        /// Search query
        query: String,
        /// Maximum results
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show or change the translation language
    Language {
        /// Language code (e.g. "es", "pt-BR")
        code: Option<String>,
    },

    /// Show the widget feed entry for an hour
    Widget {
        /// Hour of day (default: current local hour)
        #[arg(long)]
        hour: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let mut app = app::App::new(cli.data_dir, cli.phrases)?;

    match cli.command.unwrap_or(Command::Today) {
        Command::Today => {
            commands::today::run(&app, &cli.format, use_color)?;
        }
        Command::Complete { id } => {
            commands::complete::run(&app, &id, &cli.format, use_color)?;
        }
        Command::Save { id } => {
            commands::saved::run_toggle(&app, &id, &cli.format, use_color)?;
        }
        Command::Saved => {
            commands::saved::run_list(&app, &cli.format, use_color)?;
        }
        Command::Progress => {
            commands::progress::run(&app, &cli.format, use_color)?;
        }
        Command::History { limit } => {
            commands::history::run(&app, limit, &cli.format, use_color)?;
        }
        Command::Categories => {
            commands::categories::run_list(&app, &cli.format, use_color)?;
        }
        Command::Category { name } => {
            commands::categories::run_show(&app, &name, &cli.format, use_color)?;
        }
        Command::Search { query, limit } => {
            commands::search::run(&app, &query, limit, &cli.format, use_color)?;
        }
        Command::Language { code } => {
            commands::language::run(&mut app, code.as_deref(), &cli.format, use_color)?;
        }
        Command::Widget { hour } => {
            commands::widget::run(&app, hour, &cli.format, use_color)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
