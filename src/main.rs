//! Wordplay - CLI
//!
//! Terminal word-guessing game. All gameplay is driven by interactive
//! prompts; the flags only preseed choices or aid reproducibility.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;
use std::path::PathBuf;
use wordplay::{
    dict::{Dictionary, loader::load_from_file},
    output::{TerminalRenderer, Theme},
    session::{Session, SessionConfig, StdinInput},
};

#[derive(Parser)]
#[command(
    name = "wordplay",
    about = "Terminal word-guessing game with difficulty levels and themed colors",
    version,
    author
)]
struct Cli {
    /// Arm debug mode without the startup prompt (forced words, relaxed
    /// dictionary checks)
    #[arg(short, long)]
    debug: bool,

    /// Seed the RNG for reproducible word and theme draws
    #[arg(long)]
    seed: Option<u64>,

    /// Theme name (skips the theme menu), e.g. fire, ice, rainbow
    #[arg(short, long)]
    theme: Option<String>,

    /// Custom word list file (one word per line, lengths mixed freely)
    /// replacing the embedded lists
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Disable screen clearing and typing animation
    #[arg(long)]
    plain: bool,
}

/// Load the dictionary from the embedded lists or a custom file
fn load_dictionary(wordlist: Option<&PathBuf>) -> Result<Dictionary> {
    let dict = match wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => Dictionary::embedded(),
    };

    // Every playable length needs words before the first round starts
    dict.ensure_complete()
        .context("word lists are incomplete")?;

    Ok(dict)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let dict = load_dictionary(cli.wordlist.as_ref())?;
    info!("dictionary ready");

    let theme = match cli.theme.as_deref() {
        Some(name) => {
            Some(Theme::from_name(name).ok_or_else(|| anyhow!("unknown theme: {name}"))?)
        }
        None => None,
    };

    let config = SessionConfig {
        theme,
        debug: cli.debug,
    };

    let renderer = TerminalRenderer::new(!cli.plain);
    let mut session = Session::new(dict, StdinInput, renderer, config, cli.seed);
    session.run()
}
