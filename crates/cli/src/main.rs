//! Minibank CLI - In-memory account ledger behind a console menu
//!
//! Usage:
//! ```bash
//! minibank                      # interactive menu on stdin/stdout
//! minibank --script session.txt # feed the menu from a file
//! minibank --format json        # account listing as JSON
//! ```
//!
//! All state lives in memory for the duration of the session; exiting
//! the menu discards it.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minibank_core::Registry;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

mod menu;

use menu::{ListFormat, Menu};

/// Minibank - an in-memory account ledger with a console menu
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read menu input from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Output format for the account listing
    #[arg(long, default_value = "table")]
    pub format: ListFormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormatArg {
    /// One line per account
    Table,
    /// JSON array of accounts
    Json,
}

impl ListFormatArg {
    fn to_menu_format(self) -> ListFormat {
        match self {
            ListFormatArg::Table => ListFormat::Table,
            ListFormatArg::Json => ListFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut registry = Registry::new();
    let menu = Menu::new(cli.format.to_menu_format());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Cannot open script file: {}", path.display()))?;
            menu.run(&mut registry, &mut BufReader::new(file), &mut out)?;
        }
        None => {
            let stdin = io::stdin();
            menu.run(&mut registry, &mut stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}
