// src/cli/mod.rs
// Command line options and the headless maintenance commands.

pub mod check;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "store-manager")]
#[command(about = "Store Manager - offline editor for the shop catalog and portfolio", long_about = None)]
pub struct Cli {
    /// Directory holding products.json and the assets/ folders
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and upgrade the catalog, print a summary and exit without a window
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_and_check() {
        let cli = Cli::try_parse_from(["store-manager", "--root", "/shop", "check"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/shop")));
        assert!(matches!(cli.command, Some(Commands::Check)));

        let cli = Cli::try_parse_from(["store-manager"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn root_may_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["store-manager", "check", "--root", "/shop"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/shop")));
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert!(Cli::try_parse_from(["store-manager", "--check"]).is_err());
    }
}
