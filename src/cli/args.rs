//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// inkwell - a multi-site blog record service
#[derive(Parser, Debug)]
#[command(name = "inkwell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Port to serve on [default: 80]
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory of web files served under /static/ [default: web/]
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Path to a JSON configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from(["inkwell", "--port", "8080", "--directory", "site/"]);
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.directory, Some(PathBuf::from("site/")));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags_default_to_none() {
        let cli = Cli::parse_from(["inkwell"]);
        assert!(cli.port.is_none());
        assert!(cli.directory.is_none());
    }
}
