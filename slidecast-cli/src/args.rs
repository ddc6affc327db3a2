use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and check slideshow content
#[derive(Parser, Debug)]
#[command(name = "slidecast", version)]
pub struct Cli {
    /// Application config file
    #[arg(long, value_name = "FILE", default_value = "config.toml")]
    pub config: PathBuf,

    /// Content file, overriding `[system] content_path`
    #[arg(long, value_name = "FILE", conflicts_with = "builtin")]
    pub content: Option<PathBuf>,

    /// Use the bundled content instead of a file
    #[arg(long)]
    pub builtin: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::List)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Slide numbers with background and line counts
    List,
    /// Raw slide as written in the content file
    Show { n: u32 },
    /// Resolved slide, or every slide when no number is given
    Resolve { n: Option<u32> },
    /// Subtitle cue timing for a slide
    Timeline { n: u32 },
    /// Every image and audio file the content uses
    Manifest,
    /// Validation report plus assets missing on disk
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("slidecast").chain(s.split_whitespace()))
    }

    #[test]
    fn defaults_to_list() {
        let cli = parse("").unwrap();
        assert_eq!(cli.command(), Command::List);
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(!cli.builtin);
    }

    #[test]
    fn options_and_command() {
        let cli = parse("--content deck.json --config alt.toml resolve 3").unwrap();
        assert_eq!(cli.command(), Command::Resolve { n: Some(3) });
        assert_eq!(cli.content, Some(PathBuf::from("deck.json")));
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert_eq!(parse("resolve").unwrap().command(), Command::Resolve { n: None });
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse("show").is_err());
        assert!(parse("show x").is_err());
        assert!(parse("timeline -1").is_err());
        assert!(parse("--content").is_err());
        assert!(parse("--builtin --content a.json list").is_err());
        assert!(parse("--verbose").is_err());
    }
}
