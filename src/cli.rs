//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// VibeParse - step through generated code walkthrough scripts
#[derive(Parser, Debug)]
#[command(name = "vibeparse")]
#[command(about = "Terminal player for generated code walkthrough scripts", long_about = None)]
pub struct Args {
    /// Start page: `/` (generation form) or `/player/<script_id>`
    #[arg(value_name = "ROUTE")]
    pub route: Option<String>,

    /// Backend base URL (overrides VIBEPARSE_API_URL and the config file)
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch a script and print it as Markdown
    Export {
        script_id: String,

        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Write a commented default config file
    InitConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_opens_form() {
        let args = Args::try_parse_from(["vibeparse"]).unwrap();
        assert!(args.route.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_route_and_api_url() {
        let args = Args::try_parse_from([
            "vibeparse",
            "/player/abc123",
            "--api-url",
            "http://backend:9000",
        ])
        .unwrap();
        assert_eq!(args.route.as_deref(), Some("/player/abc123"));
        assert_eq!(args.api_url.as_deref(), Some("http://backend:9000"));
    }

    #[test]
    fn test_export_subcommand() {
        let args =
            Args::try_parse_from(["vibeparse", "export", "abc123", "-o", "out/abc.md"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Export {
                script_id: "abc123".into(),
                output: Some(PathBuf::from("out/abc.md")),
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "vibeparse",
            "export",
            "abc123",
            "--config",
            "/tmp/vp.toml",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/vp.toml")));
    }

    #[test]
    fn test_export_requires_id() {
        assert!(Args::try_parse_from(["vibeparse", "export"]).is_err());
    }
}
