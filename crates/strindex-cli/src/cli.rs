use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "strindex",
    about = "strindex — queryable catalogue of analyzed strings",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the derived properties of a string
    Analyze(AnalyzeArgs),
    /// Show how a natural-language query is interpreted
    Translate(TranslateArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, overriding the config file and $PORT
    #[arg(long)]
    pub bind: Option<String>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    pub value: String,
}

#[derive(Args)]
pub struct TranslateArgs {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve_defaults() {
        let cli = Cli::try_parse_from(["strindex", "serve"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert!(args.bind.is_none());
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_with_bind_and_config() {
        let cli = Cli::try_parse_from([
            "strindex", "serve", "--bind", "0.0.0.0:8080", "--config", "strindex.toml",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".into()));
            assert_eq!(args.config, Some(PathBuf::from("strindex.toml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_analyze() {
        let cli = Cli::try_parse_from(["strindex", "analyze", "A man a plan"]).unwrap();
        if let Command::Analyze(args) = cli.command {
            assert_eq!(args.value, "A man a plan");
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_translate() {
        let cli = Cli::try_parse_from(["strindex", "translate", "single word palindromes"]).unwrap();
        assert!(matches!(cli.command, Command::Translate(_)));
    }

    #[test]
    fn analyze_requires_value() {
        assert!(Cli::try_parse_from(["strindex", "analyze"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["strindex", "--verbose", "analyze", "x"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["strindex", "--format", "json", "translate", "q"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
