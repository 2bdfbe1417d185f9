use std::net::SocketAddr;

use anyhow::Context;
use colored::Colorize;
use strindex_query::Translator;
use strindex_server::{ServerConfig, StrindexServer};
use strindex_types::FilterSet;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Analyze(args) => cmd_analyze(args, &cli.format),
        Command::Translate(args) => cmd_translate(args, &cli.format),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let port = std::env::var("PORT").ok();
    let config = resolve_config(&args, port.as_deref())?;
    tracing::debug!(?config, "resolved server config");
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(StrindexServer::new(config).serve())?;
    Ok(())
}

/// Config file (or defaults), then `$PORT`, then `--bind`.
fn resolve_config(args: &ServeArgs, port: Option<&str>) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(port) = port {
        let port: u16 = port.parse().with_context(|| format!("invalid PORT {port:?}"))?;
        config = config.with_port(port);
    }
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    Ok(config)
}

fn cmd_analyze(args: AnalyzeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let props = strindex_analyzer::analyze(&args.value);
    if matches!(format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&props)?);
        return Ok(());
    }

    println!("{} {:?}", "Value:".bold(), args.value);
    println!("  Hash: {}", props.sha256_hash.to_hex().yellow());
    println!("  Length: {}", props.length);
    let palindrome = if props.is_palindrome { "yes".green() } else { "no".red() };
    println!("  Palindrome: {palindrome}");
    println!("  Unique characters: {}", props.unique_characters);
    println!("  Words: {}", props.word_count);
    let frequency: Vec<String> = props
        .character_frequency_map
        .iter()
        .map(|(c, n)| format!("{c:?}={n}"))
        .collect();
    println!("  Frequency: {}", frequency.join(" ").dimmed());
    Ok(())
}

fn cmd_translate(args: TranslateArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let translation = Translator::new().interpret(&args.query)?;
    if matches!(format, OutputFormat::Json) {
        let interpreted = strindex_query::format_interpretation(&args.query, &translation.filters);
        println!("{}", serde_json::to_string_pretty(&interpreted)?);
        return Ok(());
    }

    println!("{} {}", "✓".green().bold(), args.query.bold());
    println!("  Rules: {}", translation.fired.join(", ").cyan());
    for line in describe(&translation.filters) {
        println!("  {line}");
    }
    if translation.unsatisfiable {
        println!("  {}", "max_length < 0 (matches nothing)".yellow());
    }
    Ok(())
}

fn describe(filters: &FilterSet) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(b) = filters.is_palindrome {
        lines.push(format!("is_palindrome = {b}"));
    }
    if let Some(n) = filters.min_length {
        lines.push(format!("min_length = {n}"));
    }
    if let Some(n) = filters.max_length {
        lines.push(format!("max_length = {n}"));
    }
    if let Some(n) = filters.word_count {
        lines.push(format!("word_count = {n}"));
    }
    if let Some(c) = filters.contains_character {
        lines.push(format!("contains_character = {c:?}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serve_args(bind: Option<&str>) -> ServeArgs {
        ServeArgs {
            bind: bind.map(String::from),
            config: None,
        }
    }

    #[test]
    fn resolve_defaults() {
        let config = resolve_config(&serve_args(None), None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn port_env_overrides_default_port() {
        let config = resolve_config(&serve_args(None), Some("8081")).unwrap();
        assert_eq!(config.bind_addr.port(), 8081);
    }

    #[test]
    fn bind_flag_wins_over_port() {
        let config = resolve_config(&serve_args(Some("0.0.0.0:9999")), Some("8081")).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9999".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bad_port_or_bind_is_an_error() {
        assert!(resolve_config(&serve_args(None), Some("http")).is_err());
        assert!(resolve_config(&serve_args(Some("nowhere")), None).is_err());
    }

    #[test]
    fn describe_lists_set_filters_only() {
        let filters = FilterSet::new().with_word_count(1).with_palindrome(true);
        assert_eq!(describe(&filters), vec!["is_palindrome = true", "word_count = 1"]);
    }
}
