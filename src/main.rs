//! Carousel List - Entry Point

use carousel_list::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
};
use carousel_list::report::{self, OutputFormat};
use carousel_list::{shell, PageCatalog, ViewStateStore};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Carousel List - browse, search and summarize a paged item catalog
#[derive(Parser, Debug)]
#[command(name = "carousel")]
#[command(version)]
#[command(about = "Browse, search and summarize a paged item catalog")]
pub struct Args {
    /// Catalog file (TOML, or JSON with a .json extension); defaults to the bundled sample
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Page to show (0-based)
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Filter the page's items by this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print letter statistics for the visible items
    #[arg(long)]
    pub stats: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read commands from stdin (`page N`, `search TEXT`, `stats`, ...)
    #[arg(short, long)]
    pub interactive: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged);
        let stats_override = if args.stats { Some(true) } else { None };

        apply_cli_overrides(
            with_env,
            args.catalog.clone(),
            args.page,
            stats_override,
            args.format,
        )
    };

    carousel_list::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let catalog = match &config.catalog_path {
        Some(path) => PageCatalog::from_file(path)?,
        None => PageCatalog::sample(),
    };

    let mut store = ViewStateStore::new(catalog);
    if config.initial_page != 0 {
        store.set_current_page(config.initial_page)?;
    }
    if let Some(query) = args.search {
        store.set_search_query(query);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.interactive {
        shell::run(&mut store, std::io::stdin().lock(), &mut out, config.format)?;
        return Ok(());
    }

    let statistics = config.show_stats.then(|| store.statistics());
    let rendered = report::render(store.state(), statistics.as_ref(), config.format)?;
    writeln!(out, "{}", rendered.trim_end())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["carousel", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["carousel", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["carousel"]);
        assert_eq!(args.catalog, None);
        assert_eq!(args.page, None);
        assert_eq!(args.search, None);
        assert!(!args.stats);
        assert_eq!(args.format, None);
        assert!(!args.interactive);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_page_short_and_long() {
        assert_eq!(Args::parse_from(["carousel", "-p", "2"]).page, Some(2));
        assert_eq!(Args::parse_from(["carousel", "--page", "4"]).page, Some(4));
    }

    #[test]
    fn test_page_rejects_negative() {
        let result = Args::try_parse_from(["carousel", "--page", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_keeps_query_verbatim() {
        let args = Args::parse_from(["carousel", "--search", " Berry "]);
        assert_eq!(args.search, Some(" Berry ".to_string()));
    }

    #[test]
    fn test_format_values() {
        let args = Args::parse_from(["carousel", "--format", "json"]);
        assert_eq!(args.format, Some(OutputFormat::Json));

        let result = Args::try_parse_from(["carousel", "--format", "yaml"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "carousel",
            "--catalog",
            "pages.toml",
            "-p",
            "1",
            "-s",
            "an",
            "--stats",
            "-i",
        ]);
        assert_eq!(args.catalog, Some(PathBuf::from("pages.toml")));
        assert_eq!(args.page, Some(1));
        assert_eq!(args.search, Some("an".to_string()));
        assert!(args.stats);
        assert!(args.interactive);
    }

    #[test]
    fn test_cli_page_flows_through_config_precedence_chain() {
        use carousel_list::config::{ConfigFile, ResolvedConfig};

        let config_file = ConfigFile {
            initial_page: Some(3),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.initial_page, 3, "Config file should override default page");

        let with_cli = apply_cli_overrides(merged, None, Some(1), None, None);
        assert_eq!(with_cli.initial_page, 1, "CLI page should override all other sources");

        assert_eq!(ResolvedConfig::default().format, OutputFormat::Text);
    }
}
