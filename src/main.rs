//! lexika CLI - Browse a Directus-style content collection from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexika::{
    build_url, format_relative_time, BrowserOptions, CollectionBrowser, Config, CountRow, Fetcher,
    FilterSet, MemoryNavStore, NavState, ReqwestTransport, TranslationKey,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "lexika")]
#[command(version)]
#[command(about = "Browse a Directus-style content collection with resilient, shareable queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "lexika.toml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List records from the collection
    List {
        /// Substring to match against the search field
        #[arg(short, long)]
        search: Option<String>,

        /// Start of the update-date window (ISO-8601)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// End of the update-date window (ISO-8601)
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// Page to fetch (1-based)
        #[arg(short, long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Count records matching a filter
    Count {
        /// Substring to match against the search field
        #[arg(short, long)]
        search: Option<String>,

        /// Start of the update-date window (ISO-8601)
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// End of the update-date window (ISO-8601)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },

    /// Validate configuration file
    Validate,

    /// Show example configuration
    Example,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn print_example_config() {
    let example = r#"# lexika configuration file

[api]
base_url = "https://directus.altura.io"
collection = "translationKeys"
timeout_secs = 30
retries = 3
retry_delay_ms = 1000

[query]
page_size = 10
debounce_ms = 300
search_field = "key"
date_field = "updatedAt"

[state]
# Persist the last view as a shareable query string
# path = "lexika-state.txt"
"#;
    println!("{example}");
}

/// Load the config file, falling back to defaults when it does not exist.
fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        Config::from_file(path).with_context(|| format!("Failed to load config from {path:?}"))?
    } else {
        Config::default()
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Example => {
            print_example_config();
        }

        Commands::Validate => {
            let config = Config::from_file(&cli.config)
                .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
            config.validate().context("Invalid configuration")?;

            info!("Configuration is valid");
            info!("  Endpoint:  {}", config.collection_url());
            info!("  Page size: {}", config.query.page_size);
            info!(
                "  Retries:   {} ({} ms base delay)",
                config.api.retries, config.api.retry_delay_ms
            );
        }

        Commands::List {
            search,
            from,
            to,
            page,
            page_size,
        } => {
            let config = load_config(&cli.config)?;

            let flags = NavState {
                search_query: search,
                start_date: from,
                end_date: to,
                page,
                page_size,
            };

            // Flags override the stored view; without flags the configured
            // store seeds the last shared state
            let browser: CollectionBrowser<TranslationKey> = if flags == NavState::default() {
                CollectionBrowser::from_config(&config)?
            } else {
                CollectionBrowser::with_store(
                    &config,
                    Box::new(MemoryNavStore::with_state(flags)),
                )?
            };

            browser.refresh().await;
            let snapshot = browser.snapshot();

            if let Some(error) = snapshot.error {
                anyhow::bail!("Fetch failed: {error}");
            }

            for row in &snapshot.items {
                let variables = row
                    .variables
                    .as_ref()
                    .map(|names| names.join(", "))
                    .unwrap_or_default();
                println!(
                    "{:<48} {:<20} {}",
                    row.key,
                    format_relative_time(row.updated_at.as_deref()),
                    variables
                );
            }
            println!(
                "\npage {} of {} ({} total)",
                snapshot.current_page,
                snapshot.total_pages(),
                snapshot.total_count
            );
        }

        Commands::Count { search, from, to } => {
            let config = load_config(&cli.config)?;
            let options = BrowserOptions::from_config(&config);

            let mut filter = FilterSet::new();
            if let Some(text) = &search {
                filter.contains(config.query.search_field.as_str(), text.as_str());
            }
            if let (Some(start), Some(end)) = (&from, &to) {
                filter.between(
                    config.query.date_field.as_str(),
                    start.as_str(),
                    end.as_str(),
                );
            }

            let transport = ReqwestTransport::new(config.timeout())?;
            let fetcher = Fetcher::new(Arc::new(transport));
            let url = build_url(
                &config.collection_url(),
                &[
                    ("filter", filter.to_json()?.as_str()),
                    ("aggregate[count]", "*"),
                ],
            )?;

            let rows: Vec<CountRow> = fetcher.fetch(&url, &options.retry).await?;
            let count = rows.first().map(CountRow::value).transpose()?.unwrap_or(0);
            println!("{count}");
        }
    }

    Ok(())
}
