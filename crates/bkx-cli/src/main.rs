//! 🚀 bkx-cli — the front door, the bouncer, the maitre d' of bkx.
//!
//! 🎬 *[narrator voice]* "It all started with a simple main() function..."
//! 📦 This binary crate is the thin CLI wrapper that loads config,
//! sets up logging, and then lets the library do the heavy lifting.
//! Like a manager. 🦆

mod browse;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bkx::app_config::{AppConfig, SourceConfig};
use bkx::catalog::{Action, CatalogState};
use bkx::common::SortKey;
use bkx::render;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use crate::browse::{BrowseCommand, HELP, parse_command};

/// 📚 Search, filter, sort, and page through an e-book catalog.
#[derive(Debug, Parser)]
#[command(name = "bkx", version, about)]
struct Cli {
    /// TOML config file. Defaults to ./bkx.toml when it exists.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Catalog location: a file path or an http(s) URL. Overrides the config.
    #[arg(long, global = true)]
    source: Option<String>,
    /// Books per page. Overrides the config.
    #[arg(long, global = true)]
    page_size: Option<usize>,
    /// No spinner while loading.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// One-shot search: print one page of results.
    Search(SearchArgs),
    /// List every author in the catalog.
    Authors,
    /// Author, book, and result counts.
    Stats,
    /// Interactive browsing on stdin. Type 'help' once inside.
    Browse,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// Case-insensitive text matched against titles and authors.
    query: Option<String>,
    /// Exact author name.
    #[arg(short, long)]
    author: Option<String>,
    #[arg(short, long, value_enum)]
    sort: Option<SortArg>,
    #[arg(short, long, default_value_t = 1)]
    page: usize,
    /// Print the view as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Author,
    Title,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Author => SortKey::ByAuthor,
            SortArg::Title => SortKey::ByTitle,
        }
    }
}

/// 🚀 main() — where it all begins. The genesis. The big bang.
///
/// 🔧 Steps:
/// 1. Init tracing (stderr, so stdout stays clean for --json)
/// 2. Parse args
/// 3. Load config (the moment of truth)
/// 4. Run the thing
/// 5. Handle errors (cry, then exit 1)
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        error!("💀 error: {}", err);
        // -- 🧅 peel the onion of sadness, one tear-jerking layer at a time
        for cause in err.chain().skip(1) {
            error!("⚠️  cause: {}", cause);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let app_config = resolve_config(&cli)?;
    // -- 🤫 JSON consumers don't want a spinner in their pipe
    let wants_json = matches!(&cli.command, Command::Search(args) if args.json);
    let show_progress = !cli.quiet && !wants_json;
    let state = bkx::open_catalog(&app_config, show_progress).await?;

    match cli.command {
        Command::Search(args) => search(state, args),
        Command::Authors => {
            println!("{}", render::render_authors(state.authors()));
            Ok(())
        }
        Command::Stats => {
            println!("{}", render::render_stats(&state.view().stats));
            Ok(())
        }
        Command::Browse => browse(state).await,
    }
}

/// 🔧 Config file (if any) + env, then the command-line overrides on top.
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let config_file = match &cli.config {
        Some(path) => {
            // 🔒 an explicitly named file that doesn't exist is a typo, not a default
            let exists = path.try_exists().context(format!(
                "💀 Couldn't check whether the config file exists. Was checking here: '{}'",
                path.display()
            ))?;
            anyhow::ensure!(
                exists,
                "💀 Config file '{}' does not exist. If the path is relative, it's relative to where you ran bkx.",
                path.display()
            );
            Some(path.as_path())
        }
        // -- 🔧 default: the ol' reliable, but only if it's actually there
        None => Some(Path::new("bkx.toml")).filter(|p| p.exists()),
    };

    let mut app_config = bkx::app_config::load_config(config_file)
        .context("💀 In bkx-cli, we couldn't load the configuration. Take a look at the file and the BKX_* env vars.")?;

    if let Some(location) = &cli.source {
        app_config.source = SourceConfig::from_location(location);
    }
    if let Some(page_size) = cli.page_size {
        app_config.catalog.page_size = page_size;
        app_config.validate()?;
    }
    Ok(app_config)
}

fn search(state: CatalogState, args: SearchArgs) -> Result<()> {
    let mut state = state
        .reduce(Action::SetQuery(args.query.unwrap_or_default()))
        .reduce(Action::SetAuthor(args.author));
    if let Some(sort) = args.sort {
        state = state.reduce(Action::SetSort(sort.into()));
    }
    let state = state.reduce(Action::GoToPage(args.page));
    if state.page() != args.page {
        warn!(
            "🚫 page {} does not exist (there are {}), showing page {}",
            args.page,
            state.total_pages(),
            state.page()
        );
    }

    let view = state.view();
    if args.json {
        println!("{}", render::view_to_json(&view)?);
    } else {
        println!("{}", render::render_view(&view));
    }
    Ok(())
}

async fn browse(mut state: CatalogState) -> Result<()> {
    println!("{}", render::render_view(&state.view()));
    println!("(type 'help' for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("bkx> ");
        std::io::stdout().flush().context("💀 stdout went away")?;

        let Some(line) = lines.next_line().await.context("💀 couldn't read from stdin")? else {
            // -- 🏁 EOF: the user closed the book
            println!();
            return Ok(());
        };

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(BrowseCommand::Quit)) => return Ok(()),
            Ok(Some(BrowseCommand::Help)) => println!("{HELP}"),
            Ok(Some(BrowseCommand::Authors)) => {
                println!("{}", render::render_authors(state.authors()))
            }
            Ok(Some(BrowseCommand::Act(action))) => {
                state = state.reduce(action);
                println!("{}", render::render_view(&state.view()));
            }
            Err(err) => println!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use figment::Jail;

    #[test]
    fn the_one_where_clap_approves_of_our_flags() {
        Cli::command().debug_assert();
    }

    #[test]
    fn the_one_where_command_line_beats_the_config() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("BKX_CATALOG__PAGE_SIZE", "5");
            let cli = Cli::try_parse_from([
                "bkx",
                "--source",
                "https://thesolution.at/ebooks-data.json",
                "--page-size",
                "24",
                "search",
                "rust",
                "--sort",
                "title",
                "--json",
            ])
            .expect("💀 these are all real flags");

            let app_config = resolve_config(&cli).expect("💀 config should resolve");
            assert!(matches!(app_config.source, SourceConfig::Http(_)));
            assert_eq!(app_config.catalog.page_size, 24);
            match cli.command {
                Command::Search(args) => {
                    assert_eq!(args.query.as_deref(), Some("rust"));
                    assert!(matches!(args.sort, Some(SortArg::Title)));
                    assert!(args.json);
                    assert_eq!(args.page, 1);
                }
                other => panic!("💀 expected search, got {other:?}"),
            }
            Ok(())
        });
    }

    #[test]
    fn the_one_where_the_local_bkx_toml_is_picked_up_without_asking() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "bkx.toml",
                r#"
                [catalog]
                page_size = 12

                [source.File]
                file_name = "shelf.json"
                "#,
            )?;
            let cli = Cli::try_parse_from(["bkx", "stats"]).expect("💀 parses");

            let app_config = resolve_config(&cli).expect("💀 the local file should load");
            assert_eq!(app_config.catalog.page_size, 12);
            assert!(matches!(
                app_config.source,
                SourceConfig::File(ref f) if f.file_name == "shelf.json"
            ));
            Ok(())
        });
    }

    #[test]
    fn the_one_where_page_size_zero_on_the_command_line_is_refused() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let cli = Cli::try_parse_from(["bkx", "--page-size", "0", "stats"]).expect("💀 parses");
            assert!(resolve_config(&cli).is_err());
            Ok(())
        });
    }

    #[test]
    fn the_one_where_a_missing_config_file_is_a_typo() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let cli = Cli::try_parse_from(["bkx", "--config", "not-here.toml", "authors"])
                .expect("💀 parses");
            assert!(resolve_config(&cli).is_err());
            Ok(())
        });
    }
}
