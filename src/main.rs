use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::{Commands, FavCommands};
use toolshelf::catalog::CatalogStore;
use toolshelf::config::Config;
use toolshelf::filter::{self, FilterState};
use toolshelf::i18n::{self, Language, LanguagePack, PackSet};
use toolshelf::settings::{Settings, SettingsStore};
use toolshelf::theme::Theme;
use toolshelf::tui;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolshelf")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolshelf.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;
    config.validate()?;

    run_application(&cli, &config).await
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    // Startup sequence: settings first, then the catalog and language
    // pack fetches. All degrade rather than abort.
    let settings_store = SettingsStore::default_location();
    let settings = settings_store.load();
    let catalog = config.catalog.source().load_or_empty().await;
    let packs = PackSet::resolve(config.language.url.as_deref(), config.language.dir.as_deref()).await;
    let store = CatalogStore::new(catalog, settings.favorites.clone());

    match &cli.command {
        None => run_tui(store, settings, settings_store, packs, config).await,
        Some(Commands::List {
            search,
            category,
            platform,
            developer,
            favorites,
        }) => {
            let state = FilterState {
                search: search.clone().unwrap_or_default(),
                category: category.clone(),
                platform: platform.clone(),
                developer: developer.clone(),
                favorites_only: *favorites,
            };
            handle_list_command(&store, &state, packs.get(settings.language), settings.language)
        }
        Some(Commands::Show { id }) => handle_show_command(&store, id, packs.get(settings.language), settings.language),
        Some(Commands::Suggest { query }) => handle_suggest_command(&store, query),
        Some(Commands::Fav { command }) => handle_fav_command(command, store, settings, &settings_store),
        Some(Commands::Theme { value }) => handle_theme_command(value.as_deref(), settings, &settings_store),
        Some(Commands::Lang { value }) => handle_lang_command(value.as_deref(), settings, &settings_store),
    }
}

async fn run_tui(
    store: CatalogStore,
    settings: Settings,
    settings_store: SettingsStore,
    packs: PackSet,
    config: &Config,
) -> Result<()> {
    info!("Launching TUI mode");
    let tick_rate_ms = config.ui.tick_rate_ms;
    let app = tui::App::new(store, settings, settings_store, packs, config);

    let terminal = tui::init_terminal()?;
    let mut runner = tui::TuiRunner::new(terminal, app, tick_rate_ms);
    let result = runner.run().await;
    tui::restore_terminal()?;
    result
}

fn handle_list_command(
    store: &CatalogStore,
    state: &FilterState,
    pack: &LanguagePack,
    language: Language,
) -> Result<()> {
    let view = filter::apply(store, state);

    if view.is_empty() {
        let key = if state.favorites_only { "no-favorites-title" } else { "no-results-title" };
        println!("{}", pack.get(key).yellow());
        return Ok(());
    }

    for tool in &view {
        let marker = if store.is_favorite(&tool.id) { "♥ ".red() } else { "  ".normal() };
        println!(
            "{}{}  {}  {}",
            marker,
            tool.name.bold(),
            format!("[{}]", tool.category).magenta(),
            tool.short_description.get(language.code()).dimmed(),
        );
    }
    println!("{}", format!("{} tools", view.len()).cyan());
    Ok(())
}

fn handle_show_command(
    store: &CatalogStore,
    id: &str,
    pack: &LanguagePack,
    language: Language,
) -> Result<()> {
    let tool = store.require(id)?;

    println!("{}", tool.name.bold().cyan());
    println!("{}: {}", pack.get("developer"), tool.developer);
    println!("{}: {}", pack.get("category"), tool.category.magenta());
    println!("{}: {}", pack.get("release-date"), i18n::format_date(&tool.release_date, language));
    println!("{}: {}", pack.get("license"), tool.license);
    println!("{}: {}", pack.get("platforms"), tool.platforms.join(", "));
    if !tool.pricing.is_empty() {
        println!("{}: {}", pack.get("pricing"), tool.pricing.join(", "));
    }
    println!();
    println!("{}", tool.description.get(language.code()));
    if !tool.links.is_empty() {
        println!();
        for (kind, url) in &tool.links {
            println!("{}: {}", pack.get(kind).green(), url);
        }
    }
    Ok(())
}

fn handle_suggest_command(store: &CatalogStore, query: &str) -> Result<()> {
    for name in filter::suggest(store, query) {
        println!("{}", name);
    }
    Ok(())
}

fn handle_fav_command(
    command: &FavCommands,
    mut store: CatalogStore,
    mut settings: Settings,
    settings_store: &SettingsStore,
) -> Result<()> {
    match command {
        FavCommands::Add { id } => {
            store.add_favorite(id)?;
            settings.favorites = store.favorites().clone();
            settings_store.save(&settings)?;
            println!("{} {}", "Favorited:".green(), id);
        }
        FavCommands::Remove { id } => {
            store.remove_favorite(id);
            settings.favorites = store.favorites().clone();
            settings_store.save(&settings)?;
            println!("{} {}", "Unfavorited:".yellow(), id);
        }
        FavCommands::List => {
            for id in store.favorites() {
                println!("{}", id);
            }
        }
    }
    Ok(())
}

fn handle_theme_command(value: Option<&str>, mut settings: Settings, settings_store: &SettingsStore) -> Result<()> {
    match value {
        Some(value) => {
            settings.theme = value.parse::<Theme>()?;
            settings_store.save(&settings)?;
            println!("{} {}", "Theme set to".green(), settings.theme);
        }
        None => println!("{}", settings.theme),
    }
    Ok(())
}

fn handle_lang_command(value: Option<&str>, mut settings: Settings, settings_store: &SettingsStore) -> Result<()> {
    match value {
        Some(value) => {
            settings.language = value.parse::<Language>()?;
            settings_store.save(&settings)?;
            println!("{} {}", "Language set to".green(), settings.language);
        }
        None => println!("{}", settings.language),
    }
    Ok(())
}
