// src/main.rs

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use gamehub::application::commands::*;
use gamehub::application::dto::{CreateEntryDto, FilterDto, UpdateEntryDto};
use gamehub::application::state::AppState;
use gamehub::cli::{Cli, Commands};
use gamehub::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. LOGGING
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // 2. CONFIGURATION & STORAGE
    let config = AppConfig::from_env()?.with_overrides(cli.data_dir.clone(), cli.storage);
    let storage = config
        .open_storage()
        .with_context(|| format!("opening storage in {}", config.data_dir.display()))?;

    // 3. APPLICATION STATE
    let state = AppState::new(storage);

    // 4. DISPATCH
    match run(&state, cli.command) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn run(state: &AppState, command: Commands) -> Result<String, String> {
    match command {
        Commands::List { search, genre, min_rating, favorites } => render(list_entries(
            state,
            FilterDto {
                search_text: search,
                genre,
                min_rating,
                favorites_only: favorites,
            },
        )?),
        Commands::Genres => render(list_genres(state)?),
        Commands::Show { id } => match get_entry(state, &id)? {
            Some(entry) => render(entry),
            None => Err(format!("Catalog entry '{}' not found", id)),
        },
        Commands::Create { title, thumbnail, description, genres, rating, release_date } => {
            render(create_entry(
                state,
                CreateEntryDto {
                    title,
                    thumbnail_url: thumbnail,
                    description,
                    genres: non_empty(genres),
                    rating,
                    release_date,
                },
            )?)
        }
        Commands::Update {
            id,
            title,
            thumbnail,
            description,
            genres,
            rating,
            release_date,
            favorite,
        } => render(update_entry(
            state,
            &id,
            UpdateEntryDto {
                title,
                description,
                genres: non_empty(genres),
                thumbnail_url: thumbnail,
                rating,
                release_date,
                is_favorite: favorite,
            },
        )?),
        Commands::Delete { id } => {
            let deleted = delete_entry(state, &id)?;
            render(serde_json::json!({ "deleted": deleted }))
        }
        Commands::Favorite { id } => render(toggle_favorite(state, &id)?),
        Commands::Theme { value } => match value.as_deref() {
            None => render(get_theme(state)?),
            Some("toggle") => render(toggle_theme(state)?),
            Some(theme) => render(set_theme(state, theme)?),
        },
        Commands::Login { name } => render(login(state, &name)?),
        Commands::Logout => render(logout(state)?),
        Commands::Whoami => render(current_user(state)?),
    }
}

fn non_empty(genres: Vec<String>) -> Option<Vec<String>> {
    if genres.is_empty() {
        None
    } else {
        Some(genres)
    }
}

fn render<T: Serialize>(value: T) -> Result<String, String> {
    serde_json::to_string_pretty(&value).map_err(|e| e.to_string())
}
