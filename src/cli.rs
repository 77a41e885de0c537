// src/cli.rs
//
// Command-line surface. Every subcommand maps onto one application command.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::StorageBackend;

#[derive(Parser, Debug)]
#[command(name = "gamehub", version, about = "Browse and edit the GameHub catalog")]
pub struct Cli {
    /// Directory holding persisted data
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage backend
    #[arg(long, global = true, value_enum)]
    pub storage: Option<StorageBackend>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List entries, best rated first
    List {
        /// Case-insensitive text matched against title and description
        #[arg(long)]
        search: Option<String>,

        /// Exact genre tag
        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        min_rating: Option<f64>,

        /// Only favorites
        #[arg(long)]
        favorites: bool,
    },

    /// List genre facets
    Genres,

    /// Show one entry
    Show { id: String },

    /// Add an entry
    Create {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        thumbnail: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Repeat for several genres
        #[arg(long = "genre")]
        genres: Vec<String>,

        #[arg(long)]
        rating: Option<f64>,

        #[arg(long)]
        release_date: Option<String>,
    },

    /// Change fields of an entry
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        thumbnail: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Replaces all genres; repeat for several
        #[arg(long = "genre")]
        genres: Vec<String>,

        #[arg(long)]
        rating: Option<f64>,

        #[arg(long)]
        release_date: Option<String>,

        #[arg(long)]
        favorite: Option<bool>,
    },

    /// Remove an entry
    Delete { id: String },

    /// Flip the favorite flag of an entry
    Favorite { id: String },

    /// Show the theme, or set it with `light`, `dark` or `toggle`
    Theme { value: Option<String> },

    /// Sign in with any name
    Login { name: String },

    Logout,

    /// Show the signed-in user
    Whoami,
}
