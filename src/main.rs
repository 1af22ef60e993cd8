mod cli;
mod config;
mod db;
mod models;
mod tracker;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use db::{KvStore, MemoryStore, SqliteStore};
use tracker::{DailyTaskStore, KeyLayout};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    let kv: Box<dyn KvStore> = match open_sqlite() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("{:#}; falling back to in-memory storage", e);
            eprintln!("Warning: data will not be saved this session ({})", e);
            Box::new(MemoryStore::new())
        }
    };
    let store = DailyTaskStore::new(kv, KeyLayout::new(config.tracker.key_prefix.clone()));

    match cli.command {
        Some(Commands::Toggle { task, date }) => {
            handlers::handle_toggle(&store, &config, &task, date.as_deref())?;
        }
        Some(Commands::Fast { date, off }) => {
            handlers::handle_fast(&store, &config, date.as_deref(), off)?;
        }
        Some(Commands::Today { date }) => {
            handlers::handle_today(&store, date.as_deref())?;
        }
        Some(Commands::Streaks) => {
            handlers::handle_streaks(&store, &config)?;
        }
        Some(Commands::Heatmap) => {
            handlers::handle_heatmap(&store)?;
        }
        Some(Commands::Journal { text, date }) => {
            handlers::handle_journal(&store, text.as_deref(), date.as_deref())?;
        }
        Some(Commands::Tasbih { action }) => {
            handlers::handle_tasbih(&store, &config, &action)?;
        }
        Some(Commands::Share { date }) => {
            handlers::handle_share(&store, &config, date.as_deref())?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(&store, config)?;
        }
    }

    Ok(())
}

fn open_sqlite() -> Result<SqliteStore> {
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    run_migrations(&conn)?;

    Ok(SqliteStore::new(conn))
}
