//! HTTP server wiring for the hotel reservation store.
//!
//! Configuration loading and router assembly live here so the binary stays a
//! thin shell and both can be tested without binding a socket.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use hotel_core::{seed, store::HotelStore};
use hotel_store_sqlite::SqliteStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `HOTEL_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:    String,
  pub port:    u16,
  /// SQLite file; `HOTEL_DB_PATH` overrides it.
  pub db_path: PathBuf,
  /// Load the seed dataset on startup.
  pub seed:    bool,
}

/// Layer `path` (optional) under `HOTEL_*` environment variables on top of
/// built-in defaults.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8080)?
    .set_default("db_path", "hotel.db")?
    .set_default("seed", true)?
    .add_source(config::File::from(path.to_path_buf()).required(false))
    .add_source(config::Environment::with_prefix("HOTEL"))
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Startup ──────────────────────────────────────────────────────────────────

/// Open the store (creating the schema if needed) and, when configured, load
/// the seed dataset.
pub async fn open_store(cfg: &ServerConfig) -> anyhow::Result<SqliteStore> {
  use anyhow::Context as _;

  let db_path = expand_tilde(&cfg.db_path);
  let store = SqliteStore::open(&db_path)
    .await
    .with_context(|| format!("failed to open store at {db_path:?}"))?;

  if cfg.seed {
    let summary = seed::load(&store).await.context("failed to load seed data")?;
    tracing::info!(
      inserted = summary.inserted,
      already_present = summary.already_present,
      "seed data loaded"
    );
  }

  Ok(store)
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API nested under `/api`, with request tracing.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: HotelStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .nest("/api", hotel_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{body::Body, http::{Request, StatusCode}};
  use tower::ServiceExt as _;

  fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hotel-server-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn file_values_override_defaults() {
    let dir = temp_dir("config");
    let path = dir.join("config.toml");
    std::fs::write(&path, "port = 9090\ndb_path = \"/tmp/custom.db\"\nseed = false\n").unwrap();

    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.port, 9090);
    assert_eq!(cfg.db_path, PathBuf::from("/tmp/custom.db"));
    assert!(!cfg.seed);
    assert_eq!(cfg.host, "127.0.0.1");

    std::fs::remove_dir_all(&dir).unwrap();
  }

  #[test]
  fn tilde_expands_against_home() {
    let plain = PathBuf::from("/var/lib/hotel.db");
    assert_eq!(expand_tilde(&plain), plain);

    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/hotel.db")),
        PathBuf::from(home).join("hotel.db")
      );
    }
  }

  #[tokio::test]
  async fn open_store_seeds_once() {
    let dir = temp_dir("seed");
    let cfg = ServerConfig {
      host:    "127.0.0.1".into(),
      port:    0,
      db_path: dir.join("hotel.db"),
      seed:    true,
    };

    let first = open_store(&cfg).await.unwrap();
    let rooms = first.get_all_rooms().await.unwrap();
    assert_eq!(rooms.len(), seed::hotel_rooms().len());
    drop(first);

    let second = open_store(&cfg).await.unwrap();
    assert_eq!(second.get_all_rooms().await.unwrap(), rooms);
    assert_eq!(
      second.get_booking_history().await.unwrap().len(),
      seed::reservations().len()
    );

    std::fs::remove_dir_all(&dir).unwrap();
  }

  #[tokio::test]
  async fn api_is_nested_under_prefix() {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let app = router(store);

    let resp = app
      .clone()
      .oneshot(Request::builder().uri("/api/chains").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
      .oneshot(Request::builder().uri("/chains").body(Body::empty()).unwrap())
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }
}
