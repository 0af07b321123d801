//! Thread-safe configuration loading with optional background reload.
//!
//! `Config` wraps the `config` crate behind a builder. When watching is
//! enabled the source file is monitored with `notify` and reloaded in a
//! background thread, so long-running processes pick up edits without a
//! restart.

use config::{Config as RawConfig, File};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, mpsc};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load or parse configuration file")]
    Load(#[from] config::ConfigError),

    #[error("Failed to initialize file watcher")]
    Watch(#[from] notify::Error),

    #[error("Configuration lock was poisoned, indicating a panic in another thread")]
    LockPoisoned,
}

#[derive(Debug)]
pub struct Config {
    // Reads are concurrent; the reload thread takes the write side.
    inner: Arc<RwLock<RawConfig>>,
    // Dropping the watcher stops the watch thread with it.
    _watcher: Option<RecommendedWatcher>,
}

impl Config {
    pub fn builder<P: AsRef<Path>>(path: P) -> ConfigBuilder {
        ConfigBuilder::new(path.as_ref().to_path_buf())
    }

    #[cfg(test)]
    pub fn builder_test() -> test_utils::TestConfigBuilder {
        test_utils::TestConfigBuilder::new()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, ConfigError> {
        let guard = self.inner.read().map_err(|_| ConfigError::LockPoisoned)?;
        guard.get(key).map_err(ConfigError::from)
    }
}

pub struct ConfigBuilder {
    path: PathBuf,
    watch: bool,
    watch_interval: Duration,
}

impl ConfigBuilder {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            watch: false,
            watch_interval: Duration::from_secs(2),
        }
    }

    pub fn watch(mut self) -> Self {
        self.watch = true;
        self
    }

    pub fn watch_interval(mut self, interval: Duration) -> Self {
        self.watch_interval = interval;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let raw_config = Self::read_file(&self.path)?;
        let config_arc = Arc::new(RwLock::new(raw_config));

        let watcher = if self.watch {
            Some(self.spawn_reloader(Arc::clone(&config_arc))?)
        } else {
            None
        };

        Ok(Config {
            inner: config_arc,
            _watcher: watcher,
        })
    }

    fn spawn_reloader(&self, config: Arc<RwLock<RawConfig>>) -> Result<RecommendedWatcher, ConfigError> {
        let path = self.path.clone();
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            tx,
            notify::Config::default().with_poll_interval(self.watch_interval),
        )?;
        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        thread::spawn(move || {
            tracing::info!("Watching configuration file for changes: {}", path.to_string_lossy());

            while let Ok(event_result) = rx.recv() {
                match event_result {
                    Ok(Event {
                        kind: notify::EventKind::Modify(_),
                        ..
                    }) => match Self::read_file(&path) {
                        Ok(new_config) => {
                            if let Ok(mut guard) = config.write() {
                                *guard = new_config;
                                tracing::info!("Configuration reloaded successfully.");
                            } else {
                                tracing::error!("Failed to acquire write lock for reloading config.");
                            }
                        },
                        Err(e) => {
                            tracing::error!("Failed to reload configuration file: {}", e);
                        },
                    },
                    Err(e) => tracing::error!("File watcher error: {:?}", e),
                    _ => {
                        // Access/open/etc. events carry no new content.
                    },
                }
            }
        });

        Ok(watcher)
    }

    fn read_file(path: &Path) -> Result<RawConfig, config::ConfigError> {
        RawConfig::builder()
            .add_source(File::from(path).required(true))
            .build()
    }
}
