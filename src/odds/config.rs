//! Configuration options for the odds engine.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::eval::GameType;

/// Configuration for an odds calculation.
///
/// # Example
/// ```
/// use holdem_odds::odds::OddsConfig;
///
/// let config = OddsConfig::default().with_threads(2);
/// assert!(config.parallel);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OddsConfig {
    /// Game variant.
    pub game: GameType,

    /// Enumerate outs and expand pending draws on the rayon pool.
    ///
    /// The claim walk itself is always sequential, so results do not
    /// depend on this setting.
    pub parallel: bool,

    /// Number of threads for a dedicated pool.
    ///
    /// `None` uses rayon's global pool. Ignored when `parallel` is off.
    pub num_threads: Option<usize>,
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            game: GameType::TexasHoldem,
            parallel: true,
            num_threads: None,
        }
    }
}

impl OddsConfig {
    /// Create a new OddsConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-threaded configuration.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Builder method: set whether to run in parallel.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set the game variant.
    pub fn with_game(mut self, game: GameType) -> Self {
        self.game = game;
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build the dedicated thread pool, if one is requested.
    pub(crate) fn thread_pool(&self) -> Result<Option<rayon::ThreadPool>, ConfigError> {
        match self.num_threads {
            Some(threads) if self.parallel => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map(Some)
                .map_err(|e| ConfigError::ThreadPool(e.to_string())),
            _ => Ok(None),
        }
    }
}
