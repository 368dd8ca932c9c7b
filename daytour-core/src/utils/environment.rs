use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which takes a string message as input.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// An info logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an instance of `Environment` with random generator initialized by given seed.
    pub fn new_with_seed(seed: Option<u64>) -> Self {
        Self::new(Arc::new(DefaultRandom::new_with_seed(seed)), Arc::new(|msg: &str| println!("{msg}")))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new_with_seed(None)
    }
}
