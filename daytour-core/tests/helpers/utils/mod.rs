use crate::utils::{DefaultRandom, InfoLogger, Random};
use std::sync::{Arc, Mutex};

pub mod random;
pub use self::random::FakeRandom;

pub fn create_test_random() -> Arc<dyn Random + Send + Sync> {
    Arc::new(DefaultRandom::new_with_seed(Some(123)))
}

/// Creates a logger which remembers every message it receives.
pub fn create_buffer_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let buffer = Arc::new(Mutex::new(Vec::default()));
    let capture = buffer.clone();
    let logger: InfoLogger = Arc::new(move |message: &str| capture.lock().unwrap().push(message.to_string()));

    (logger, buffer)
}
