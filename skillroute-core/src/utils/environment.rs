use crate::utils::{DefaultRandom, Quota, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
/// An environment is created per solve call and never shared between requests.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, quota: Option<Arc<dyn Quota>>, logger: InfoLogger) -> Self {
        Self { random, quota, logger }
    }

    /// Creates an instance of `Environment` with seeded random and silent logger.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_with_seed(seed)), None, Arc::new(|_| {}))
    }

    /// Returns true if the quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), None, Arc::new(|msg| println!("{msg}")))
    }
}
