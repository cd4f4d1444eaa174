use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use ahash::{
    HashMap,
    HashSet,
};
use teambattle::{
    EffectivenessResolver,
    LookupError,
};
use uuid::Uuid;

/// An [`EffectivenessResolver`] for tests.
///
/// Pairings resolve to a fixed factor unless overridden. Individual pairings can be made to fail.
/// Every call is counted.
pub struct TestResolver {
    default_factor: f32,
    factors: HashMap<(Uuid, Uuid), f32>,
    failing: HashSet<(Uuid, Uuid)>,
    calls: AtomicUsize,
}

impl Default for TestResolver {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TestResolver {
    /// Creates a resolver where every pairing resolves to the given factor.
    pub fn new(default_factor: f32) -> Self {
        Self {
            default_factor,
            factors: HashMap::default(),
            failing: HashSet::default(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Overrides the factor for a pairing.
    pub fn with_factor(mut self, attacker: Uuid, defender: Uuid, factor: f32) -> Self {
        self.factors.insert((attacker, defender), factor);
        self
    }

    /// Makes lookups for a pairing fail.
    pub fn with_failure(mut self, attacker: Uuid, defender: Uuid) -> Self {
        self.failing.insert((attacker, defender));
        self
    }

    /// Number of lookups made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EffectivenessResolver for TestResolver {
    fn factor(&self, attacker: &Uuid, defender: &Uuid) -> Result<f32, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&(*attacker, *defender)) {
            return Err(LookupError::Unavailable(anyhow::Error::msg(
                "effectiveness source is down",
            )));
        }
        Ok(self
            .factors
            .get(&(*attacker, *defender))
            .cloned()
            .unwrap_or(self.default_factor))
    }
}
