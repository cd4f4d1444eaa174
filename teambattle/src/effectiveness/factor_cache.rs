use ahash::HashMap;
use uuid::Uuid;

use crate::{
    EffectivenessResolver,
    NEUTRAL_FACTOR,
    validate_factor,
};

/// Memoizes effectiveness lookups for the lifetime of a single battle.
///
/// Only successful lookups are remembered. A failed lookup resolves to [`NEUTRAL_FACTOR`] for that
/// call, and the pairing is looked up again the next time it is needed.
pub struct FactorCache<'r> {
    resolver: &'r dyn EffectivenessResolver,
    factors: HashMap<(Uuid, Uuid), f32>,
}

impl<'r> FactorCache<'r> {
    pub fn new(resolver: &'r dyn EffectivenessResolver) -> Self {
        Self {
            resolver,
            factors: HashMap::default(),
        }
    }

    /// The effectiveness factor of the attacking type against the defending type.
    ///
    /// Never fails.
    pub fn factor(&mut self, attacker: &Uuid, defender: &Uuid) -> f32 {
        if let Some(factor) = self.factors.get(&(*attacker, *defender)) {
            return *factor;
        }
        match self
            .resolver
            .factor(attacker, defender)
            .and_then(validate_factor)
        {
            Ok(factor) => {
                self.factors.insert((*attacker, *defender), factor);
                factor
            }
            Err(_) => NEUTRAL_FACTOR,
        }
    }
}
