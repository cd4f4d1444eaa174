use teambattle_data::TypeChart;
use thiserror::Error;
use uuid::Uuid;

/// The factor used whenever an effectiveness lookup fails.
pub const NEUTRAL_FACTOR: f32 = 1.0;

/// An error resulting from an effectiveness lookup.
///
/// Lookup errors never abort a battle. The engine substitutes [`NEUTRAL_FACTOR`] for the affected
/// attack and moves on.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No factor is recorded for the pairing.
    #[error("no effectiveness factor for {attacker} against {defender}")]
    UnknownPairing { attacker: Uuid, defender: Uuid },
    /// The source of effectiveness data failed.
    #[error("effectiveness lookup is unavailable")]
    Unavailable(#[source] anyhow::Error),
    /// The source returned a factor that cannot be used for damage.
    #[error("invalid effectiveness factor {0}")]
    InvalidFactor(f32),
}

/// Checks that an effectiveness factor is usable for damage calculation.
///
/// Factors must be finite and non-negative. Zero is a legitimate factor (no effect).
pub fn validate_factor(factor: f32) -> Result<f32, LookupError> {
    if factor.is_finite() && factor >= 0.0 {
        Ok(factor)
    } else {
        Err(LookupError::InvalidFactor(factor))
    }
}

/// Resolves the damage multiplier of one type attacking another.
///
/// Implementations should be side-effect free with respect to the battle: the engine may call
/// them in any order, and may skip calls for pairings it has already resolved.
pub trait EffectivenessResolver {
    /// The effectiveness factor of the attacking type against the defending type.
    fn factor(&self, attacker: &Uuid, defender: &Uuid) -> Result<f32, LookupError>;
}

impl<F> EffectivenessResolver for F
where
    F: Fn(&Uuid, &Uuid) -> Result<f32, LookupError>,
{
    fn factor(&self, attacker: &Uuid, defender: &Uuid) -> Result<f32, LookupError> {
        self(attacker, defender)
    }
}

impl EffectivenessResolver for TypeChart {
    fn factor(&self, attacker: &Uuid, defender: &Uuid) -> Result<f32, LookupError> {
        TypeChart::factor(self, attacker, defender).ok_or(LookupError::UnknownPairing {
            attacker: *attacker,
            defender: *defender,
        })
    }
}

/// An [`EffectivenessResolver`] for which every pairing is neutral.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeutralResolver;

impl EffectivenessResolver for NeutralResolver {
    fn factor(&self, _: &Uuid, _: &Uuid) -> Result<f32, LookupError> {
        Ok(NEUTRAL_FACTOR)
    }
}
