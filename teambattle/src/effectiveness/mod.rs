mod factor_cache;
mod resolver;

pub use factor_cache::FactorCache;
pub use resolver::{
    EffectivenessResolver,
    LookupError,
    NEUTRAL_FACTOR,
    NeutralResolver,
    validate_factor,
};
