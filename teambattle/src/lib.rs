extern crate alloc;

pub mod battle;
pub mod effectiveness;
pub mod teams;

pub use battle::{
    BattleLog,
    BattleRound,
    MAX_ROUNDS,
    RoundOutcome,
    RoundTally,
    Winner,
    simulate,
};
pub use effectiveness::{
    EffectivenessResolver,
    FactorCache,
    LookupError,
    NEUTRAL_FACTOR,
    NeutralResolver,
    validate_factor,
};
pub use teams::{
    BattleTeam,
    Combatant,
    TeamSummary,
};
