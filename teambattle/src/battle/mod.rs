mod battle_log;
mod round;
mod simulate;

pub use battle_log::{
    BattleLog,
    RoundTally,
    Winner,
};
pub use round::{
    BattleRound,
    RoundOutcome,
};
pub use simulate::{
    MAX_ROUNDS,
    simulate,
};
