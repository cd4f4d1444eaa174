mod combatant;
mod team;

pub use combatant::Combatant;
pub use team::{
    BattleTeam,
    TeamSummary,
};
