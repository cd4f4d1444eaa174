use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

use crate::Combatant;

/// A team as it enters a battle.
///
/// Members engage in order: the first member fights until defeated, then the second, and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleTeam {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<Combatant>,
}

impl BattleTeam {
    /// Sum of the base power of all members.
    pub fn total_power(&self) -> u32 {
        self.members.iter().map(|member| member.power).sum()
    }

    /// Generates the summary of the team reported in the battle log.
    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            id: self.id,
            name: self.name.clone(),
            pokemon_ids: self.members.iter().map(|member| member.id).collect(),
            total_power: self.total_power(),
        }
    }
}

/// Summary of a team that participated in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub id: Uuid,
    pub name: String,
    /// Members, in battle order.
    pub pokemon_ids: Vec<Uuid>,
    pub total_power: u32,
}
