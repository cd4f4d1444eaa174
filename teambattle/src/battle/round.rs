use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Combatant;

/// A single engagement between the active Pokémon of each team.
///
/// Both attacks in a round are applied simultaneously: `life1_after` is reduced by `damage2`, and
/// `life2_after` is reduced by `damage1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRound {
    /// Round number, starting at 1.
    pub round: usize,
    /// Active Pokémon of the first team.
    pub pokemon1: Combatant,
    /// Active Pokémon of the second team.
    pub pokemon2: Combatant,
    pub life1_before: u32,
    pub life2_before: u32,
    pub life1_after: u32,
    pub life2_after: u32,
    /// Damage dealt by the first team's Pokémon.
    pub damage1: u32,
    /// Damage dealt by the second team's Pokémon.
    pub damage2: u32,
    /// Effectiveness factor applied to the first team's attack.
    pub type_factor1: f32,
    /// Effectiveness factor applied to the second team's attack.
    pub type_factor2: f32,
}

/// Informal outcome of a single round, for display.
///
/// This has no bearing on the battle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum RoundOutcome {
    #[string = "pokemon1"]
    Pokemon1,
    #[string = "pokemon2"]
    Pokemon2,
    #[string = "draw"]
    Draw,
}

impl BattleRound {
    /// Whether the first team's Pokémon was defeated this round.
    pub fn pokemon1_defeated(&self) -> bool {
        self.life1_after == 0
    }

    /// Whether the second team's Pokémon was defeated this round.
    pub fn pokemon2_defeated(&self) -> bool {
        self.life2_after == 0
    }

    /// The informal outcome of the round.
    ///
    /// A defeat decides the round, and a mutual defeat is a draw. If neither Pokémon was defeated,
    /// the one that dealt more damage takes the round.
    pub fn outcome(&self) -> RoundOutcome {
        match (self.pokemon1_defeated(), self.pokemon2_defeated()) {
            (true, true) => RoundOutcome::Draw,
            (true, false) => RoundOutcome::Pokemon2,
            (false, true) => RoundOutcome::Pokemon1,
            (false, false) => match self.damage1.cmp(&self.damage2) {
                std::cmp::Ordering::Greater => RoundOutcome::Pokemon1,
                std::cmp::Ordering::Less => RoundOutcome::Pokemon2,
                std::cmp::Ordering::Equal => RoundOutcome::Draw,
            },
        }
    }
}
