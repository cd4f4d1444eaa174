use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    BattleRound,
    Combatant,
    RoundOutcome,
    TeamSummary,
};

/// The winner of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum Winner {
    #[string = "Team 1"]
    Team1,
    #[string = "Team 2"]
    Team2,
    #[string = "Draw"]
    Draw,
}

impl Winner {
    /// Determines the winner from whether each team has a Pokémon left standing.
    ///
    /// Exactly one team with a survivor wins. Otherwise, the battle is a draw.
    pub fn from_survivors(team1: bool, team2: bool) -> Self {
        match (team1, team2) {
            (true, false) => Self::Team1,
            (false, true) => Self::Team2,
            _ => Self::Draw,
        }
    }
}

/// Number of rounds taken by each side, according to [`BattleRound::outcome`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTally {
    pub team1: usize,
    pub team2: usize,
    pub draws: usize,
}

/// The complete record of a finished battle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleLog {
    pub team1: TeamSummary,
    pub team2: TeamSummary,
    /// All rounds, in the order they were fought.
    pub rounds: Vec<BattleRound>,
    pub winner: Winner,
    /// Pokémon of the first team still standing at the end of the battle.
    pub team1_remaining: Vec<Combatant>,
    /// Pokémon of the second team still standing at the end of the battle.
    pub team2_remaining: Vec<Combatant>,
}

impl BattleLog {
    /// Tallies the informal outcome of every round.
    pub fn round_tally(&self) -> RoundTally {
        let mut tally = RoundTally::default();
        for round in &self.rounds {
            match round.outcome() {
                RoundOutcome::Pokemon1 => tally.team1 += 1,
                RoundOutcome::Pokemon2 => tally.team2 += 1,
                RoundOutcome::Draw => tally.draws += 1,
            }
        }
        tally
    }
}
