use serde::{
    Deserialize,
    Serialize,
};

fn default_team_size() -> usize {
    6
}

fn default_min_stat() -> u32 {
    10
}

fn default_max_stat() -> u32 {
    100
}

/// Options for configuring how [`TeamBattleService`][`crate::TeamBattleService`] validates
/// rosters and teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBattleServiceOptions {
    /// Exact number of Pokémon on a team.
    #[serde(default = "default_team_size")]
    pub team_size: usize,
    /// Minimum power and life of a Pokémon.
    #[serde(default = "default_min_stat")]
    pub min_stat: u32,
    /// Maximum power and life of a Pokémon.
    #[serde(default = "default_max_stat")]
    pub max_stat: u32,
}

impl Default for TeamBattleServiceOptions {
    fn default() -> Self {
        Self {
            team_size: default_team_size(),
            min_stat: default_min_stat(),
            max_stat: default_max_stat(),
        }
    }
}

impl TeamBattleServiceOptions {
    /// Checks if a power or life value is within the allowed range.
    pub fn stat_in_range(&self, value: u32) -> bool {
        (self.min_stat..=self.max_stat).contains(&value)
    }
}
