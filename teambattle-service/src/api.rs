use std::time::SystemTime;

use serde::{
    Deserialize,
    Serialize,
};
use teambattle::Combatant;
use uuid::Uuid;

/// A Pokémon on the roster, with the name of its type.
///
/// This is the same shape a Pokémon has when it enters battle.
pub type PokemonEntry = Combatant;

/// Request to edit a Pokémon on the roster.
///
/// Fields are optional so that missing fields can be reported back to the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonUpdate {
    #[serde(default)]
    pub name: Option<String>,
    /// New type of the Pokémon. The type is left unchanged if not given.
    #[serde(default)]
    pub type_id: Option<Uuid>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub life: Option<u32>,
    /// New image of the Pokémon. A missing or empty image clears it.
    #[serde(default)]
    pub image: Option<String>,
}

/// Request to create or replace a team.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInput {
    #[serde(default)]
    pub name: Option<String>,
    /// Members, in battle order.
    #[serde(default)]
    pub pokemon_ids: Option<Vec<Uuid>>,
}

/// A team with the details of its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntry {
    pub id: Uuid,
    pub name: String,
    /// Members, in battle order, as stored.
    pub pokemon_ids: Vec<Uuid>,
    /// Sum of the power of all members that exist.
    pub total_power: u32,
    pub created_at: SystemTime,
    /// Members that exist on the roster, in battle order.
    pub pokemon: Vec<PokemonEntry>,
}

/// Confirmation of a deleted team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDeletion {
    pub message: String,
    pub deleted_id: Uuid,
}

/// Request to battle two teams.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRequest {
    #[serde(default)]
    pub team1_id: Option<Uuid>,
    #[serde(default)]
    pub team2_id: Option<Uuid>,
}

impl BattleRequest {
    pub fn new(team1_id: Uuid, team2_id: Uuid) -> Self {
        Self {
            team1_id: Some(team1_id),
            team2_id: Some(team2_id),
        }
    }
}
