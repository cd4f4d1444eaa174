use serde::{
    Deserialize,
    Serialize,
};
use teambattle_data::PokemonData;
use uuid::Uuid;

/// A single Pokémon as it enters a battle.
///
/// Combatants are static snapshots of stored records. The battle engine never mutates them; health
/// during a battle is tracked separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: Uuid,
    pub name: String,
    /// Type name, for display.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Type ID, used for effectiveness lookups.
    pub type_id: Uuid,
    #[serde(default)]
    pub image: Option<String>,
    pub power: u32,
    /// Base life, which is both the starting and maximum health.
    pub life: u32,
}

impl Combatant {
    /// Creates a combatant from a stored Pokémon and the name of its type.
    pub fn from_data(data: &PokemonData, type_name: String) -> Self {
        Self {
            id: data.id,
            name: data.name.clone(),
            type_name,
            type_id: data.type_id,
            image: data.image.clone(),
            power: data.power,
            life: data.life,
        }
    }
}
