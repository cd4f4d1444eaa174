use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

/// Data about a single stored Pokémon on the roster.
///
/// Power and life are validated into a fixed range by the service layer before they are ever
/// written to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonData {
    /// Unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Type, as an entry in the type catalogue.
    #[serde(rename = "type")]
    pub type_id: Uuid,
    /// Image reference, if any.
    #[serde(default)]
    pub image: Option<String>,
    /// Attack strength.
    pub power: u32,
    /// Starting and maximum health.
    pub life: u32,
}
