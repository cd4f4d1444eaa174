use std::time::SystemTime;

use serde::{
    Deserialize,
    Serialize,
};
use uuid::Uuid;

fn default_created_at() -> SystemTime {
    SystemTime::UNIX_EPOCH
}

/// A stored team, made up of an ordered list of Pokémon.
///
/// Order is significant: it is the order in which members engage in battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamData {
    /// Unique identifier.
    pub id: Uuid,
    /// Team name.
    pub name: String,
    /// Members of the team, in battle order.
    pub pokemon_ids: Vec<Uuid>,
    /// When the team was created.
    #[serde(default = "default_created_at")]
    pub created_at: SystemTime,
}
