use anyhow::Result;
use uuid::Uuid;

use crate::{
    PokemonData,
    PokemonType,
    TeamData,
};

/// Collection of tables for all roster data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
///
/// Lookups by ID return `Ok(None)` when the record does not exist. An `Err` means the underlying
/// source failed.
pub trait DataStore: Send + Sync {
    /// Gets the full type catalogue.
    fn all_types(&self) -> Result<Vec<PokemonType>>;
    /// Gets a type by ID.
    fn get_type(&self, id: &Uuid) -> Result<Option<PokemonType>>;
    /// Gets a type by name, ignoring case.
    fn get_type_by_name(&self, name: &str) -> Result<Option<PokemonType>>;
    /// Gets the effectiveness factor of the attacking type against the defending type.
    fn get_type_factor(&self, attacker: &Uuid, defender: &Uuid) -> Result<Option<f32>>;

    /// Gets all Pokémon on the roster.
    fn all_pokemon(&self) -> Result<Vec<PokemonData>>;
    /// Gets a Pokémon by ID.
    fn get_pokemon(&self, id: &Uuid) -> Result<Option<PokemonData>>;

    /// Gets all teams.
    fn all_teams(&self) -> Result<Vec<TeamData>>;
    /// Gets a team by ID.
    fn get_team(&self, id: &Uuid) -> Result<Option<TeamData>>;
}

/// An extension of [`DataStore`] for writing roster data.
///
/// Implementations are not expected to validate records; that is the job of the caller.
pub trait MutableDataStore: DataStore {
    /// Replaces a Pokémon, returning the stored record, or `None` if it does not exist.
    fn update_pokemon(&self, pokemon: PokemonData) -> Result<Option<PokemonData>>;

    /// Inserts a new team, generating its ID.
    fn insert_team(&self, name: String, pokemon_ids: Vec<Uuid>) -> Result<TeamData>;
    /// Replaces the name and members of a team, or returns `None` if it does not exist.
    fn update_team(
        &self,
        id: &Uuid,
        name: String,
        pokemon_ids: Vec<Uuid>,
    ) -> Result<Option<TeamData>>;
    /// Deletes a team, returning whether it existed.
    fn delete_team(&self, id: &Uuid) -> Result<bool>;
}
