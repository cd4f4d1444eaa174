use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use teambattle::BattleLog;
use teambattle_data::PokemonType;
use teambattle_service::{
    BattleRequest,
    PokemonEntry,
    PokemonUpdate,
    TeamBattleService,
    TeamDeletion,
    TeamEntry,
    TeamInput,
};
use uuid::Uuid;

use crate::DirectTeamBattleServiceClient;

/// Client wrapper for [`teambattle_service::TeamBattleService`].
#[async_trait]
pub trait TeamBattleServiceClient {
    /// Lists the type catalogue.
    async fn types(&self) -> Result<Vec<PokemonType>>;
    /// Lists all Pokémon on the roster.
    async fn pokemon(&self) -> Result<Vec<PokemonEntry>>;
    /// Looks up a single Pokémon.
    async fn pokemon_by_id(&self, id: Uuid) -> Result<PokemonEntry>;
    /// Edits a Pokémon on the roster.
    async fn update_pokemon(&self, id: Uuid, update: PokemonUpdate) -> Result<PokemonEntry>;
    /// Lists all teams.
    async fn teams(&self) -> Result<Vec<TeamEntry>>;
    /// Looks up a single team.
    async fn team(&self, id: Uuid) -> Result<TeamEntry>;
    /// Creates a new team.
    async fn create_team(&self, input: TeamInput) -> Result<TeamEntry>;
    /// Replaces the name and members of a team.
    async fn update_team(&self, id: Uuid, input: TeamInput) -> Result<TeamEntry>;
    /// Deletes a team.
    async fn delete_team(&self, id: Uuid) -> Result<TeamDeletion>;
    /// Runs a battle between two teams.
    async fn battle(&self, request: BattleRequest) -> Result<BattleLog>;
}

/// Creates a new client around a service object.
pub fn team_battle_service_client_over_direct_service<'d>(
    service: Arc<TeamBattleService<'d>>,
) -> Box<dyn TeamBattleServiceClient + 'd> {
    Box::new(DirectTeamBattleServiceClient::new(service))
}
