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

use crate::TeamBattleServiceClient;

/// Implementation of [`TeamBattleServiceClient`] that calls the
/// [`teambattle_service::TeamBattleService`] directly.
pub struct DirectTeamBattleServiceClient<'d> {
    service: Arc<TeamBattleService<'d>>,
}

impl<'d> DirectTeamBattleServiceClient<'d> {
    /// Creates a new client around a service object.
    pub fn new(service: Arc<TeamBattleService<'d>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<'d> TeamBattleServiceClient for DirectTeamBattleServiceClient<'d> {
    async fn types(&self) -> Result<Vec<PokemonType>> {
        self.service.types().await
    }

    async fn pokemon(&self) -> Result<Vec<PokemonEntry>> {
        self.service.pokemon().await
    }

    async fn pokemon_by_id(&self, id: Uuid) -> Result<PokemonEntry> {
        self.service.pokemon_by_id(id).await
    }

    async fn update_pokemon(&self, id: Uuid, update: PokemonUpdate) -> Result<PokemonEntry> {
        self.service.update_pokemon(id, update).await
    }

    async fn teams(&self) -> Result<Vec<TeamEntry>> {
        self.service.teams().await
    }

    async fn team(&self, id: Uuid) -> Result<TeamEntry> {
        self.service.team(id).await
    }

    async fn create_team(&self, input: TeamInput) -> Result<TeamEntry> {
        self.service.create_team(input).await
    }

    async fn update_team(&self, id: Uuid, input: TeamInput) -> Result<TeamEntry> {
        self.service.update_team(id, input).await
    }

    async fn delete_team(&self, id: Uuid) -> Result<TeamDeletion> {
        self.service.delete_team(id).await
    }

    async fn battle(&self, request: BattleRequest) -> Result<BattleLog> {
        self.service.battle(request).await
    }
}
