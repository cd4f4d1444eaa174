mod client;
mod direct;

pub use client::{
    TeamBattleServiceClient,
    team_battle_service_client_over_direct_service,
};
pub use direct::DirectTeamBattleServiceClient;
