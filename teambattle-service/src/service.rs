use ahash::{
    HashMap,
    HashSet,
};
use anyhow::{
    Error,
    Result,
};
use teambattle::{
    BattleLog,
    BattleTeam,
    Combatant,
    simulate,
};
use teambattle_data::{
    MutableDataStore,
    PokemonData,
    PokemonType,
    TeamData,
};
use uuid::Uuid;

use crate::{
    BattleRequest,
    PokemonEntry,
    PokemonUpdate,
    StoreResolver,
    TeamBattleServiceOptions,
    TeamDeletion,
    TeamEntry,
    TeamInput,
    input_error,
    not_found_error,
};

const UNKNOWN_TYPE_NAME: &str = "Unknown";

/// Logs a failure of the underlying data store and attaches context for the caller.
fn store_error(action: &'static str) -> impl FnOnce(Error) -> Error {
    move |err| {
        log::error!("Failed to {action}: {err:#}");
        err.context(format!("failed to {action}"))
    }
}

/// Type names by type ID.
struct TypeNames(HashMap<Uuid, String>);

impl TypeNames {
    fn new(types: Vec<PokemonType>) -> Self {
        Self(types.into_iter().map(|t| (t.id, t.name)).collect())
    }

    fn entry(&self, pokemon: &PokemonData) -> PokemonEntry {
        let type_name = self
            .0
            .get(&pokemon.type_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_TYPE_NAME.to_owned());
        Combatant::from_data(pokemon, type_name)
    }
}

/// Service for managing a roster of Pokémon and teams, and running battles between teams on the
/// [`teambattle`] battle engine.
///
/// All input is validated here. The battle engine is only ever invoked with two distinct,
/// non-empty teams.
pub struct TeamBattleService<'d> {
    data: &'d dyn MutableDataStore,
    options: TeamBattleServiceOptions,
}

impl<'d> TeamBattleService<'d> {
    /// Creates a new service with default options.
    pub fn new(data: &'d dyn MutableDataStore) -> Self {
        Self::new_with_options(data, TeamBattleServiceOptions::default())
    }

    /// Creates a new service.
    pub fn new_with_options(
        data: &'d dyn MutableDataStore,
        options: TeamBattleServiceOptions,
    ) -> Self {
        Self { data, options }
    }

    fn type_names(&self) -> Result<TypeNames> {
        Ok(TypeNames::new(
            self.data.all_types().map_err(store_error("fetch types"))?,
        ))
    }

    /// Lists the type catalogue, ordered by name.
    pub async fn types(&self) -> Result<Vec<PokemonType>> {
        self.data.all_types().map_err(store_error("fetch types"))
    }

    /// Lists all Pokémon on the roster, ordered by name.
    pub async fn pokemon(&self) -> Result<Vec<PokemonEntry>> {
        let names = self.type_names()?;
        let pokemon = self
            .data
            .all_pokemon()
            .map_err(store_error("fetch Pokémon"))?;
        Ok(pokemon.iter().map(|pokemon| names.entry(pokemon)).collect())
    }

    /// Looks up a single Pokémon.
    pub async fn pokemon_by_id(&self, id: Uuid) -> Result<PokemonEntry> {
        let pokemon = self
            .data
            .get_pokemon(&id)
            .map_err(store_error("fetch Pokémon"))?
            .ok_or_else(|| not_found_error("Pokemon"))?;
        Ok(self.type_names()?.entry(&pokemon))
    }

    /// Edits a Pokémon on the roster.
    ///
    /// Name, power, and life are required. The type is only changed if a new one is given.
    pub async fn update_pokemon(&self, id: Uuid, update: PokemonUpdate) -> Result<PokemonEntry> {
        let name = update
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        let (name, power, life) = match (name, update.power, update.life) {
            (Some(name), Some(power), Some(life)) => (name.to_owned(), power, life),
            _ => return Err(input_error("Missing required fields: name, power, life")),
        };
        if !self.options.stat_in_range(power) || !self.options.stat_in_range(life) {
            return Err(input_error(format!(
                "Power and life must be between {} and {}",
                self.options.min_stat, self.options.max_stat
            )));
        }
        if let Some(type_id) = &update.type_id {
            if self
                .data
                .get_type(type_id)
                .map_err(store_error("fetch type"))?
                .is_none()
            {
                return Err(input_error("Invalid type ID provided"));
            }
        }

        let existing = self
            .data
            .get_pokemon(&id)
            .map_err(store_error("fetch Pokémon"))?
            .ok_or_else(|| not_found_error("Pokemon"))?;
        let pokemon = PokemonData {
            id,
            name,
            type_id: update.type_id.unwrap_or(existing.type_id),
            image: update.image.filter(|image| !image.is_empty()),
            power,
            life,
        };
        let pokemon = self
            .data
            .update_pokemon(pokemon)
            .map_err(store_error("update Pokémon"))?
            .ok_or_else(|| not_found_error("Pokemon"))?;
        log::info!("Updated Pokémon {} ({})", pokemon.id, pokemon.name);
        Ok(self.type_names()?.entry(&pokemon))
    }

    /// Lists all teams, strongest first.
    ///
    /// Teams are ordered by total power, then by name. Members that no longer exist on the roster
    /// are left out of the details.
    pub async fn teams(&self) -> Result<Vec<TeamEntry>> {
        let names = self.type_names()?;
        let pokemon = self
            .data
            .all_pokemon()
            .map_err(store_error("fetch Pokémon"))?
            .into_iter()
            .map(|pokemon| (pokemon.id, pokemon))
            .collect::<HashMap<_, _>>();
        let mut teams = self
            .data
            .all_teams()
            .map_err(store_error("fetch teams"))?
            .into_iter()
            .map(|team| Self::team_entry(team, |id| Ok(pokemon.get(id).cloned()), &names))
            .collect::<Result<Vec<_>>>()?;
        teams.sort_by(|a, b| {
            b.total_power
                .cmp(&a.total_power)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(teams)
    }

    /// Looks up a single team.
    pub async fn team(&self, id: Uuid) -> Result<TeamEntry> {
        let team = self
            .data
            .get_team(&id)
            .map_err(store_error("fetch team"))?
            .ok_or_else(|| not_found_error("Team"))?;
        self.stored_team_entry(team)
    }

    /// Creates a new team.
    pub async fn create_team(&self, input: TeamInput) -> Result<TeamEntry> {
        let (name, pokemon_ids) = self.validate_team(input)?;
        let team = self
            .data
            .insert_team(name, pokemon_ids)
            .map_err(store_error("create team"))?;
        log::info!("Created team {} ({})", team.id, team.name);
        self.stored_team_entry(team)
    }

    /// Replaces the name and members of a team.
    pub async fn update_team(&self, id: Uuid, input: TeamInput) -> Result<TeamEntry> {
        let (name, pokemon_ids) = self.validate_team(input)?;
        let team = self
            .data
            .update_team(&id, name, pokemon_ids)
            .map_err(store_error("update team"))?
            .ok_or_else(|| not_found_error("Team"))?;
        log::info!("Updated team {} ({})", team.id, team.name);
        self.stored_team_entry(team)
    }

    /// Deletes a team.
    pub async fn delete_team(&self, id: Uuid) -> Result<TeamDeletion> {
        if !self
            .data
            .delete_team(&id)
            .map_err(store_error("delete team"))?
        {
            return Err(not_found_error("Team"));
        }
        log::info!("Deleted team {id}");
        Ok(TeamDeletion {
            message: "Team deleted successfully".to_owned(),
            deleted_id: id,
        })
    }

    /// Runs a battle between two stored teams.
    ///
    /// Both teams are loaded from the roster as they are right now. Effectiveness factors that
    /// cannot be looked up are treated as neutral.
    pub async fn battle(&self, request: BattleRequest) -> Result<BattleLog> {
        let (team1_id, team2_id) = match (request.team1_id, request.team2_id) {
            (Some(team1_id), Some(team2_id)) => (team1_id, team2_id),
            _ => return Err(input_error("Missing required fields: team1_id, team2_id")),
        };
        if team1_id == team2_id {
            return Err(input_error("Teams cannot battle themselves"));
        }

        let names = self.type_names()?;
        let team1 = self.battle_team(&team1_id, "Team 1", &names)?;
        let team2 = self.battle_team(&team2_id, "Team 2", &names)?;

        log::info!(
            "Starting battle between {} ({} Pokémon) and {} ({} Pokémon)",
            team1.id,
            team1.members.len(),
            team2.id,
            team2.members.len(),
        );
        let battle_log = simulate(&team1, &team2, &StoreResolver::new(self.data));
        log::info!(
            "Battle between {} and {} finished after {} rounds: {}",
            team1.id,
            team2.id,
            battle_log.rounds.len(),
            battle_log.winner,
        );
        Ok(battle_log)
    }

    /// Loads a team for battle.
    ///
    /// Members are returned in battle order. A team that does not exist or that has no Pokémon on
    /// the roster cannot battle.
    fn battle_team(&self, id: &Uuid, label: &str, names: &TypeNames) -> Result<BattleTeam> {
        let team = self
            .data
            .get_team(id)
            .map_err(store_error("fetch team"))?
            .ok_or_else(|| not_found_error(label))?;
        let entry = Self::team_entry(team, |id| self.fetch_pokemon(id), names)?;
        if entry.pokemon.is_empty() {
            return Err(not_found_error(format!("Pokémon for {label}")));
        }
        Ok(BattleTeam {
            id: entry.id,
            name: entry.name,
            members: entry.pokemon,
        })
    }

    fn fetch_pokemon(&self, id: &Uuid) -> Result<Option<PokemonData>> {
        self.data
            .get_pokemon(id)
            .map_err(store_error("fetch Pokémon"))
    }

    fn stored_team_entry(&self, team: TeamData) -> Result<TeamEntry> {
        let names = self.type_names()?;
        Self::team_entry(team, |id| self.fetch_pokemon(id), &names)
    }

    fn team_entry<F>(team: TeamData, mut pokemon: F, names: &TypeNames) -> Result<TeamEntry>
    where
        F: FnMut(&Uuid) -> Result<Option<PokemonData>>,
    {
        let mut members = Vec::with_capacity(team.pokemon_ids.len());
        for id in &team.pokemon_ids {
            if let Some(member) = pokemon(id)? {
                members.push(names.entry(&member));
            }
        }
        Ok(TeamEntry {
            id: team.id,
            name: team.name,
            total_power: members.iter().map(|member| member.power).sum(),
            pokemon_ids: team.pokemon_ids,
            created_at: team.created_at,
            pokemon: members,
        })
    }

    /// Validates a team, returning its trimmed name and members.
    fn validate_team(&self, input: TeamInput) -> Result<(String, Vec<Uuid>)> {
        let (name, pokemon_ids) = match (input.name, input.pokemon_ids) {
            (Some(name), Some(pokemon_ids)) => (name, pokemon_ids),
            _ => return Err(input_error("Missing required fields: name, pokemon_ids")),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(input_error("Team name cannot be empty"));
        }
        if pokemon_ids.len() != self.options.team_size {
            return Err(input_error(format!(
                "Team must contain exactly {} Pokémon",
                self.options.team_size
            )));
        }
        if pokemon_ids.iter().collect::<HashSet<_>>().len() != pokemon_ids.len() {
            return Err(input_error("Team cannot contain the same Pokémon more than once"));
        }
        for id in &pokemon_ids {
            if self.fetch_pokemon(id)?.is_none() {
                return Err(input_error("One or more Pokémon not found"));
            }
        }
        Ok((name.to_owned(), pokemon_ids))
    }
}

#[cfg(test)]
mod team_validation_test {
    use teambattle_test_utils::{
        assert_error_message,
        local_data_store,
        sample,
    };
    use uuid::Uuid;

    use crate::{
        ErrorKind,
        TeamBattleService,
        TeamBattleServiceOptions,
        TeamInput,
        error_kind,
    };

    fn input(name: &str, pokemon_ids: &[Uuid]) -> TeamInput {
        TeamInput {
            name: Some(name.to_owned()),
            pokemon_ids: Some(pokemon_ids.to_vec()),
        }
    }

    fn pairs() -> TeamBattleServiceOptions {
        TeamBattleServiceOptions {
            team_size: 2,
            ..Default::default()
        }
    }

    #[test]
    fn trims_team_name() {
        let data = local_data_store();
        let service = TeamBattleService::new_with_options(&data, pairs());
        let (name, pokemon_ids) = service
            .validate_team(input("  Duo  ", &[sample::PIKACHU, sample::EEVEE]))
            .unwrap();
        assert_eq!(name, "Duo");
        assert_eq!(pokemon_ids, Vec::from_iter([sample::PIKACHU, sample::EEVEE]));
    }

    #[test]
    fn requires_name_and_members() {
        let data = local_data_store();
        let service = TeamBattleService::new(&data);
        let result = service.validate_team(TeamInput {
            name: Some("Team".to_owned()),
            pokemon_ids: None,
        });
        assert_eq!(
            result.as_ref().map_err(error_kind).err(),
            Some(ErrorKind::Input)
        );
        assert_error_message(result, "Missing required fields: name, pokemon_ids");
    }

    #[test]
    fn rejects_blank_name() {
        let data = local_data_store();
        let service = TeamBattleService::new(&data);
        assert_error_message(
            service.validate_team(input("   ", &[])),
            "Team name cannot be empty",
        );
    }

    #[test]
    fn requires_configured_team_size() {
        let data = local_data_store();
        let service = TeamBattleService::new(&data);
        assert_error_message(
            service.validate_team(input("Team", &[sample::PIKACHU])),
            "Team must contain exactly 6 Pokémon",
        );
    }

    #[test]
    fn rejects_duplicate_members() {
        let data = local_data_store();
        let service = TeamBattleService::new_with_options(&data, pairs());
        assert_error_message(
            service.validate_team(input("Team", &[sample::PIKACHU, sample::PIKACHU])),
            "Team cannot contain the same Pokémon more than once",
        );
    }

    #[test]
    fn rejects_unknown_members() {
        let data = local_data_store();
        let service = TeamBattleService::new_with_options(&data, pairs());
        assert_error_message(
            service.validate_team(input("Team", &[sample::PIKACHU, Uuid::from_u128(404)])),
            "One or more Pokémon not found",
        );
    }
}
