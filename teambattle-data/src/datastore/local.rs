use std::{
    env,
    fs::File,
    path::Path,
    sync::{
        RwLock,
        RwLockReadGuard,
        RwLockWriteGuard,
    },
    time::SystemTime,
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use serde::de::DeserializeOwned;
use unicase::UniCase;
use uuid::Uuid;

use crate::{
    DataStore,
    MutableDataStore,
    PokemonData,
    PokemonType,
    SerializedTypeChart,
    TeamData,
    TypeChart,
};

#[derive(Debug, Default)]
struct Tables {
    types: HashMap<Uuid, PokemonType>,
    type_chart: TypeChart,
    pokemon: HashMap<Uuid, PokemonData>,
    teams: HashMap<Uuid, TeamData>,
}

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// Data is read once on construction. Writes only modify the in-memory copy; nothing is ever
/// written back to disk.
#[derive(Debug)]
pub struct LocalDataStore {
    tables: RwLock<Tables>,
}

impl LocalDataStore {
    /// Type catalogue file name.
    pub const TYPES_FILE: &str = "types.json";
    /// Type chart file name.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";
    /// Pokémon file name.
    pub const POKEMON_FILE: &str = "pokemon.json";
    /// Teams file name.
    pub const TEAMS_FILE: &str = "teams.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or cannot be used to fill
    /// cached data.
    pub fn new(root: String) -> Result<Self> {
        let root = Path::new(&root);
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display(),
            )));
        }

        let types: Vec<PokemonType> = Self::read_file(root, Self::TYPES_FILE, "type catalogue")?;
        let type_chart: SerializedTypeChart =
            Self::read_file(root, Self::TYPE_CHART_FILE, "type chart")?;
        let type_chart =
            TypeChart::from_serialized(type_chart, &types).context("invalid type chart")?;
        let pokemon = Self::read_file(root, Self::POKEMON_FILE, "pokemon")?;
        let teams = Self::read_file(root, Self::TEAMS_FILE, "teams")?;

        Ok(Self::from_records(types, type_chart, pokemon, teams))
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// Creates a new instance of [`LocalDataStore`] directly from records.
    pub fn from_records(
        types: Vec<PokemonType>,
        type_chart: TypeChart,
        pokemon: Vec<PokemonData>,
        teams: Vec<TeamData>,
    ) -> Self {
        Self {
            tables: RwLock::new(Tables {
                types: types.into_iter().map(|t| (t.id, t)).collect(),
                type_chart,
                pokemon: pokemon.into_iter().map(|p| (p.id, p)).collect(),
                teams: teams.into_iter().map(|t| (t.id, t)).collect(),
            }),
        }
    }

    fn read_file<T: DeserializeOwned>(root: &Path, file: &str, what: &str) -> Result<T> {
        serde_json::from_reader(
            File::open(root.join(file)).context(format!("failed to read {what}"))?,
        )
        .context(format!("failed to parse {what}"))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| Error::msg("data store lock is poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| Error::msg("data store lock is poisoned"))
    }
}

impl DataStore for LocalDataStore {
    fn all_types(&self) -> Result<Vec<PokemonType>> {
        let mut types = self.read()?.types.values().cloned().collect::<Vec<_>>();
        types.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(types)
    }

    fn get_type(&self, id: &Uuid) -> Result<Option<PokemonType>> {
        Ok(self.read()?.types.get(id).cloned())
    }

    fn get_type_by_name(&self, name: &str) -> Result<Option<PokemonType>> {
        let name = UniCase::new(name);
        Ok(self
            .read()?
            .types
            .values()
            .find(|t| UniCase::new(t.name.as_str()) == name)
            .cloned())
    }

    fn get_type_factor(&self, attacker: &Uuid, defender: &Uuid) -> Result<Option<f32>> {
        Ok(self.read()?.type_chart.factor(attacker, defender))
    }

    fn all_pokemon(&self) -> Result<Vec<PokemonData>> {
        let mut pokemon = self.read()?.pokemon.values().cloned().collect::<Vec<_>>();
        pokemon.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(pokemon)
    }

    fn get_pokemon(&self, id: &Uuid) -> Result<Option<PokemonData>> {
        Ok(self.read()?.pokemon.get(id).cloned())
    }

    fn all_teams(&self) -> Result<Vec<TeamData>> {
        let mut teams = self.read()?.teams.values().cloned().collect::<Vec<_>>();
        teams.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(teams)
    }

    fn get_team(&self, id: &Uuid) -> Result<Option<TeamData>> {
        Ok(self.read()?.teams.get(id).cloned())
    }
}

impl MutableDataStore for LocalDataStore {
    fn update_pokemon(&self, pokemon: PokemonData) -> Result<Option<PokemonData>> {
        let mut tables = self.write()?;
        match tables.pokemon.get_mut(&pokemon.id) {
            Some(stored) => {
                *stored = pokemon;
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }

    fn insert_team(&self, name: String, pokemon_ids: Vec<Uuid>) -> Result<TeamData> {
        let team = TeamData {
            id: Uuid::new_v4(),
            name,
            pokemon_ids,
            created_at: SystemTime::now(),
        };
        self.write()?.teams.insert(team.id, team.clone());
        Ok(team)
    }

    fn update_team(
        &self,
        id: &Uuid,
        name: String,
        pokemon_ids: Vec<Uuid>,
    ) -> Result<Option<TeamData>> {
        let mut tables = self.write()?;
        match tables.teams.get_mut(id) {
            Some(team) => {
                team.name = name;
                team.pokemon_ids = pokemon_ids;
                Ok(Some(team.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete_team(&self, id: &Uuid) -> Result<bool> {
        Ok(self.write()?.teams.remove(id).is_some())
    }
}
