use ahash::HashMap;
use anyhow::{
    Error,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};
use unicase::UniCase;
use uuid::Uuid;

/// An entry in the type catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonType {
    /// Unique identifier.
    pub id: Uuid,
    /// Type name.
    pub name: String,
}

/// A type table, which contains effectiveness factors for types against other types.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<T, HashMap<T, f32>>;

/// A type chart as written by hand, keyed by type name.
pub type SerializedTypeChart = TypeTable<String>;

/// A type chart, which contains all effectiveness factors between types in the catalogue.
///
/// The key here is the attacking type. Pairings that do not appear in the chart have no recorded
/// factor; deciding what that means is left to the caller.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Uuid>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_filled(types: TypeTable<Uuid>) -> Self {
        Self { types }
    }

    /// Converts a [`SerializedTypeChart`] into a [`TypeChart`], resolving type names against the
    /// given catalogue.
    ///
    /// Names are matched case-insensitively. Fails if any name is not in the catalogue.
    pub fn from_serialized(chart: SerializedTypeChart, catalogue: &[PokemonType]) -> Result<Self> {
        let ids = catalogue
            .iter()
            .map(|t| (UniCase::new(t.name.clone()), t.id))
            .collect::<HashMap<_, _>>();
        let resolve = |name: &str| {
            ids.get(&UniCase::new(name.to_owned()))
                .cloned()
                .ok_or_else(|| Error::msg(format!("type {name} is not in the type catalogue")))
        };
        let mut types = TypeTable::default();
        for (attacker, row) in chart {
            let attacker = resolve(&attacker)?;
            let row = row
                .into_iter()
                .map(|(defender, factor)| Ok((resolve(&defender)?, factor)))
                .collect::<Result<HashMap<_, _>>>()?;
            types.entry(attacker).or_default().extend(row);
        }
        Ok(Self { types })
    }

    /// The effectiveness factor of the attacking type against the defending type, if recorded.
    pub fn factor(&self, attacker: &Uuid, defender: &Uuid) -> Option<f32> {
        self.types.get(attacker)?.get(defender).cloned()
    }
}
