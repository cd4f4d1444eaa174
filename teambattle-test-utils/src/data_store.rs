use once_cell::sync::Lazy;
use teambattle_data::LocalDataStore;

/// Directory of the sample data set checked into the repository.
pub const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data");

/// Creates a fresh [`LocalDataStore`] over the sample data set.
///
/// Use this for tests that write to the store.
pub fn local_data_store() -> LocalDataStore {
    LocalDataStore::new(DATA_DIR.to_owned()).unwrap()
}

static LOCAL_DATA_STORE: Lazy<LocalDataStore> = Lazy::new(local_data_store);

/// A shared [`LocalDataStore`] over the sample data set.
///
/// Tests must not write to this store.
pub fn static_local_data_store() -> &'static LocalDataStore {
    &LOCAL_DATA_STORE
}

/// Well-known IDs in the sample data set.
pub mod sample {
    use uuid::Uuid;

    const fn type_id(n: u128) -> Uuid {
        Uuid::from_u128(0x7a1e0000_0000_4000_8000_000000000000 | n)
    }

    const fn pokemon_id(n: u128) -> Uuid {
        Uuid::from_u128(0x5e110000_0000_4000_8000_000000000000 | n)
    }

    const fn team_id(n: u128) -> Uuid {
        Uuid::from_u128(0x7ea30000_0000_4000_8000_000000000000 | n)
    }

    pub const NORMAL: Uuid = type_id(0x01);
    pub const FIRE: Uuid = type_id(0x02);
    pub const WATER: Uuid = type_id(0x03);
    pub const GRASS: Uuid = type_id(0x04);
    pub const ELECTRIC: Uuid = type_id(0x05);
    pub const GHOST: Uuid = type_id(0x0e);

    pub const BULBASAUR: Uuid = pokemon_id(0x01);
    pub const CHARMANDER: Uuid = pokemon_id(0x02);
    pub const SQUIRTLE: Uuid = pokemon_id(0x03);
    pub const PIKACHU: Uuid = pokemon_id(0x04);
    pub const GEODUDE: Uuid = pokemon_id(0x05);
    pub const MACHOP: Uuid = pokemon_id(0x06);
    pub const GASTLY: Uuid = pokemon_id(0x07);
    pub const DRATINI: Uuid = pokemon_id(0x08);
    pub const EEVEE: Uuid = pokemon_id(0x09);
    pub const SNORLAX: Uuid = pokemon_id(0x0a);
    pub const LAPRAS: Uuid = pokemon_id(0x0b);
    pub const ONIX: Uuid = pokemon_id(0x0c);
    pub const VULPIX: Uuid = pokemon_id(0x0d);
    pub const ODDISH: Uuid = pokemon_id(0x0e);
    pub const PSYDUCK: Uuid = pokemon_id(0x0f);
    pub const SANDSHREW: Uuid = pokemon_id(0x10);
    pub const ABRA: Uuid = pokemon_id(0x11);
    pub const MAGNEMITE: Uuid = pokemon_id(0x12);

    pub const KANTO_STARTERS: Uuid = team_id(0x01);
    pub const HEAVY_HITTERS: Uuid = team_id(0x02);
    pub const UNDERDOGS: Uuid = team_id(0x03);
}
