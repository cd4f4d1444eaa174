mod pokemon_data;
mod r#type;

pub use pokemon_data::PokemonData;
pub use r#type::{
    PokemonType,
    SerializedTypeChart,
    TypeChart,
    TypeTable,
};
