mod data_store;
mod local;

pub use data_store::{
    DataStore,
    MutableDataStore,
};
pub use local::LocalDataStore;
