extern crate alloc;

mod api;
mod error;
mod options;
mod resolver;
mod service;

pub use api::*;
pub use error::{
    ErrorKind,
    InputError,
    NotFoundError,
    error_kind,
    input_error,
    not_found_error,
};
pub use options::TeamBattleServiceOptions;
pub use resolver::StoreResolver;
pub use service::TeamBattleService;
