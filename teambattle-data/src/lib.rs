mod datastore;
mod mons;
mod teams;

#[cfg(test)]
pub mod test_util;

pub use datastore::*;
pub use mons::*;
pub use teams::*;
