mod data_store;
mod error_assert;
mod resolver;
mod setup;
mod test_team_builder;

pub use data_store::{
    DATA_DIR,
    local_data_store,
    sample,
    static_local_data_store,
};
pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use resolver::TestResolver;
pub use setup::setup_test_environment;
pub use test_team_builder::TestTeamBuilder;
