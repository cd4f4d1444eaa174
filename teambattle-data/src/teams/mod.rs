mod team_data;

pub use team_data::TeamData;
