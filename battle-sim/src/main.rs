use std::{
    env,
    process::ExitCode,
};

use anyhow::{
    Context,
    Error,
    Result,
};
use teambattle_data::LocalDataStore;
use teambattle_service::{
    BattleRequest,
    ErrorKind,
    TeamBattleService,
    TeamBattleServiceOptions,
    error_kind,
};
use uuid::Uuid;

const DATA_DIR_ENV: &str = "DATA_DIR";
const OPTIONS_ENV: &str = "TEAMBATTLE_OPTIONS";

fn parse_team_id(arg: Option<String>, name: &str) -> Result<Uuid> {
    let arg = arg.ok_or_else(|| Error::msg(format!("missing {name}")))?;
    Uuid::parse_str(&arg).context(format!("invalid {name} {arg}"))
}

fn read_options() -> Result<TeamBattleServiceOptions> {
    match env::var(OPTIONS_ENV) {
        Ok(options) => serde_json::from_str(&options).context(format!("invalid {OPTIONS_ENV}")),
        Err(_) => Ok(TeamBattleServiceOptions::default()),
    }
}

async fn run(team1_id: Uuid, team2_id: Uuid) -> Result<String> {
    let data = LocalDataStore::new_from_env(DATA_DIR_ENV)?;
    let service = TeamBattleService::new_with_options(&data, read_options()?);
    let log = service
        .battle(BattleRequest::new(team1_id, team2_id))
        .await?;
    serde_json::to_string_pretty(&log).context("failed to serialize battle log")
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing_core::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let team_ids = parse_team_id(args.next(), "team1-id")
        .and_then(|team1| Ok((team1, parse_team_id(args.next(), "team2-id")?)));
    let (team1_id, team2_id) = match team_ids {
        Ok(team_ids) => team_ids,
        Err(err) => {
            eprintln!("{err:#}");
            eprintln!("usage: battle-sim <team1-id> <team2-id>");
            return ExitCode::from(2);
        }
    };

    match run(team1_id, team2_id).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match error_kind(&err) {
                ErrorKind::Input | ErrorKind::NotFound => eprintln!("{err}"),
                ErrorKind::Internal => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
