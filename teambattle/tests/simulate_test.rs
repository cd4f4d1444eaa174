use pretty_assertions::assert_eq;
use teambattle::{
    MAX_ROUNDS,
    NEUTRAL_FACTOR,
    NeutralResolver,
    Winner,
    simulate,
};
use teambattle_test_utils::{
    TestResolver,
    TestTeamBuilder,
};
use uuid::Uuid;

const NORMAL: Uuid = Uuid::from_u128(1);
const FIRE: Uuid = Uuid::from_u128(2);
const GRASS: Uuid = Uuid::from_u128(3);
const GHOST: Uuid = Uuid::from_u128(4);

#[test]
fn identical_teams_knock_each_other_out_every_round() {
    let team1 = TestTeamBuilder::new("Team A")
        .members(6, NORMAL, 50, 50)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .members(6, NORMAL, 50, 50)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    assert_eq!(log.rounds.len(), 6);
    for (i, round) in log.rounds.iter().enumerate() {
        assert_eq!(round.round, i + 1);
        assert_eq!(round.pokemon1, team1.members[i]);
        assert_eq!(round.pokemon2, team2.members[i]);
        assert_eq!((round.life1_before, round.life2_before), (50, 50));
        assert_eq!((round.life1_after, round.life2_after), (0, 0));
        assert_eq!((round.damage1, round.damage2), (50, 50));
        assert_eq!((round.type_factor1, round.type_factor2), (1.0, 1.0));
    }
    assert_eq!(log.winner, Winner::Draw);
    assert!(log.team1_remaining.is_empty());
    assert!(log.team2_remaining.is_empty());
}

#[test]
fn damage_is_applied_to_both_sides_in_the_same_round() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Striker", NORMAL, 100, 60)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("Glass Cannon", NORMAL, 35, 10)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    assert_eq!(log.rounds.len(), 1);
    let round = &log.rounds[0];
    assert_eq!(round.damage1, 100);
    assert_eq!(round.damage2, 35);
    assert_eq!(round.life2_after, 0);
    assert_eq!(round.life1_after, 25);
    assert_eq!(log.winner, Winner::Team1);
    assert_eq!(log.team1_remaining, team1.members);
    assert!(log.team2_remaining.is_empty());
}

#[test]
fn survivors_carry_damage_into_the_next_round() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Tank", FIRE, 30, 100)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("First", GRASS, 20, 40)
        .member("Second", GRASS, 20, 30)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    let lives = log
        .rounds
        .iter()
        .map(|round| {
            (
                round.pokemon2.name.as_str(),
                round.life1_before,
                round.life1_after,
                round.life2_before,
                round.life2_after,
            )
        })
        .collect::<Vec<_>>();
    let expected: Vec<(&str, u32, u32, u32, u32)> = vec![
        ("First", 100, 80, 40, 10),
        ("First", 80, 60, 10, 0),
        ("Second", 60, 40, 30, 0),
    ];
    assert_eq!(lives, expected);
    assert_eq!(log.winner, Winner::Team1);
    assert_eq!(log.team1_remaining.len(), 1);
    assert_eq!(log.team1_remaining[0].life, 100);
}

#[test]
fn second_team_can_win() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Weak", NORMAL, 10, 10)
        .member("Weaker", NORMAL, 10, 10)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("Strong", NORMAL, 60, 60)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    assert_eq!(log.rounds.len(), 2);
    assert_eq!(log.winner, Winner::Team2);
    assert!(log.team1_remaining.is_empty());
    assert_eq!(log.team2_remaining, team2.members);
    assert_eq!(log.rounds[1].life2_after, 40);
}

#[test]
fn applies_effectiveness_factor_for_each_attack() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Flame", FIRE, 45, 100)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("Leaf", GRASS, 45, 100)
        .build();
    let resolver = TestResolver::new(1.0)
        .with_factor(FIRE, GRASS, 2.0)
        .with_factor(GRASS, FIRE, 0.5);

    let log = simulate(&team1, &team2, &resolver);

    let round = &log.rounds[0];
    assert_eq!(round.type_factor1, 2.0);
    assert_eq!(round.type_factor2, 0.5);
    assert_eq!(round.damage1, 90);
    assert_eq!(round.damage2, 23);
    assert_eq!(log.rounds.len(), 2);
    assert_eq!(log.winner, Winner::Team1);
}

#[test]
fn zero_factor_is_applied_rather_than_treated_as_missing() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Tackler", NORMAL, 80, 50)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("Spirit", GHOST, 25, 50)
        .build();
    let resolver = TestResolver::new(1.0).with_factor(NORMAL, GHOST, 0.0);

    let log = simulate(&team1, &team2, &resolver);

    assert!(log.rounds.iter().all(|round| round.type_factor1 == 0.0));
    assert!(log.rounds.iter().all(|round| round.damage1 == 0));
    assert_eq!(log.rounds.len(), 2);
    assert_eq!(log.winner, Winner::Team2);
}

#[test]
fn failed_lookup_uses_neutral_factor_and_battle_continues() {
    let team1 = TestTeamBuilder::new("Team A")
        .members(6, FIRE, 40, 60)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .members(6, GRASS, 40, 60)
        .build();
    let resolver = TestResolver::new(2.0).with_failure(FIRE, GRASS);

    let log = simulate(&team1, &team2, &resolver);

    assert!(!log.rounds.is_empty());
    for round in &log.rounds {
        assert_eq!(round.type_factor1, NEUTRAL_FACTOR);
        assert_eq!(round.type_factor2, 2.0);
    }
    assert_eq!(log.winner, Winner::Team2);
}

#[test]
fn battle_stops_at_round_limit_as_draw() {
    let team1 = TestTeamBuilder::new("Team A")
        .members(6, NORMAL, 50, 50)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .members(6, GHOST, 50, 50)
        .build();
    let resolver = TestResolver::new(0.0);

    let log = simulate(&team1, &team2, &resolver);

    assert_eq!(log.rounds.len(), MAX_ROUNDS);
    assert_eq!(log.rounds.last().map(|round| round.round), Some(MAX_ROUNDS));
    assert_eq!(log.winner, Winner::Draw);
    assert_eq!(log.team1_remaining, team1.members);
    assert_eq!(log.team2_remaining, team2.members);
}

#[test]
fn defeated_members_are_skipped_without_using_a_round() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Fainted", NORMAL, 50, 0)
        .member("Healthy", NORMAL, 50, 50)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("Opponent", NORMAL, 10, 100)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    assert_eq!(log.rounds[0].round, 1);
    assert_eq!(log.rounds[0].pokemon1.name, "Healthy");
    assert!(log.rounds.iter().all(|round| round.pokemon1.name == "Healthy"));
    assert_eq!(log.rounds.len(), 2);
    assert_eq!(log.winner, Winner::Team1);
    assert_eq!(log.team1_remaining.len(), 1);
    assert_eq!(log.team1_remaining[0].name, "Healthy");
}

#[test]
fn empty_team_never_fights() {
    let team1 = TestTeamBuilder::new("Team A").build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("Lonely", NORMAL, 10, 10)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    assert!(log.rounds.is_empty());
    assert_eq!(log.winner, Winner::Team2);
}

#[test]
fn resolves_each_pairing_once_per_battle() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Tank", FIRE, 30, 100)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("First", GRASS, 20, 40)
        .member("Second", GRASS, 20, 30)
        .build();
    let resolver = TestResolver::new(1.0);

    let log = simulate(&team1, &team2, &resolver);

    assert_eq!(log.rounds.len(), 3);
    assert_eq!(resolver.calls(), 2);
}

#[test]
fn summarizes_teams_in_battle_order() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("One", NORMAL, 10, 10)
        .member("Two", NORMAL, 20, 10)
        .member("Three", NORMAL, 30, 10)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("Four", NORMAL, 100, 100)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    assert_eq!(log.team1.id, team1.id);
    assert_eq!(log.team1.name, "Team A");
    assert_eq!(
        log.team1.pokemon_ids,
        team1
            .members
            .iter()
            .map(|member| member.id)
            .collect::<Vec<_>>()
    );
    assert_eq!(log.team1.total_power, 60);
    assert_eq!(log.team2.total_power, 100);
}

#[test]
fn tallies_informal_round_outcomes() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Tank", FIRE, 30, 100)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("First", GRASS, 20, 40)
        .member("Second", GRASS, 20, 30)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    let tally = log.round_tally();
    assert_eq!((tally.team1, tally.team2, tally.draws), (3, 0, 0));
}

#[test]
fn tallies_mutual_knockouts_as_draws() {
    let team1 = TestTeamBuilder::new("Team A")
        .members(6, NORMAL, 50, 50)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .members(6, NORMAL, 50, 50)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    let tally = log.round_tally();
    assert_eq!((tally.team1, tally.team2, tally.draws), (0, 0, 6));
}

#[test]
fn tallies_rounds_taken_by_second_team() {
    let team1 = TestTeamBuilder::new("Team A")
        .member("Weak", NORMAL, 10, 10)
        .member("Chipper", NORMAL, 20, 100)
        .build();
    let team2 = TestTeamBuilder::new("Team B")
        .member("Strong", NORMAL, 30, 200)
        .build();

    let log = simulate(&team1, &team2, &NeutralResolver);

    // One defeat, then rounds where the second team deals more damage.
    let tally = log.round_tally();
    assert_eq!(log.winner, Winner::Team2);
    assert_eq!(tally.team2, log.rounds.len());
    assert_eq!((tally.team1, tally.draws), (0, 0));
}
