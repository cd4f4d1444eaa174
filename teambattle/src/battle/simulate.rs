use crate::{
    BattleLog,
    BattleRound,
    BattleTeam,
    Combatant,
    EffectivenessResolver,
    FactorCache,
    Winner,
};

/// The maximum number of rounds in a single battle.
///
/// This only guarantees that a battle terminates. A battle cut off by this limit ends in a draw if
/// both teams still have a Pokémon standing.
pub const MAX_ROUNDS: usize = 100;

/// Battle state for one team.
///
/// Health is tracked here, by member index, rather than on the members themselves.
struct SideState<'t> {
    members: &'t [Combatant],
    lives: Vec<u32>,
    active: usize,
}

impl<'t> SideState<'t> {
    fn new(team: &'t BattleTeam) -> Self {
        Self {
            members: &team.members,
            lives: team.members.iter().map(|member| member.life).collect(),
            active: 0,
        }
    }

    fn active(&self) -> Option<(&'t Combatant, u32)> {
        let member = self.members.get(self.active)?;
        Some((member, self.lives[self.active]))
    }

    fn advance(&mut self) {
        self.active += 1;
    }

    /// Applies damage to the active member, returning its remaining life.
    fn take_damage(&mut self, damage: u32) -> u32 {
        let life = &mut self.lives[self.active];
        *life = life.saturating_sub(damage);
        *life
    }

    fn has_survivor(&self) -> bool {
        self.lives.iter().any(|life| *life > 0)
    }

    fn remaining(&self) -> Vec<Combatant> {
        self.members
            .iter()
            .zip(&self.lives)
            .filter(|(_, life)| **life > 0)
            .map(|(member, _)| member.clone())
            .collect()
    }
}

fn damage(power: u32, factor: f32) -> u32 {
    (power as f64 * factor as f64).round() as u32
}

/// Simulates a battle between two teams.
///
/// The active Pokémon of each team attack each other simultaneously every round. A defeated Pokémon
/// is replaced by the next member of its team. The battle ends when either team runs out of
/// Pokémon or after [`MAX_ROUNDS`] rounds.
///
/// Effectiveness lookups that fail are treated as neutral, so this never fails. Neither team is
/// modified.
pub fn simulate(
    team1: &BattleTeam,
    team2: &BattleTeam,
    resolver: &dyn EffectivenessResolver,
) -> BattleLog {
    let mut factors = FactorCache::new(resolver);
    let mut side1 = SideState::new(team1);
    let mut side2 = SideState::new(team2);
    let mut rounds = Vec::<BattleRound>::new();

    while rounds.len() < MAX_ROUNDS {
        let ((pokemon1, life1_before), (pokemon2, life2_before)) =
            match (side1.active(), side2.active()) {
                (Some(active1), Some(active2)) => (active1, active2),
                _ => break,
            };

        // Defeated Pokémon are skipped without using up a round.
        if life1_before == 0 {
            side1.advance();
            continue;
        }
        if life2_before == 0 {
            side2.advance();
            continue;
        }

        let type_factor1 = factors.factor(&pokemon1.type_id, &pokemon2.type_id);
        let type_factor2 = factors.factor(&pokemon2.type_id, &pokemon1.type_id);
        let damage1 = damage(pokemon1.power, type_factor1);
        let damage2 = damage(pokemon2.power, type_factor2);

        let life1_after = side1.take_damage(damage2);
        let life2_after = side2.take_damage(damage1);

        rounds.push(BattleRound {
            round: rounds.len() + 1,
            pokemon1: pokemon1.clone(),
            pokemon2: pokemon2.clone(),
            life1_before,
            life2_before,
            life1_after,
            life2_after,
            damage1,
            damage2,
            type_factor1,
            type_factor2,
        });

        if life1_after == 0 {
            side1.advance();
        }
        if life2_after == 0 {
            side2.advance();
        }
    }

    BattleLog {
        team1: team1.summary(),
        team2: team2.summary(),
        rounds,
        winner: Winner::from_survivors(side1.has_survivor(), side2.has_survivor()),
        team1_remaining: side1.remaining(),
        team2_remaining: side2.remaining(),
    }
}

#[cfg(test)]
mod damage_test {
    use super::damage;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(damage(45, 0.5), 23);
        assert_eq!(damage(41, 0.5), 21);
        assert_eq!(damage(50, 1.0), 50);
        assert_eq!(damage(55, 2.0), 110);
    }

    #[test]
    fn zero_factor_deals_no_damage() {
        assert_eq!(damage(100, 0.0), 0);
    }

    #[test]
    fn fractional_factors_round_to_nearest() {
        assert_eq!(damage(50, 0.67), 34);
        assert_eq!(damage(10, 1.25), 13);
        assert_eq!(damage(10, 1.24), 12);
    }
}
