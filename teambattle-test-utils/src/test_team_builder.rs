use teambattle::{
    BattleTeam,
    Combatant,
};
use uuid::Uuid;

/// Builder for a [`BattleTeam`] in tests.
///
/// Member and team IDs are generated deterministically from the team name and member position, so
/// that two builders with the same inputs produce equal teams.
pub struct TestTeamBuilder {
    id: Uuid,
    name: String,
    members: Vec<Combatant>,
}

impl TestTeamBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
            name: name.to_owned(),
            members: Vec::new(),
        }
    }

    /// Adds a member to the end of the team.
    pub fn member(mut self, name: &str, type_id: Uuid, power: u32, life: u32) -> Self {
        let id = Uuid::new_v5(
            &self.id,
            format!("{}:{name}", self.members.len()).as_bytes(),
        );
        self.members.push(Combatant {
            id,
            name: name.to_owned(),
            type_name: type_id.to_string(),
            type_id,
            image: None,
            power,
            life,
        });
        self
    }

    /// Adds `count` identical members to the end of the team.
    pub fn members(mut self, count: usize, type_id: Uuid, power: u32, life: u32) -> Self {
        for _ in 0..count {
            let name = format!("{} {}", self.name, self.members.len() + 1);
            self = self.member(&name, type_id, power, life);
        }
        self
    }

    pub fn build(self) -> BattleTeam {
        BattleTeam {
            id: self.id,
            name: self.name,
            members: self.members,
        }
    }
}
