use crate::combatant::Combatant;
use crate::errors::RosterError;
use serde::{Deserialize, Serialize};

/// The player's ordered collection of owned combatants.
///
/// Insertion order is capture order and never changes. There is no removal:
/// incapacitated members stay in place and are simply skipped when selecting
/// the active combatant (the first member still able to fight).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<Combatant>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a combatant (the starter at game start, captures afterwards).
    pub fn add(&mut self, combatant: Combatant) {
        self.members.push(combatant);
    }

    /// The first non-incapacitated member, or `None` when the whole roster
    /// is down and the player must rest.
    pub fn select_active(&self) -> Option<&Combatant> {
        self.members.iter().find(|member| !member.is_incapacitated())
    }

    pub fn select_active_mut(&mut self) -> Option<&mut Combatant> {
        self.members
            .iter_mut()
            .find(|member| !member.is_incapacitated())
    }

    /// Like `select_active_mut`, but surfaces the empty case as the
    /// "rest required" error for callers that propagate it.
    pub fn require_active_mut(&mut self) -> Result<&mut Combatant, RosterError> {
        self.select_active_mut()
            .ok_or(RosterError::NoEligibleCombatant)
    }

    pub fn all_incapacitated(&self) -> bool {
        self.members.iter().all(|member| member.is_incapacitated())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.members.iter()
    }
}
