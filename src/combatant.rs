use crate::battle::calculators::{calculate_damage, move_hits};
use crate::battle::state::{BattleEvent, BattleRng, EventBus};
use crate::moves::Move;
use serde::{Deserialize, Serialize};

/// A battling creature instance.
///
/// Health is the only thing a battle mutates: `current_health` only ever
/// decreases, clamped at 0, and a combatant with 0 health is incapacitated.
/// Incapacitation is derived from health rather than stored, so the two can
/// never disagree. Wild combatants are `clone()`d from a template; the
/// derived `Clone` deep-copies the move list, so templates stay pristine
/// across repeated encounters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub category: String,
    max_health: u32,
    current_health: u32,
    attack: u32,
    defense: u32,
    speed: u32,
    moves: Vec<Move>,
}

impl Combatant {
    /// Create a combatant at full health.
    ///
    /// Health and the three stats are clamped up to at least 1, which keeps
    /// the damage formula's division by `defense` well-defined. Callers
    /// supply at least one move; the first move doubles as the fixed policy
    /// a wild defender counter-attacks with.
    pub fn new(
        name: &str,
        category: &str,
        max_health: u32,
        attack: u32,
        defense: u32,
        speed: u32,
        moves: Vec<Move>,
    ) -> Self {
        let max_health = max_health.max(1);
        Combatant {
            name: name.to_string(),
            category: category.to_string(),
            max_health,
            current_health: max_health,
            attack: attack.max(1),
            defense: defense.max(1),
            speed: speed.max(1),
            moves,
        }
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn defense(&self) -> u32 {
        self.defense
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_incapacitated(&self) -> bool {
        self.current_health == 0
    }

    /// Apply damage, clamped so health never goes below 0.
    ///
    /// Emits `DamageDealt`, or `Fainted` when this drops health to 0.
    pub fn apply_damage(&mut self, amount: u32, events: &mut EventBus) {
        self.current_health = self.current_health.saturating_sub(amount);
        if self.current_health == 0 {
            events.push(BattleEvent::Fainted {
                name: self.name.clone(),
            });
        } else {
            events.push(BattleEvent::DamageDealt {
                target: self.name.clone(),
                damage: amount,
                remaining_health: self.current_health,
            });
        }
    }

    /// Attack `target` with the move at `move_index`.
    ///
    /// An incapacitated attacker or an out-of-range index is a no-op that
    /// only emits an event; neither touches the target. On a hit, damage is
    /// a deterministic function of the move's power and the two stat lines.
    pub fn perform_attack(
        &self,
        target: &mut Combatant,
        move_index: usize,
        rng: &mut BattleRng,
        events: &mut EventBus,
    ) {
        if self.is_incapacitated() {
            events.push(BattleEvent::CannotAct {
                name: self.name.clone(),
            });
            return;
        }

        let Some(move_) = self.moves.get(move_index) else {
            events.push(BattleEvent::InvalidMoveSelection { index: move_index });
            return;
        };

        events.push(BattleEvent::MoveUsed {
            attacker: self.name.clone(),
            move_name: move_.name().to_string(),
        });

        if !move_hits(move_, rng) {
            events.push(BattleEvent::MoveMissed {
                attacker: self.name.clone(),
                move_name: move_.name().to_string(),
            });
            return;
        }

        let damage = calculate_damage(move_.power(), self.attack, target.defense);
        target.apply_damage(damage, events);
    }
}
