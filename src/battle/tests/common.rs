use crate::battle::state::{BattleRng, EventBus};
use crate::combatant::Combatant;
use crate::moves::Move;

/// A builder for test combatants with common defaults.
///
/// # Example
/// ```rust,ignore
/// let wild = TestCombatantBuilder::new("Pidgey", 40, 45, 40)
///     .with_moves(vec![Move::new("Tackle", "Normal", 40, 100)])
///     .with_health(10)
///     .build();
/// ```
pub struct TestCombatantBuilder {
    name: String,
    max_health: u32,
    attack: u32,
    defense: u32,
    moves: Option<Vec<Move>>,
    current_health: Option<u32>,
}

impl TestCombatantBuilder {
    pub fn new(name: &str, max_health: u32, attack: u32, defense: u32) -> Self {
        Self {
            name: name.to_string(),
            max_health,
            attack,
            defense,
            moves: None,
            current_health: None,
        }
    }

    /// Overrides the default single-Tackle move list.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    /// Sets current health below max. If not set, health starts at max.
    pub fn with_health(mut self, health: u32) -> Self {
        self.current_health = Some(health);
        self
    }

    pub fn build(self) -> Combatant {
        let moves = self.moves.unwrap_or_else(|| vec![tackle()]);
        let mut combatant = Combatant::new(
            &self.name,
            "Normal",
            self.max_health,
            self.attack,
            self.defense,
            50,
            moves,
        );
        if let Some(health) = self.current_health {
            // Health is only reachable through damage application.
            let mut sink = EventBus::new();
            combatant.apply_damage(combatant.max_health().saturating_sub(health), &mut sink);
        }
        combatant
    }
}

pub fn tackle() -> Move {
    Move::new("Tackle", "Normal", 40, 100)
}

/// The worked-example pair used across the round tests.
pub fn example_player() -> Combatant {
    TestCombatantBuilder::new("Charmander", 39, 52, 43).build()
}

pub fn example_wild() -> Combatant {
    TestCombatantBuilder::new("Pidgey", 40, 45, 40).build()
}

/// A generous buffer of mid-range rolls for tests where the exact RNG
/// outcome does not matter (100-accuracy moves, etc.).
pub fn predictable_rng() -> BattleRng {
    BattleRng::new_for_test(vec![50; 100])
}
