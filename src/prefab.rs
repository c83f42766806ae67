use crate::combatant::Combatant;
use crate::moves::Move;
use rand::Rng;

/// Prefab content: the named moves, the starter choices, and the wild
/// templates encounters are cloned from.

pub fn tackle() -> Move {
    Move::new("Tackle", "Normal", 40, 100)
}

pub fn scratch() -> Move {
    Move::new("Scratch", "Normal", 40, 100)
}

pub fn ember() -> Move {
    Move::new("Ember", "Fire", 40, 100)
}

pub fn water_gun() -> Move {
    Move::new("Water Gun", "Water", 40, 100)
}

pub fn vine_whip() -> Move {
    Move::new("Vine Whip", "Grass", 45, 100)
}

pub fn quick_attack() -> Move {
    Move::new("Quick Attack", "Normal", 40, 100)
}

/// The three starter choices offered at game start.
pub fn starter_choices() -> Vec<Combatant> {
    vec![
        Combatant::new("Charmander", "Fire", 39, 52, 43, 65, vec![scratch(), ember()]),
        Combatant::new("Squirtle", "Water", 44, 48, 65, 43, vec![tackle(), water_gun()]),
        Combatant::new("Bulbasaur", "Grass", 45, 49, 49, 45, vec![tackle(), vine_whip()]),
    ]
}

/// Templates wild encounters are instantiated from. Never battled directly.
pub fn wild_templates() -> Vec<Combatant> {
    vec![
        Combatant::new(
            "Pidgey",
            "Normal/Flying",
            40,
            45,
            40,
            56,
            vec![tackle(), quick_attack()],
        ),
        Combatant::new(
            "Rattata",
            "Normal",
            30,
            56,
            35,
            72,
            vec![tackle(), quick_attack()],
        ),
        Combatant::new("Caterpie", "Bug", 45, 30, 35, 45, vec![tackle()]),
    ]
}

/// Pick a random template and deep-clone it into a fresh wild combatant.
///
/// The clone copies the move list by value, so nothing a battle does to the
/// instance can leak back into the template.
pub fn spawn_wild<R: Rng>(rng: &mut R) -> Combatant {
    let templates = wild_templates();
    let index = rng.random_range(0..templates.len());
    templates[index].clone()
}
