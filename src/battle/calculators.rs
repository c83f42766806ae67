use crate::battle::state::BattleRng;
use crate::moves::Move;

/// Calculate attack damage, truncated to an integer.
///
/// `damage = floor((((2/5 + 2) * power * attack / defense) / 50) + 2)`
///
/// Deterministic in its three inputs; the hit/miss roll lives in
/// `move_hits`, never in the magnitude. Callers guarantee `defense > 0`
/// (enforced at `Combatant` construction).
pub fn calculate_damage(power: u32, attack: u32, defense: u32) -> u32 {
    let raw =
        (((2.0 / 5.0 + 2.0) * power as f64 * attack as f64 / defense as f64) / 50.0) + 2.0;
    raw as u32
}

/// Roll for hit/miss. Consumes one outcome; hits iff `roll <= accuracy`,
/// so a 100-accuracy move can never miss and a 0-accuracy move never hits.
pub fn move_hits(move_: &Move, rng: &mut BattleRng) -> bool {
    let roll = rng.next_outcome("accuracy check");
    roll <= move_.accuracy()
}

/// Calculate the capture chance in percent.
///
/// `clamp((max_health*3 - current_health*2) * 100 / (max_health*3), 10, 90)`
///
/// Lower remaining health means a higher chance, with a 10% floor and a
/// 90% ceiling. Kept fractional so the shell can display e.g. 33.33%.
pub fn calculate_catch_chance(max_health: u32, current_health: u32) -> f64 {
    let scaled_max = max_health as f64 * 3.0;
    let raw = (scaled_max - current_health as f64 * 2.0) * 100.0 / scaled_max;
    raw.clamp(10.0, 90.0)
}

/// Roll for capture success using the calculated chance. The roll is a
/// uniform percentage in [0, 100); success iff it lands strictly below the
/// chance, so a fractional chance like 33.33% is honored exactly.
pub fn roll_capture_success(catch_chance: f64, rng: &mut BattleRng) -> bool {
    let roll = rng.next_percent("capture roll");
    roll < catch_chance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_is_deterministic() {
        // floor(((2.4 * 40 * 52 / 40) / 50) + 2) = floor(4.496) = 4
        assert_eq!(calculate_damage(40, 52, 40), 4);
        assert_eq!(calculate_damage(40, 52, 40), 4);
    }

    #[test]
    fn test_damage_floor_is_two() {
        // Zero power still deals the flat +2.
        assert_eq!(calculate_damage(0, 52, 40), 2);
    }

    #[test]
    fn test_damage_scales_with_attack() {
        let weak = calculate_damage(40, 30, 40);
        let strong = calculate_damage(40, 90, 40);
        assert!(strong > weak);
    }

    #[test]
    fn test_hit_roll_thresholds() {
        let tackle = Move::new("Tackle", "Normal", 40, 100);
        let mut rng = BattleRng::new_for_test(vec![100, 1]);
        // 100-accuracy moves hit on every roll, including the maximum.
        assert!(move_hits(&tackle, &mut rng));
        assert!(move_hits(&tackle, &mut rng));

        let shaky = Move::new("Shaky", "Normal", 40, 70);
        let mut rng = BattleRng::new_for_test(vec![70, 71]);
        assert!(move_hits(&shaky, &mut rng));
        assert!(!move_hits(&shaky, &mut rng));

        let hopeless = Move::new("Hopeless", "Normal", 40, 0);
        let mut rng = BattleRng::new_for_test(vec![1]);
        assert!(!move_hits(&hopeless, &mut rng));
    }

    #[test]
    fn test_catch_chance_full_health() {
        // (120 - 80) * 100 / 120 = 33.33...
        let chance = calculate_catch_chance(40, 40);
        assert!((chance - 33.333333333333336).abs() < 1e-9);
    }

    #[test]
    fn test_catch_chance_zero_health_is_capped() {
        // Raw value is 100; ceiling clamps it to 90.
        assert_eq!(calculate_catch_chance(40, 0), 90.0);
    }

    #[test]
    fn test_catch_chance_floor() {
        // A combatant healed past its nominal max would go below 10 raw;
        // the floor still applies at the boundary values.
        assert!(calculate_catch_chance(1, 1) >= 10.0);
        assert_eq!(calculate_catch_chance(10, 15), 10.0);
    }

    #[test]
    fn test_catch_chance_monotone_in_health() {
        let max_health = 40;
        let mut previous = f64::MAX;
        for current in 0..=max_health {
            let chance = calculate_catch_chance(max_health, current);
            assert!(
                chance <= previous,
                "chance rose from {} to {} at hp {}",
                previous,
                chance,
                current
            );
            previous = chance;
        }
    }

    #[test]
    fn test_capture_roll_thresholds() {
        let mut rng = BattleRng::new_for_test(vec![33, 34, 89, 90]);
        assert!(roll_capture_success(33.33, &mut rng));
        assert!(!roll_capture_success(33.33, &mut rng));
        assert!(roll_capture_success(90.0, &mut rng));
        // The comparison is strict: a roll exactly at the chance fails.
        assert!(!roll_capture_success(90.0, &mut rng));
    }
}
