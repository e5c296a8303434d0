//! Experience and leveling
//!
//! Level-up pricing, hit point scaling, and progression helpers.

/// Base hit points of every player
pub const BASE_HP: u32 = 10;

/// Extra maximum hit points per constitution point
pub const HP_PER_CONSTITUTION: u32 = 2;

/// Flat part of the level-up price
const LEVEL_UP_BASE_COST: u32 = 10;

/// Exponent of the growing part of the level-up price
const LEVEL_UP_EXPONENT: f64 = 1.1;

/// Experience needed to advance from `level` to the next one.
///
/// `10 + floor(level^1.1)`, so it gets gradually more expensive.
pub fn level_up_cost(level: u32) -> u32 {
    let growth = (level as f64).powf(LEVEL_UP_EXPONENT).floor();
    LEVEL_UP_BASE_COST.saturating_add(growth as u32)
}

/// Total experience spent to climb from level 0 to `level`
pub fn total_cost_to_level(level: u32) -> u64 {
    (0..level).map(|l| level_up_cost(l) as u64).sum()
}

/// Maximum hit points for a base pool and constitution score
pub fn max_hp(base_hp: u32, constitution: u32) -> u32 {
    base_hp.saturating_add(constitution.saturating_mul(HP_PER_CONSTITUTION))
}

/// Get a title/rank based on level
pub fn level_title(level: u32) -> &'static str {
    match level {
        0..=2 => "Novice",
        3..=4 => "Apprentice",
        5..=7 => "Journeyman",
        8..=10 => "Adept",
        11..=14 => "Expert",
        15..=18 => "Master",
        19..=24 => "Grandmaster",
        _ => "Legend",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_up_cost() {
        assert_eq!(level_up_cost(0), 10); // 0^1.1 = 0
        assert_eq!(level_up_cost(1), 11);
        assert_eq!(level_up_cost(2), 12); // 2^1.1 = 2.14
        assert_eq!(level_up_cost(10), 22); // 10^1.1 = 12.59
    }

    #[test]
    fn test_level_up_cost_never_decreases() {
        let mut previous = level_up_cost(0);
        for level in 1..500 {
            let cost = level_up_cost(level);
            assert!(cost >= previous, "cost dropped at level {}", level);
            previous = cost;
        }
    }

    #[test]
    fn test_level_up_cost_saturates() {
        assert_eq!(level_up_cost(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_total_cost_to_level() {
        assert_eq!(total_cost_to_level(0), 0);
        assert_eq!(total_cost_to_level(3), 10 + 11 + 12);
    }

    #[test]
    fn test_max_hp() {
        assert_eq!(max_hp(BASE_HP, 0), 10);
        assert_eq!(max_hp(BASE_HP, 5), 20);
    }

    #[test]
    fn test_level_title() {
        assert_eq!(level_title(0), "Novice");
        assert_eq!(level_title(5), "Journeyman");
        assert_eq!(level_title(25), "Legend");
    }
}
