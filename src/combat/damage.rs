//! Damage calculation
//!
//! Weapon rolls and the strength bonus on top of them.

use rand::Rng;

use crate::items::Weapon;

/// Bonus damage from strength
pub fn strength_bonus(strength: u32) -> u32 {
    strength / 2
}

/// Roll a weapon's damage, inclusive of both ends of its range
pub fn roll_weapon(weapon: &Weapon, rng: &mut impl Rng) -> u32 {
    let (min, max) = weapon.damage_range();
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Damage dealt by one attack
pub fn attack_damage(weapon: &Weapon, strength: u32, rng: &mut impl Rng) -> u32 {
    roll_weapon(weapon, rng).saturating_add(strength_bonus(strength))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_strength_bonus() {
        assert_eq!(strength_bonus(0), 0);
        assert_eq!(strength_bonus(5), 2);
        assert_eq!(strength_bonus(10), 5);
    }

    #[test]
    fn test_roll_within_range() {
        let weapon = Weapon::new("Long Sword", 5, 9);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let roll = roll_weapon(&weapon, &mut rng);
            assert!((5..=9).contains(&roll));
        }
    }

    #[test]
    fn test_fixed_range_weapon() {
        let weapon = Weapon::new("Rock", 3, 3);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(roll_weapon(&weapon, &mut rng), 3);
    }

    #[test]
    fn test_attack_adds_strength() {
        let weapon = Weapon::new("Rock", 3, 3);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(attack_damage(&weapon, 4, &mut rng), 5);
    }
}
