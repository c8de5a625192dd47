use cgmath::Vector4;

use crate::input::{KeyCode, KeyState};

/// Distance moved per frame while a direction key is held.
pub const STEP: f32 = 0.05;
/// Bound of both axes, the quad stays inside `[-LIMIT, LIMIT]`.
pub const LIMIT: f32 = 0.5;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset for the position uniform.
    pub fn to_vec4(self) -> Vector4<f32> {
        Vector4::new(self.x, self.y, 0.0, 1.0)
    }
}

///
/// Moves `position` one step along every axis where exactly one of the two
/// opposing arrow keys is held.
///
/// The limit is tested on the current value before stepping, the stepped value
/// is then saturated so it never ends up past the limit.
///
pub fn update_position(keys: &KeyState, position: &mut Position) {
    position.x = step_axis(
        position.x,
        keys.is_held(KeyCode::RIGHT),
        keys.is_held(KeyCode::LEFT),
    );
    position.y = step_axis(
        position.y,
        keys.is_held(KeyCode::UP),
        keys.is_held(KeyCode::DOWN),
    );
}

fn step_axis(value: f32, positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) if value < LIMIT => (value + STEP).min(LIMIT),
        (false, true) if value > -LIMIT => (value - STEP).max(-LIMIT),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const DIRECTIONS: [KeyCode; 4] = [KeyCode::UP, KeyCode::DOWN, KeyCode::LEFT, KeyCode::RIGHT];

    #[test]
    fn holding_up_saturates_at_limit() {
        let mut keys = KeyState::new();
        let mut pos = Position::default();
        keys.set_key(KeyCode::UP, true);

        for _ in 0..11 {
            update_position(&keys, &mut pos);
        }
        assert_eq!(pos.y, 0.5);
        assert_eq!(pos.x, 0.0);

        for _ in 0..5 {
            update_position(&keys, &mut pos);
        }
        assert_eq!(pos.y, 0.5);
    }

    #[test]
    fn left_moves_negative_x() {
        let mut keys = KeyState::new();
        let mut pos = Position::default();
        keys.set_key(KeyCode::LEFT, true);

        update_position(&keys, &mut pos);
        assert_eq!(pos, Position::new(-STEP, 0.0));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut keys = KeyState::new();
        let mut pos = Position::new(0.1, -0.2);
        keys.set_key(KeyCode::UP, true);
        keys.set_key(KeyCode::DOWN, true);
        keys.set_key(KeyCode::LEFT, true);
        keys.set_key(KeyCode::RIGHT, true);

        update_position(&keys, &mut pos);
        assert_eq!(pos, Position::new(0.1, -0.2));
    }

    #[test]
    fn off_grid_value_does_not_overshoot() {
        let mut keys = KeyState::new();
        let mut pos = Position::new(0.47, 0.47);
        keys.set_key(KeyCode::UP, true);
        keys.set_key(KeyCode::RIGHT, true);

        update_position(&keys, &mut pos);
        assert_eq!(pos, Position::new(0.5, 0.5));

        keys.set_key(KeyCode::UP, false);
        keys.set_key(KeyCode::RIGHT, false);
        keys.set_key(KeyCode::DOWN, true);
        let mut pos = Position::new(0.0, -0.47);
        update_position(&keys, &mut pos);
        assert_eq!(pos.y, -0.5);
    }

    #[test]
    fn random_input_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut keys = KeyState::new();
        let mut pos = Position::default();

        for _ in 0..10_000 {
            let key = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
            keys.set_key(key, rng.gen_bool(0.5));

            let before = pos;
            update_position(&keys, &mut pos);

            assert!((-LIMIT..=LIMIT).contains(&pos.x), "x out of bounds: {}", pos.x);
            assert!((-LIMIT..=LIMIT).contains(&pos.y), "y out of bounds: {}", pos.y);

            if keys.is_held(KeyCode::UP) == keys.is_held(KeyCode::DOWN) {
                assert_eq!(pos.y, before.y);
            }
            if keys.is_held(KeyCode::LEFT) == keys.is_held(KeyCode::RIGHT) {
                assert_eq!(pos.x, before.x);
            }
        }
    }

    #[test]
    fn uniform_has_zero_depth() {
        assert_eq!(
            Position::new(0.25, -0.1).to_vec4(),
            Vector4::new(0.25, -0.1, 0.0, 1.0)
        );
    }
}
