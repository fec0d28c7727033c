//! Input snapshot and the movement it drives.
use crate::core::player::{Player, Step, Turn};

/// Press state of the logical controls for one frame.
///
/// Platforms build this by draining every event queued since the previous
/// frame, so a quit request is never lost behind key events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub forward: bool,
    pub backward: bool,
    pub quit: bool,
}

/// Applies one frame of input: turns first, then moves with the fresh delta.
/// Opposite controls held together cancel out.
pub fn process_events(input: &InputState, player: &mut Player, rotate_step: f32) {
    if input.rotate_left {
        player.rotate(Turn::Left, rotate_step);
    }
    if input.rotate_right {
        player.rotate(Turn::Right, rotate_step);
    }
    if input.forward {
        player.step(Step::Forward);
    }
    if input.backward {
        player.step(Step::Backward);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn idle_input_leaves_player_untouched() {
        let mut p = Player::spawn(75.0, 75.0);
        let before = p;
        process_events(&InputState::default(), &mut p, 0.1);
        assert_eq!(p, before);
    }

    #[test]
    fn turn_then_walk_uses_new_heading() {
        let mut p = Player::spawn(75.0, 75.0);
        let input = InputState {
            rotate_right: true,
            forward: true,
            ..Default::default()
        };
        process_events(&input, &mut p, 0.1);
        assert!((p.angle() - 0.1).abs() < 1e-6);
        let expected = Vec2::new(75.0 + 5.0 * 0.1f32.cos(), 75.0 + 5.0 * 0.1f32.sin());
        assert!((p.pos - expected).length() < 1e-4);
    }

    #[test]
    fn opposing_controls_cancel() {
        let mut p = Player::spawn(75.0, 75.0);
        p.rotate(Turn::Right, 0.5);
        let before = p;
        let input = InputState {
            rotate_left: true,
            rotate_right: true,
            forward: true,
            backward: true,
            quit: false,
        };
        process_events(&input, &mut p, 0.1);
        assert!((p.angle() - before.angle()).abs() < 1e-5);
        assert!((p.pos - before.pos).length() < 1e-4);
    }
}
