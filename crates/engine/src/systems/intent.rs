//! Stage 1: turn the input snapshot into one-tick intent components.

use crate::components::{DropIntent, MoveIntent, RotateIntent};
use crate::env::Env;
use crate::systems::TickState;
use crate::types::{Action, RotateDir};
use crate::world::World;

/// Opposing moves or opposing rotations pressed together cancel out. A
/// rotation intent attached before the tick is left in place.
pub fn translate_input(world: &mut World, env: &Env, _tick: &mut TickState) {
    let Some(entity) = world.active_entity() else {
        return;
    };
    let input = env.input;

    let dx = input.pressed(Action::MoveRight) as i32 - input.pressed(Action::MoveLeft) as i32;
    if dx != 0 {
        world.store.move_intent.insert(entity, MoveIntent { dx });
    }

    let rotate = match (input.pressed(Action::RotateCw), input.pressed(Action::RotateCcw)) {
        (true, false) => Some(RotateDir::Cw),
        (false, true) => Some(RotateDir::Ccw),
        _ => None,
    };
    if let Some(dir) = rotate {
        if !world.store.rotate_intent.contains(entity) {
            world.store.rotate_intent.insert(entity, RotateIntent { dir });
        }
    }

    if input.pressed(Action::HardDrop) {
        world.store.drop_intent.insert(entity, DropIntent::Hard);
    } else if input.pressed(Action::SoftDrop) {
        world.store.drop_intent.insert(entity, DropIntent::Soft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::InputSnapshot;
    use crate::world::make_world;
    use tetris_rule_core::Settings;

    fn run(actions: &[Action]) -> World {
        let settings = Settings::default();
        let mut world = make_world(&settings).unwrap();
        let input = InputSnapshot::from_actions(actions.iter().copied());
        let env = Env::new(&input, &settings, 0.0);
        translate_input(&mut world, &env, &mut TickState::default());
        world
    }

    #[test]
    fn opposing_moves_cancel() {
        let world = run(&[Action::MoveLeft, Action::MoveRight]);
        assert!(world.store.move_intent.is_empty());

        let world = run(&[Action::MoveLeft]);
        let entity = world.active_entity().unwrap();
        assert_eq!(world.store.move_intent.get(entity), Some(&MoveIntent { dx: -1 }));
    }

    #[test]
    fn opposing_rotations_cancel() {
        let world = run(&[Action::RotateCw, Action::RotateCcw]);
        assert!(world.store.rotate_intent.is_empty());

        let world = run(&[Action::RotateCcw]);
        let entity = world.active_entity().unwrap();
        assert_eq!(world.store.rotate_intent.get(entity), Some(&RotateIntent::ccw()));
    }

    #[test]
    fn hard_drop_wins_over_soft_drop() {
        let world = run(&[Action::SoftDrop, Action::HardDrop]);
        let entity = world.active_entity().unwrap();
        assert_eq!(world.store.drop_intent.get(entity), Some(&DropIntent::Hard));
    }
}
