//! Frame-loop tests: events in, queries, then `begin_frame()`

use glam::Vec2;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use kinetic::app::PlayerControls;
use kinetic::input::{InputMap, InputSystem, actions};
use kinetic::sim::{Avatar, OrbitCamera, World};

#[test]
fn test_key_lifecycle_across_frames() {
    let mut input = InputSystem::new();

    input.handle_physical(KeyCode::KeyW, true);
    assert!(input.tracker().is_pressed_this_frame(actions::MOVE_FORWARD));

    for _ in 0..3 {
        input.begin_frame();
        assert!(input.tracker().is_held(actions::MOVE_FORWARD));
        assert!(!input.tracker().is_pressed_this_frame(actions::MOVE_FORWARD));
    }

    input.handle_physical(KeyCode::KeyW, false);
    assert!(!input.tracker().is_held(actions::MOVE_FORWARD));
    assert!(input.tracker().is_released_this_frame(actions::MOVE_FORWARD));

    input.begin_frame();
    assert!(!input.tracker().is_released_this_frame(actions::MOVE_FORWARD));
}

#[test]
fn test_alternate_keys_share_an_action() {
    let mut input = InputSystem::new();

    input.handle_physical(KeyCode::ArrowUp, true);
    assert!(input.tracker().is_held(actions::MOVE_FORWARD));

    input.begin_frame();
    input.handle_physical(KeyCode::ArrowUp, false);
    assert!(!input.tracker().is_held(actions::MOVE_FORWARD));
}

#[test]
fn test_releasing_one_of_two_keys_keeps_the_avatar_moving() {
    let mut input = InputSystem::new();
    let mut world = World::demo();
    let mut camera = OrbitCamera::default();
    let controls = PlayerControls::default();

    input.handle_physical(KeyCode::KeyW, true);
    input.handle_physical(KeyCode::ArrowUp, true);
    input.begin_frame();

    input.handle_physical(KeyCode::ArrowUp, false);
    assert!(input.tracker().is_held(actions::MOVE_FORWARD));

    controls.apply(input.tracker(), &mut world, &mut camera);
    let player = world.get_typed::<Avatar>(World::PLAYER).unwrap();
    assert!(player.velocity().length() > 0.0);

    input.begin_frame();
    input.handle_physical(KeyCode::KeyW, false);
    assert!(!input.tracker().is_held(actions::MOVE_FORWARD));
    assert!(input.tracker().is_released_this_frame(actions::MOVE_FORWARD));
}

#[test]
fn test_mouse_buttons_are_actions() {
    let mut input = InputSystem::new();
    input.handle_physical(MouseButton::Right, true);
    assert!(input.tracker().is_held(actions::MOUSE_RIGHT));
    assert!(!input.tracker().is_held(actions::MOUSE_LEFT));
}

#[test]
fn test_pointer_motion_nets_out_within_a_frame() {
    let mut input = InputSystem::new();

    input.handle_pointer_motion(5.0, 4.0);
    input.handle_pointer_motion(-2.0, -1.0);
    // Window Y grows downward; the pointer delta counts up as positive
    assert_eq!(input.tracker().pointer_delta(), Vec2::new(3.0, -3.0));

    input.begin_frame();
    assert_eq!(input.tracker().pointer_delta(), Vec2::ZERO);
}

#[test]
fn test_empty_binding_table_ignores_everything() {
    let mut input = InputSystem::with_bindings(InputMap::new());

    input.handle_physical(KeyCode::Space, true);
    input.handle_pointer_motion(10.0, 10.0);

    assert!(input.tracker().is_frame_empty());
    assert_eq!(input.tracker().held_actions().count(), 0);
}

#[test]
fn test_runtime_mapping_drives_the_same_action() {
    let mut input = InputSystem::new();
    input.register_mapping(actions::JUMP, KeyCode::KeyJ);
    input.register_mapping(actions::JUMP, KeyCode::KeyJ);

    input.handle_physical(KeyCode::KeyJ, true);
    assert!(input.tracker().is_pressed_this_frame(actions::JUMP));
}

#[test]
fn test_jump_fires_once_per_press_in_game_loop() {
    let mut input = InputSystem::new();
    let mut world = World::demo();
    let mut camera = OrbitCamera::default();
    let controls = PlayerControls::default();

    input.handle_physical(KeyCode::Space, true);

    controls.apply(input.tracker(), &mut world, &mut camera);
    assert!(!world.get_typed::<Avatar>(World::PLAYER).unwrap().is_grounded());

    // Space stays held for two seconds; the avatar lands and stays down
    for _ in 0..120 {
        world.tick(1.0 / 60.0);
        input.begin_frame();
        controls.apply(input.tracker(), &mut world, &mut camera);
    }

    assert!(input.tracker().is_held(actions::JUMP));
    assert!(world.get_typed::<Avatar>(World::PLAYER).unwrap().is_grounded());
}
