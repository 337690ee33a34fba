//! Property tests: state invariants hold under arbitrary play

use std::cell::RefCell;
use std::rc::Rc;

use chicken_cross::consts::*;
use chicken_cross::sim::Key;
use chicken_cross::{Game, GameConfig, HudCallback, LevelConfig};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Press(Key),
    Release(Key),
    /// Advance time by this many ms and run a frame
    Frame(f64),
    /// Teleport to the far side to force a level clear
    JumpToGoal,
    /// Drop a car on the player to force a hit
    Collide,
}

fn key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Boost),
        Just(Key::Pause),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        2 => key().prop_map(Action::Press),
        2 => key().prop_map(Action::Release),
        4 => (0.0f64..200.0).prop_map(Action::Frame),
        1 => Just(Action::JumpToGoal),
        1 => Just(Action::Collide),
    ]
}

fn levels() -> impl Strategy<Value = Vec<LevelConfig>> {
    prop::collection::vec(
        (1u32..100, 1u32..7, 0.5f32..5.0, 1u32..4).prop_map(|(id, lanes, speed, cars_per_lane)| {
            LevelConfig {
                id,
                lanes,
                speed,
                cars_per_lane,
            }
        }),
        0..5,
    )
}

fn recording_game(levels: Vec<LevelConfig>, seed: u64) -> (Game, Rc<RefCell<Vec<(u32, u64, u8)>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let hud: HudCallback = Box::new(move |l, s, v| sink.borrow_mut().push((l, s, v)));
    (Game::new(GameConfig::default(), levels, hud, seed).unwrap(), log)
}

proptest! {
    #[test]
    fn lives_and_level_index_stay_in_range(
        levels in levels(),
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..200),
    ) {
        let (mut game, hud) = recording_game(levels, seed);
        game.start(0.0);
        let mut now = 0.0;

        for action in actions {
            match action {
                Action::Press(k) => game.key_down(k),
                Action::Release(k) => game.key_up(k),
                Action::Frame(ms) => {
                    now += ms;
                    prop_assert!(game.frame(now).is_some());
                }
                Action::JumpToGoal => game.state_mut().player.pos.y = 21.0,
                Action::Collide => {
                    let state = game.state_mut();
                    let pos = state.player.pos;
                    if let Some(car) = state.cars.first_mut() {
                        car.pos = pos;
                    }
                }
            }

            let state = game.state();
            prop_assert!(state.runtime.lives <= MAX_LIVES);
            prop_assert!(state.runtime.level_index < state.levels.len());
            prop_assert!(!state.levels.is_empty());
            // An overlay always pauses the game
            if state.overlay.auto_pause() {
                prop_assert!(state.runtime.paused);
                prop_assert!(state.overlay.message().is_some());
            }
            prop_assert_eq!(state.cars.len(), state.level().car_count());
        }

        for &(_, _, lives) in hud.borrow().iter() {
            prop_assert!(lives <= MAX_LIVES);
        }
    }

    #[test]
    fn pause_key_cannot_break_an_overlay(presses in 1usize..20) {
        let (mut game, _) = recording_game(Vec::new(), 11);
        game.start(0.0);
        for car in &mut game.state_mut().cars {
            car.pos.y = -10_000.0;
        }
        game.state_mut().player.pos.y = 21.0;
        game.frame(16.0);
        prop_assert!(game.state().overlay.auto_pause());

        for _ in 0..presses {
            game.key_down(Key::Pause);
            game.key_up(Key::Pause);
            prop_assert!(game.state().runtime.paused);
        }
    }
}

proptest! {
    #[test]
    fn far_side_reachable_whenever_config_is_accepted(
        height in 100.0f32..800.0,
        lane_height in 1.0f32..100.0,
    ) {
        prop_assume!(lane_height <= height);
        let Ok(config) = GameConfig::new(640.0, height, lane_height) else {
            prop_assert!(lane_height * 0.5 <= PLAYER_SIZE);
            return Ok(());
        };
        let hud: HudCallback = Box::new(|_, _, _| {});
        let mut game = Game::new(config, Vec::new(), hud, 3).unwrap();
        game.state_mut().cars.clear();
        game.start(0.0);
        game.key_down(Key::Up);

        let mut now = 0.0;
        while game.state().score.get() == 0 && now < 60_000.0 {
            now += BASELINE_FRAME_MS;
            game.frame(now);
        }
        prop_assert_eq!(game.state().score.get(), LEVEL_CLEAR_BONUS);
    }
}

#[test]
fn empty_level_list_runs_builtin_level() {
    let (mut game, hud) = recording_game(Vec::new(), 1);
    assert_eq!(game.state().levels.len(), 1);
    assert_eq!(*game.state().level(), LevelConfig::DEFAULT);

    game.start(0.0);
    game.frame(16.0);
    assert_eq!(hud.borrow()[0], (1, 0, START_LIVES));
}

#[test]
fn game_over_cycle_through_controller() {
    let (mut game, hud) = recording_game(
        vec![
            LevelConfig {
                id: 10,
                lanes: 2,
                speed: 1.0,
                cars_per_lane: 1,
            },
            LevelConfig {
                id: 20,
                lanes: 3,
                speed: 1.0,
                cars_per_lane: 2,
            },
        ],
        77,
    );
    game.start(0.0);

    // Clear level 10
    for car in &mut game.state_mut().cars {
        car.pos.y = -10_000.0;
    }
    game.state_mut().player.pos.y = 21.0;
    game.frame(16.0);
    assert_eq!(game.state().level().id, 20);
    assert_eq!(game.state().score.get(), LEVEL_CLEAR_BONUS);

    // Wait out the banner
    game.frame(16.0 + NEXT_LEVEL_MS);
    assert!(!game.state().runtime.paused);

    // Lose every life
    let mut now = 16.0 + NEXT_LEVEL_MS;
    while game.state().runtime.lives > 0 {
        let state = game.state_mut();
        let pos = state.player.pos;
        state.cars[0].pos = pos;
        now += 16.0;
        game.frame(now);
    }
    assert_eq!(game.state().overlay.message(), Some(GAME_OVER_TEXT));
    assert_eq!(hud.borrow().last().map(|h| h.2), Some(0));

    // Frozen until the overlay expires, then a fresh run
    now += GAME_OVER_MS;
    game.frame(now);
    let state = game.state();
    assert_eq!(state.runtime.lives, START_LIVES);
    assert_eq!(state.score.get(), 0);
    assert_eq!(state.level().id, 10);
    assert_eq!(state.cars.len(), 2);
    assert_eq!(hud.borrow().last(), Some(&(10, 0, START_LIVES)));
}
