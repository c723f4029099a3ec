use tui_snake::core::{
    generate_food, Collision, EndReason, Game, GameEvent, GameState, Phase, SimpleRng, Status,
    TickOutcome,
};
use tui_snake::types::{Direction, GameAction, Position, FOOD_SCORE, GRID_HEIGHT, GRID_WIDTH};

fn p(x: i16, y: i16) -> Position {
    Position::new(x, y)
}

/// A running game whose round was laid out by hand.
fn game_with(body: &[Position], dir: Direction, food: Position) -> Game {
    let mut game = Game::new(1);
    game.start_with(GameState::from_layout(body, dir, food, 99).unwrap());
    game.take_last_event();
    game
}

#[test]
fn test_session_waits_for_start() {
    let mut game = Game::new(42);
    assert_eq!(game.phase(), Phase::Over);
    assert_eq!(game.episode_id(), 0);

    let head = game.state().head();
    assert_eq!(game.tick(), TickOutcome::Frozen);
    assert_eq!(game.state().head(), head);

    game.apply_action(GameAction::Start);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.take_last_event(), Some(GameEvent::Started { episode: 1 }));
}

#[test]
fn test_fresh_round_layout() {
    let mut game = Game::new(7);
    game.restart();
    let state = game.state();

    assert_eq!(state.head(), p(10, 7));
    assert_eq!(state.len(), 1);
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(state.score(), 0);
    assert_eq!(state.status(), Status::Alive);
    assert!(state.food().in_bounds());
    assert!(!state.snake().contains(state.food()));
}

#[test]
fn test_non_food_tick_keeps_length() {
    let mut game = game_with(&[p(3, 3), p(2, 3), p(1, 3)], Direction::Right, p(15, 12));
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.state().len(), 3);
    assert_eq!(game.state().head(), p(4, 3));
    assert_eq!(game.state().snake().tail(), p(2, 3));
}

#[test]
fn test_forced_food_scores_and_grows() {
    let mut game = game_with(&[Position::spawn()], Direction::Right, p(11, 7));
    assert_eq!(game.tick(), TickOutcome::Ate);

    let state = game.state();
    assert_eq!(state.score(), FOOD_SCORE);
    assert_eq!(state.score(), 10);
    assert_eq!(state.len(), 2);
    assert_ne!(state.food(), p(11, 7));
    assert!(!state.snake().contains(state.food()));
}

#[test]
fn test_five_ticks_right_from_spawn() {
    let mut game = game_with(&[Position::spawn()], Direction::Right, p(0, 0));
    for _ in 0..5 {
        assert_eq!(game.tick(), TickOutcome::Moved);
    }
    assert_eq!(game.state().head(), p(15, 7));
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn test_reversal_is_ignored_even_for_single_cell() {
    let mut game = game_with(&[Position::spawn()], Direction::Right, p(0, 0));
    game.set_pending_direction(Direction::Left);
    assert_eq!(game.tick(), TickOutcome::Moved);
    assert_eq!(game.state().direction(), Direction::Right);
    assert_eq!(game.state().head(), p(11, 7));
}

#[test]
fn test_last_direction_request_wins() {
    let mut game = game_with(&[Position::spawn()], Direction::Right, p(0, 0));
    game.set_pending_direction(Direction::Up);
    game.set_pending_direction(Direction::Down);
    game.tick();
    assert_eq!(game.state().head(), p(10, 8));

    // Pending resets to the applied heading, so the next tick keeps going down.
    assert_eq!(game.pending_direction(), Direction::Down);
    game.tick();
    assert_eq!(game.state().head(), p(10, 9));
}

#[test]
fn test_wall_collision_ends_round() {
    let mut game = game_with(&[p(GRID_WIDTH as i16 - 1, 4)], Direction::Right, p(0, 0));
    assert_eq!(game.tick(), TickOutcome::Crashed(Collision::Wall));
    assert_eq!(game.phase(), Phase::Over);
    assert!(!game.state().alive());
    assert_eq!(game.state().head(), p(GRID_WIDTH as i16 - 1, 4));
    assert_eq!(
        game.take_last_event(),
        Some(GameEvent::Ended {
            episode: 1,
            score: 0,
            reason: EndReason::Crashed(Collision::Wall),
        })
    );

    // Frozen until restarted.
    assert_eq!(game.tick(), TickOutcome::Frozen);
    game.restart();
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.state().head(), Position::spawn());
    assert_eq!(game.episode_id(), 2);
}

#[test]
fn test_self_collision_on_length_four_loop() {
    // Head turns down into the cell its own tail currently occupies.
    let body = [p(5, 5), p(6, 5), p(6, 6), p(5, 6)];
    let mut game = game_with(&body, Direction::Left, p(0, 0));
    game.set_pending_direction(Direction::Down);

    assert_eq!(game.tick(), TickOutcome::Crashed(Collision::SelfCollision));
    assert_eq!(game.state().status(), Status::Crashed(Collision::SelfCollision));
    let cells: Vec<Position> = game.state().snake().iter().collect();
    assert_eq!(cells, body.to_vec());
}

#[test]
fn test_long_session_keeps_invariants() {
    let mut game = Game::new(2024);
    let mut steer = SimpleRng::new(5);
    game.restart();

    for _ in 0..5_000 {
        if !game.is_running() {
            game.restart();
        }
        if steer.next_range(3) == 0 {
            game.set_pending_direction(Direction::ALL[steer.next_range(4) as usize]);
        }

        let before = game.state().len();
        let score = game.state().score();
        match game.tick() {
            TickOutcome::Ate => {
                assert_eq!(game.state().len(), before + 1);
                assert_eq!(game.state().score(), score + 10);
            }
            TickOutcome::Moved | TickOutcome::Crashed(_) => {
                assert_eq!(game.state().len(), before);
                assert_eq!(game.state().score(), score);
            }
            TickOutcome::Won | TickOutcome::Frozen => {}
        }

        let state = game.state();
        let mut seen = std::collections::HashSet::new();
        for cell in state.snake().iter() {
            assert!(cell.in_bounds(), "segment out of bounds: {cell:?}");
            assert!(seen.insert(cell), "duplicate segment: {cell:?}");
        }
        if state.is_active() {
            assert!(!state.snake().contains(state.food()));
        }
    }
}

#[test]
fn test_generate_food_avoids_occupied_cells() {
    let mut rng = SimpleRng::new(11);
    // Only the last column is free.
    let free_x = GRID_WIDTH as i16 - 1;
    for _ in 0..200 {
        let food = generate_food(&mut rng, |c| c.x != free_x).unwrap();
        assert_eq!(food.x, free_x);
        assert!(food.y >= 0 && food.y < GRID_HEIGHT as i16);
    }
    assert_eq!(generate_food(&mut rng, |_| true), None);
}

#[test]
fn test_same_seed_same_rounds() {
    let mut a = Game::new(314);
    let mut b = Game::new(314);
    a.restart();
    b.restart();
    for _ in 0..50 {
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
