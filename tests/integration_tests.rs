//! Match-level scenarios driven through the public API.

use tui_pong::core::{Ball, GameState, Paddle};
use tui_pong::types::{
    CoreEvent, DVec2, Phase, Side, TickSignal, FIELD_HEIGHT, FIELD_WIDTH, SERVE_RIGHT, TICK_MS,
};

fn served() -> GameState {
    let mut state = GameState::new();
    state.serve_default();
    state.take_events();
    state
}

#[test]
fn test_serve_centers_ball_with_given_velocity() {
    let mut state = GameState::new();
    state.serve_ball(DVec2::new(-4.0, 2.5));

    assert_eq!(
        state.ball.center(),
        DVec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)
    );
    assert_eq!(state.ball.velocity, DVec2::new(-4.0, 2.5));
}

#[test]
fn test_ball_past_left_edge_scores_for_right() {
    let mut state = served();
    state.ball.rect.pos = DVec2::new(-10.0, 450.0);
    state.ball.velocity = DVec2::new(-4.0, 0.0);

    assert_eq!(state.update(TICK_MS), TickSignal::Continue);

    assert_eq!(state.score(Side::Left), 0);
    assert_eq!(state.score(Side::Right), 1);
    assert_eq!(state.ball.velocity, SERVE_RIGHT);
    assert_eq!(state.ball.center(), state.center());
}

#[test]
fn test_first_point_wins_on_next_tick() {
    let mut state = served();
    state.left.add_point();

    assert_eq!(state.update(TICK_MS), TickSignal::Halt);

    let snap = state.snapshot();
    assert_eq!(snap.phase, Phase::Won);
    assert_eq!(snap.banner_text(), Some("Player 1 win!"));
    assert!(snap.reset_control);
    assert!(!snap.score_labels);
}

#[test]
fn test_ball_below_floor_flips_without_clamp() {
    let mut state = served();
    state.ball.rect.pos = DVec2::new(300.0, -0.5);
    state.ball.velocity = DVec2::new(1.0, -1.0);

    state.update(TICK_MS);

    assert_eq!(state.ball.velocity.y, 1.0);
    assert_eq!(state.ball.y(), -1.5);
}

#[test]
fn test_non_colliding_bounce_is_identity() {
    let mut paddle = Paddle::for_side(Side::Right, FIELD_WIDTH);
    paddle.set_center_y(300.0);

    for x in [0.0, 200.0, 400.0, 700.0] {
        let mut ball = Ball::new();
        ball.rect.pos = DVec2::new(x, 300.0);
        ball.velocity = DVec2::new(3.0, -2.0);
        paddle.bounce_ball(&mut ball);
        assert_eq!(ball.velocity, DVec2::new(3.0, -2.0));
    }
}

#[test]
fn test_rally_speeds_up_on_each_face_hit() {
    let mut state = served();
    let mut speeds = Vec::new();
    let mut last_vx = state.ball.velocity.x;

    for _ in 0..2000 {
        if state.update(TICK_MS) == TickSignal::Halt {
            break;
        }
        let vx = state.ball.velocity.x;
        if vx.signum() != last_vx.signum() && state.score(Side::Left) + state.score(Side::Right) == 0 {
            speeds.push(vx.abs());
        }
        last_vx = vx;
    }

    assert!(speeds.len() >= 2, "expected a rally, got {:?}", speeds);
    for pair in speeds.windows(2) {
        assert!((pair[1] - pair[0] * 1.1).abs() < 1e-9);
    }
}

#[test]
fn test_full_match_then_restart() {
    let mut state = served();
    let mut ticks = 0;
    while state.update(TICK_MS) == TickSignal::Continue {
        ticks += 1;
        assert!(ticks < 10_000, "match never finished");
    }

    let events = state.take_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, CoreEvent::Point { .. })));
    assert!(matches!(events.last(), Some(CoreEvent::Won { .. })));

    state.restart();
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.score(Side::Left) + state.score(Side::Right), 0);
    assert_eq!(state.update(TICK_MS), TickSignal::Continue);
}

#[test]
fn test_drags_follow_field_thirds() {
    let mut state = served();
    state.drag(FIELD_WIDTH * 0.1, 123.0);
    state.drag(FIELD_WIDTH * 0.9, 456.0);
    state.drag(FIELD_WIDTH * 0.5, 10.0);

    assert_eq!(state.left.center_y(), 123.0);
    assert_eq!(state.right.center_y(), 456.0);
}
