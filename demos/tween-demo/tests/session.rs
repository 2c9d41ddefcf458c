use glam::Vec2;
use tween_demo::{DemoConfig, InputEvent, InputQueue, Key, TweenDemo};
use tween_engine::{Direction, Easing};

#[test]
fn scripted_session_follows_clicks_and_keys() {
    let mut demo = TweenDemo::new(DemoConfig::default(), 1_000).unwrap();
    let mut input = InputQueue::new();

    input.push(InputEvent::KeyDown(Key::Right));
    input.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
    demo.frame(1_000, &mut input).unwrap();
    assert!(input.is_empty());
    assert_eq!(demo.tween().map(|t| t.easing()), Some(Easing::Quad(Direction::In)));
    assert_eq!(demo.ball(), Vec2::new(320.0, 240.0));

    // Quad::In halfway covers a quarter of the distance.
    demo.frame(1_500, &mut input).unwrap();
    assert_eq!(demo.ball(), Vec2::new(240.0, 180.0));

    // A long hitch finishes the tween exactly on the click.
    demo.frame(4_000, &mut input).unwrap();
    assert_eq!(demo.ball(), Vec2::ZERO);
    assert!(!demo.is_animating());

    // Changing easer mid-session only affects the next tween.
    input.push(InputEvent::KeyDown(Key::Left));
    input.push(InputEvent::KeyDown(Key::Left));
    input.push(InputEvent::PointerDown { x: 100.0, y: 100.0 });
    demo.frame(4_000, &mut input).unwrap();
    assert_eq!(demo.caption(), Ok("Bounce::InOut"));
    assert_eq!(demo.tween().map(|t| t.origin()), Some(Vec2::ZERO));

    demo.frame(5_000, &mut input).unwrap();
    assert_eq!(demo.ball(), Vec2::new(100.0, 100.0));

    input.push(InputEvent::KeyDown(Key::Escape));
    demo.frame(5_016, &mut input).unwrap();
    assert!(demo.close_requested());
}

#[test]
fn config_selects_initial_easing_and_duration() {
    let config = DemoConfig::from_json(r#"{ "initial_easing": "Cubic::Out", "tween_duration": 2.0 }"#).unwrap();
    let mut demo = TweenDemo::new(config, 0).unwrap();
    assert_eq!(demo.caption(), Ok("Cubic::Out"));

    demo.move_to(Vec2::new(0.0, 240.0)).unwrap();
    demo.tick(1.0).unwrap();
    assert!(demo.is_animating());
    demo.tick(1.0).unwrap();
    assert_eq!(demo.ball(), Vec2::new(0.0, 240.0));
}

#[test]
fn graph_follows_selected_curve() {
    let mut demo = TweenDemo::new(DemoConfig::default(), 0).unwrap();
    let linear = demo.graph().unwrap();
    demo.handle(InputEvent::KeyDown(Key::Right)).unwrap();
    let quad_in = demo.graph().unwrap();

    // Same x spread, Quad::In lags behind in y (screen y grows downwards).
    assert_eq!(linear.curve[50].x, quad_in.curve[50].x);
    assert!(quad_in.curve[50].y > linear.curve[50].y);
    assert_eq!(linear.curve.first(), quad_in.curve.first());
    assert_eq!(linear.curve.last(), quad_in.curve.last());
}
