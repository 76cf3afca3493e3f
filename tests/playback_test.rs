// Playback engine driven by real generator output

use algotrace::playback::{
    delay_for_speed, Direction, ManualClock, PlaybackEngine, PlaybackState, MAX_SPEED, MIN_SPEED,
};
use algotrace::registry::{AlgorithmInput, Registry};
use algotrace::VizError;
use std::time::Duration;

fn loaded(id: &str) -> (PlaybackEngine<ManualClock>, ManualClock) {
    let registry = Registry::new();
    let steps = registry
        .generate(id, &AlgorithmInput::new(vec![5, 3, 4, 1, 2]).with_target(4))
        .unwrap();
    let clock = ManualClock::new();
    let mut engine = PlaybackEngine::with_clock(clock.clone());
    engine.load(steps);
    (engine, clock)
}

#[test]
fn test_bounds() {
    let (mut engine, _) = loaded("bubble");
    let last = engine.len() - 1;

    engine.step(Direction::Backward);
    assert_eq!(engine.current_index(), 0);

    engine.go_to_end();
    assert_eq!(engine.current_index(), last);
    engine.step(Direction::Forward);
    assert_eq!(engine.current_index(), last);

    engine.go_to_start();
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn test_speed_range() {
    for speed in MIN_SPEED..=MAX_SPEED {
        let delay = delay_for_speed(speed).unwrap();
        assert_eq!(delay, Duration::from_millis(1100 - u64::from(speed) * 100));
    }
    let (mut engine, _) = loaded("bubble");
    assert_eq!(engine.set_speed(0), Err(VizError::InvalidSpeed(0)));
    assert_eq!(engine.set_speed(11), Err(VizError::InvalidSpeed(11)));
    assert!(engine.set_speed(7).is_ok());
    assert_eq!(engine.delay(), Duration::from_millis(400));
}

#[test]
fn test_play_through_to_the_end() {
    let (mut engine, clock) = loaded("linear");
    engine.set_speed(10).unwrap();
    assert!(engine.play());

    let mut advances = 0;
    while engine.is_playing() {
        clock.advance_ms(100);
        if engine.tick() {
            advances += 1;
        }
        assert!(advances <= engine.len(), "playback never stopped");
    }

    assert_eq!(advances, engine.len() - 1);
    assert_eq!(engine.state(), PlaybackState::Finished);
    assert!(engine.pending().is_none());
}

#[test]
fn test_load_cancels_playback() {
    let (mut engine, clock) = loaded("quick");
    engine.play();
    clock.advance_ms(600);
    engine.tick();
    assert_eq!(engine.current_index(), 1);

    let registry = Registry::new();
    engine.load(registry.generate("greedy", &AlgorithmInput::default()).unwrap());
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.state(), PlaybackState::Paused);

    // The advance armed before the load must not fire
    clock.advance_ms(5_000);
    assert!(!engine.tick());
    assert_eq!(engine.current_index(), 0);
}

#[test]
fn test_single_pending_advance() {
    let (mut engine, clock) = loaded("merge");
    engine.play();
    let first = engine.pending().unwrap();
    engine.pause();
    engine.play();
    let second = engine.pending().unwrap();
    assert_ne!(first.token, second.token);

    clock.advance(engine.delay());
    assert!(engine.tick());
    assert!(!engine.tick());
    assert_eq!(engine.current_index(), 1);
}
