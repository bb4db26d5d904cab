use shared::draw_model::{available_combinations, total_combinations};
use shared::persistence::{DrawRepository, MemoryStorage};
use shared::power_charger::Release;
use shared::{CategoryConfig, DrawSession, DrawTuning, DrawnStore, RoundEvent, SessionEvent, WheelKind};

const FRAME: f64 = 1.0 / 60.0;

fn hold_and_spin(session: &mut DrawSession, kind: WheelKind, hold_seconds: f64) -> Vec<SessionEvent> {
    assert!(session.press(kind), "{:?} wheel should accept a press", kind);
    let mut events = Vec::new();
    let mut held = 0.0;
    while held < hold_seconds {
        events.extend(session.tick(FRAME));
        held += FRAME;
    }
    assert!(matches!(session.release(kind), Release::Launch(_)));
    while session.wheel(kind).is_spinning() {
        events.extend(session.tick(FRAME));
    }
    events
}

fn play_round(session: &mut DrawSession, hold_seconds: f64) -> Option<shared::DrawResult> {
    let mut events = hold_and_spin(session, WheelKind::Category, hold_seconds);
    if session.result().is_none() {
        events.extend(hold_and_spin(session, WheelKind::Value, hold_seconds));
    }
    events.into_iter().find_map(|event| match event {
        SessionEvent::Round(RoundEvent::Drawn(result)) => Some(result),
        _ => None,
    })
}

#[test]
fn draws_every_combination_exactly_once() {
    let repo = DrawRepository::new(MemoryStorage::new());
    let config = vec![
        CategoryConfig::new("A", ["1", "2", "3"]),
        CategoryConfig::new("B", ["1"]),
        CategoryConfig::new("C", ["4", "5"]),
    ];
    repo.save_config(&config).unwrap();

    let mut drawn = repo.load_drawn();
    let mut session = DrawSession::start(repo.load_config(), &drawn, DrawTuning::default()).unwrap();
    let total = total_combinations(&config);

    // vary the hold so rounds land on different segments
    let holds = [0.4, 1.3, 2.2, 0.9, 1.7, 2.9];
    for round in 0..total {
        let result = play_round(&mut session, holds[round % holds.len()]).expect("round produced a result");
        assert!(!drawn.contains(&result.key()), "{} drawn twice", result);
        session.commit(&mut drawn).unwrap();
        repo.save_drawn(&drawn).unwrap();

        assert_eq!(available_combinations(&config, &drawn).len(), total - round - 1);
        session.next_round(repo.load_config(), &repo.load_drawn()).unwrap();
    }

    assert!(session.is_exhausted());
    assert_eq!(repo.load_drawn().len(), total);
    assert!(!session.press(WheelKind::Category));
}

#[test]
fn restored_history_shapes_the_next_round() {
    let repo = DrawRepository::new(MemoryStorage::new());
    repo.save_config(&[CategoryConfig::new("X", ["1", "2"]), CategoryConfig::new("Y", ["3"])]).unwrap();
    repo.save_drawn(&shared::DrawnSet::from_keys(["Y3", "X2"])).unwrap();

    let drawn = repo.load_drawn();
    let mut session = DrawSession::start(repo.load_config(), &drawn, DrawTuning::default()).unwrap();
    assert_eq!(session.category_wheel().segments(), &["X".to_string()][..]);

    let result = play_round(&mut session, 1.0).unwrap();
    assert_eq!(result.key(), "X1");
    assert_eq!(session.value_wheel().launch_count(), 0);
}
