use std::collections::HashSet;

use rustwheel::mapper::select_index;
use rustwheel::{
    OutcomeSink, Outcome, Phase, RenderSink, SpinConfig, SpinRequest, Wheel, WheelError, WheelFrame,
};

#[derive(Default)]
struct Recorder {
    frames: Vec<(Vec<String>, f64)>,
    eliminated: Vec<String>,
    winners: Vec<(String, Option<String>)>,
}

impl RenderSink for Recorder {
    fn render(&mut self, frame: &WheelFrame<'_>) {
        let names = frame.slices.iter().map(|s| s.name.to_string()).collect();
        self.frames.push((names, frame.rotation));
    }
}

impl OutcomeSink for Recorder {
    fn present_eliminated(&mut self, name: &str) {
        self.eliminated.push(name.to_string());
    }

    fn present_winner(&mut self, winner: &str, eliminated: Option<&str>) {
        self.winners.push((winner.to_string(), eliminated.map(str::to_string)));
    }
}

fn wheel_with(names: &str, seed: u64) -> Wheel<Recorder> {
    let mut wheel = Wheel::seeded(SpinConfig::normal(), Recorder::default(), seed);
    let batch = wheel.add_many(names).unwrap();
    assert!(batch.skipped.is_empty());
    wheel
}

/// Drive a started spin to completion at roughly 60 frames per second.
fn spin_to_stop(wheel: &mut Wheel<Recorder>) {
    assert_eq!(wheel.request_spin(), Ok(SpinRequest::Started));
    for _ in 0..10_000 {
        if wheel.phase() != Phase::Spinning {
            return;
        }
        wheel.advance(16.7);
    }
    panic!("spin did not finish");
}

#[test]
fn three_names_eliminate_one() {
    let mut wheel = wheel_with("A,B,C", 2024);
    let before = wheel.snapshot();
    spin_to_stop(&mut wheel);

    assert_eq!(wheel.phase(), Phase::PresentingOutcome);
    assert_eq!(wheel.registry().len(), 2);

    let removed = match wheel.outcome() {
        Some(Outcome::Eliminated { name }) => name.clone(),
        other => panic!("expected an elimination, got {other:?}"),
    };
    assert!(before.contains(&removed));
    assert!(!wheel.snapshot().contains(&removed));
    assert_eq!(wheel.view().eliminated, vec![removed.clone()]);
    assert!(wheel.view().winners.is_empty());

    // The removed name was the one under the pointer at the final rotation
    assert_eq!(before[select_index(wheel.rotation(), before.len())], removed);
}

#[test]
fn renders_every_tick_and_after_removal() {
    let mut wheel = wheel_with("A,B,C", 5);
    let initial = wheel.view().frames.len();
    spin_to_stop(&mut wheel);

    let frames = &wheel.view().frames[initial..];
    let total = wheel.view().frames.len() - initial;
    assert!(total > 100, "only {total} frames for a 4s+ spin");

    // Rotation only ever moves forward while spinning
    assert!(frames.windows(2).all(|f| f[1].1 >= f[0].1));

    // Final frame shows the shortened list at the final rotation
    let (names, rotation) = frames.last().unwrap();
    assert_eq!(names, &wheel.snapshot());
    assert_eq!(*rotation, wheel.rotation());
}

#[test]
fn spin_requests_while_busy_change_nothing() {
    let mut wheel = wheel_with("A,B,C,D", 9);
    assert_eq!(wheel.request_spin(), Ok(SpinRequest::Started));
    wheel.advance(1000.0);

    let rotation = wheel.rotation();
    let names = wheel.snapshot();
    let session = wheel.session().cloned();
    for _ in 0..5 {
        assert_eq!(wheel.request_spin(), Ok(SpinRequest::Ignored));
    }
    assert_eq!(wheel.rotation(), rotation);
    assert_eq!(wheel.snapshot(), names);
    assert_eq!(wheel.session().cloned(), session);
    assert_eq!(wheel.phase(), Phase::Spinning);
}

#[test]
fn elimination_runs_down_to_a_winner() {
    let mut wheel = wheel_with("Ada,Grace,Linus,Margaret,Ken", 77);
    let everyone: HashSet<String> = wheel.snapshot().into_iter().collect();

    for left in (2..=4).rev() {
        spin_to_stop(&mut wheel);
        assert!(!wheel.outcome().unwrap().is_winner());
        assert_eq!(wheel.registry().len(), left);
        assert!(wheel.acknowledge().is_some());
        assert_eq!(wheel.phase(), Phase::Idle);
    }

    spin_to_stop(&mut wheel);
    let remaining = wheel.snapshot();
    assert_eq!(remaining.len(), 1);
    let (winner, last_out) = match wheel.acknowledge() {
        Some(Outcome::Winner { winner, eliminated }) => (winner, eliminated.unwrap()),
        other => panic!("expected a winner, got {other:?}"),
    };
    assert_eq!(winner, remaining[0]);

    let recorder = wheel.view();
    assert_eq!(recorder.eliminated.len(), 3);
    assert_eq!(recorder.winners, vec![(winner.clone(), Some(last_out.clone()))]);

    // Everybody is accounted for exactly once
    let mut seen: HashSet<String> = recorder.eliminated.iter().cloned().collect();
    assert!(seen.insert(last_out));
    assert!(seen.insert(winner));
    assert_eq!(seen, everyone);

    // No further spins once the winner is declared
    assert_eq!(
        wheel.request_spin(),
        Err(WheelError::InsufficientParticipants { required: 2, present: 1 })
    );
    assert_eq!(wheel.phase(), Phase::Idle);
}

#[test]
fn same_seed_same_order() {
    let order = |seed| {
        let mut wheel = wheel_with("a,b,c,d,e,f", seed);
        let mut out = Vec::new();
        while wheel.registry().len() > 1 {
            spin_to_stop(&mut wheel);
            match wheel.acknowledge().unwrap() {
                Outcome::Eliminated { name } => out.push(name),
                Outcome::Winner { winner, .. } => out.push(winner),
            }
        }
        out
    };
    assert_eq!(order(31), order(31));
}

#[test]
fn rotation_carries_across_spins() {
    let mut wheel = wheel_with("a,b,c", 12);
    spin_to_stop(&mut wheel);
    let after_first = wheel.rotation();
    assert!(after_first > 0.0);
    wheel.acknowledge();

    assert_eq!(wheel.request_spin(), Ok(SpinRequest::Started));
    assert_eq!(wheel.session().unwrap().start_rotation, after_first);
}

#[test]
fn names_can_be_added_between_rounds() {
    let mut wheel = wheel_with("a,b", 4);
    spin_to_stop(&mut wheel);
    wheel.acknowledge();
    assert_eq!(wheel.registry().len(), 1);

    assert_eq!(wheel.add_one("c"), Ok(()));
    assert_eq!(wheel.request_spin(), Ok(SpinRequest::Started));
}

#[test]
fn empty_wheel_cannot_spin() {
    let mut wheel = Wheel::seeded(SpinConfig::normal(), Recorder::default(), 0);
    assert_eq!(
        wheel.request_spin(),
        Err(WheelError::InsufficientParticipants { required: 2, present: 0 })
    );
    assert!(wheel.view().frames.last().unwrap().0.is_empty());
}
