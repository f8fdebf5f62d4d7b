//! Driver-loop scenarios against a scripted simulator — no network.

use dianti_bots::harness::driver::{drive, Simulator};
use dianti_bots::harness::models::{
    Action, Command, Direction, ElevatorState, SimulationState,
};
use dianti_bots::harness::policy::{RandomPolicy, UpDownPolicy};
use dianti_bots::harness::session::HarnessError;

/// Replays a fixed list of responses and records every submitted batch.
struct ScriptedSimulator {
    num_floors: i32,
    responses: Vec<SimulationState>,
    submitted: Vec<Vec<Command>>,
}

impl ScriptedSimulator {
    fn new(num_floors: i32, responses: Vec<SimulationState>) -> Self {
        Self {
            num_floors,
            responses,
            submitted: Vec::new(),
        }
    }
}

impl Simulator for ScriptedSimulator {
    fn num_floors(&self) -> i32 {
        self.num_floors
    }

    async fn step(&mut self, commands: Vec<Command>) -> Result<SimulationState, HarnessError> {
        self.submitted.push(commands);
        assert!(
            !self.responses.is_empty(),
            "loop stepped past the scripted run"
        );
        Ok(self.responses.remove(0))
    }
}

fn running_state(elevators: Vec<ElevatorState>, errors: Vec<String>) -> SimulationState {
    SimulationState {
        running: true,
        elevators,
        requests: Vec::new(),
        score: None,
        replay_url: None,
        errors,
        cur_turn: None,
        num_turns: None,
    }
}

fn finished_state(score: i32, replay_url: &str) -> SimulationState {
    SimulationState {
        running: false,
        elevators: Vec::new(),
        requests: Vec::new(),
        score: Some(score),
        replay_url: Some(replay_url.into()),
        errors: Vec::new(),
        cur_turn: None,
        num_turns: None,
    }
}

fn elevator(id: &str, floor: i32) -> ElevatorState {
    ElevatorState {
        id: id.into(),
        floor,
        buttons_pressed: Vec::new(),
    }
}

/// An already-finished initial state produces the report without a single
/// network call.
#[tokio::test]
async fn finished_initial_state_skips_the_network() {
    let mut sim = ScriptedSimulator::new(10, Vec::new());
    let mut policy = RandomPolicy;

    let report = drive(&mut sim, &mut policy, finished_state(42, "http://x/y"))
        .await
        .unwrap();

    assert_eq!(report.score, Some(42));
    assert_eq!(report.replay_url.as_deref(), Some("http://x/y"));
    assert_eq!(report.turns, 0);
    assert!(sim.submitted.is_empty());
}

/// Simulator-reported errors are warnings; the loop keeps going with the
/// returned state and still reports the final score.
#[tokio::test]
async fn simulator_errors_do_not_abort_the_run() {
    let mut sim = ScriptedSimulator::new(10, vec![
        running_state(
            vec![elevator("elevator-0", 2)],
            vec!["unknown elevator id: elevator-9".into()],
        ),
        finished_state(17, "http://replay/abc"),
    ]);
    let mut policy = RandomPolicy;

    let report = drive(
        &mut sim,
        &mut policy,
        running_state(vec![elevator("elevator-0", 1)], Vec::new()),
    )
    .await
    .unwrap();

    assert_eq!(sim.submitted.len(), 2);
    assert_eq!(report.turns, 2);
    assert_eq!(report.score, Some(17));
}

/// Full sweep run: the sticky direction carries across turns and flips at
/// the top floor.
#[tokio::test]
async fn updown_sweep_across_turns() {
    let mut sim = ScriptedSimulator::new(3, vec![
        running_state(vec![elevator("E1", 3)], Vec::new()),
        running_state(vec![elevator("E1", 2)], Vec::new()),
        finished_state(5, "http://replay/sweep"),
    ]);
    let mut policy = UpDownPolicy::new();

    let report = drive(
        &mut sim,
        &mut policy,
        running_state(vec![elevator("E1", 2)], Vec::new()),
    )
    .await
    .unwrap();

    let directions: Vec<Direction> = sim
        .submitted
        .iter()
        .map(|batch| batch[0].direction)
        .collect();
    assert_eq!(
        directions,
        [Direction::Up, Direction::Down, Direction::Down]
    );
    assert!(sim
        .submitted
        .iter()
        .all(|batch| batch[0].action == Action::Move));
    assert_eq!(report.turns, 3);
    assert_eq!(report.replay_url.as_deref(), Some("http://replay/sweep"));
}

/// One command per elevator, ids copied verbatim, every turn.
#[tokio::test]
async fn every_elevator_gets_exactly_one_command() {
    let mut sim = ScriptedSimulator::new(10, vec![finished_state(0, "http://replay/none")]);
    let mut policy = RandomPolicy;

    drive(
        &mut sim,
        &mut policy,
        running_state(
            vec![elevator("elevator-0", 1), elevator("elevator-1", 7)],
            Vec::new(),
        ),
    )
    .await
    .unwrap();

    assert_eq!(sim.submitted.len(), 1);
    let ids: Vec<&str> = sim.submitted[0]
        .iter()
        .map(|c| c.elevator_id.as_str())
        .collect();
    assert_eq!(ids, ["elevator-0", "elevator-1"]);
}
