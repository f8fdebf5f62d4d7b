//! Decision policies: map a state snapshot to one command per elevator.

use std::collections::HashMap;

use rand::Rng;

use crate::harness::models::{Action, Command, Direction, SimulationState};

/// A policy plans one turn: one command per elevator, in the order the
/// server listed them. Policies that keep state across turns own it as plain
/// fields; the driver loop owns the policy value.
pub trait Policy {
    fn plan(&mut self, state: &SimulationState, num_floors: i32) -> Vec<Command>;
}

/// Draws direction and action uniformly at random, independently per
/// elevator. No memory across turns; useful as a scoring baseline.
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn plan(&mut self, state: &SimulationState, _num_floors: i32) -> Vec<Command> {
        let mut rng = rand::thread_rng();
        state
            .elevators
            .iter()
            .map(|elevator| Command {
                elevator_id: elevator.id.clone(),
                direction: Direction::from(rng.gen::<bool>()),
                action: Action::from(rng.gen::<bool>()),
            })
            .collect()
    }
}

/// Naive sweep: each elevator rides to the top, turns around, rides to the
/// bottom, stopping wherever an inside button or a same-direction hall
/// request matches its floor.
#[derive(Debug, Default)]
pub struct UpDownPolicy {
    /// Sticky direction per elevator id; unseen elevators start heading up.
    directions: HashMap<String, Direction>,
}

impl UpDownPolicy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Policy for UpDownPolicy {
    fn plan(&mut self, state: &SimulationState, num_floors: i32) -> Vec<Command> {
        let mut commands = Vec::with_capacity(state.elevators.len());
        for elevator in &state.elevators {
            let mut direction = *self
                .directions
                .get(&elevator.id)
                .unwrap_or(&Direction::Up);
            let at_top = direction == Direction::Up && elevator.floor == num_floors;
            let at_bottom = direction == Direction::Down && elevator.floor == 1;
            if at_top || at_bottom {
                direction = direction.reversed();
            }
            self.directions.insert(elevator.id.clone(), direction);

            let mut action = Action::Move;
            if elevator.buttons_pressed.contains(&elevator.floor) {
                // A passenger inside wants out here.
                action = Action::Stop;
            } else if state
                .requests
                .iter()
                .any(|request| request.floor == elevator.floor && request.direction == direction)
            {
                // Someone on this floor wants to board heading our way.
                action = Action::Stop;
            }

            commands.push(Command {
                elevator_id: elevator.id.clone(),
                direction,
                action,
            });
        }
        commands
    }
}
