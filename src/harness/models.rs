//! Wire types for the Dianti simulator protocol.
//!
//! Direction and action travel as JSON booleans (up = true, move = true).
//! They are two-variant enums here so call sites cannot swap one for the
//! other silently.

use serde::{Deserialize, Serialize};

/// Travel direction of an elevator. Wire format: `true` = up, `false` = down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl From<bool> for Direction {
    fn from(up: bool) -> Self {
        if up {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

impl From<Direction> for bool {
    fn from(direction: Direction) -> bool {
        matches!(direction, Direction::Up)
    }
}

/// What an elevator does this turn. Wire format: `true` = move, `false` = stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Action {
    Move,
    Stop,
}

impl From<bool> for Action {
    fn from(moving: bool) -> Self {
        if moving {
            Action::Move
        } else {
            Action::Stop
        }
    }
}

impl From<Action> for bool {
    fn from(action: Action) -> bool {
        matches!(action, Action::Move)
    }
}

/// One instruction for one elevator; each elevator gets at most one per turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub elevator_id: String,
    pub direction: Direction,
    pub action: Action,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevatorState {
    pub id: String,
    /// Current floor, 1-based.
    pub floor: i32,
    /// Floors requested by passengers inside the car.
    #[serde(default)]
    pub buttons_pressed: Vec<i32>,
}

/// A passenger waiting in a hallway for an elevator heading their way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FloorRequest {
    pub floor: i32,
    pub direction: Direction,
}

/// Full snapshot returned by the simulator each turn.
///
/// Each response replaces the previous snapshot wholesale; the server is the
/// sole source of truth and the client never merges deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub running: bool,
    #[serde(default)]
    pub elevators: Vec<ElevatorState>,
    #[serde(default)]
    pub requests: Vec<FloorRequest>,
    /// Authoritative once `running` is false.
    #[serde(default)]
    pub score: Option<i32>,
    /// Link to a recorded visualization, available on the final turn.
    #[serde(default)]
    pub replay_url: Option<String>,
    /// Non-fatal per-command validation errors, e.g. an unknown elevator id.
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub cur_turn: Option<i32>,
    #[serde(default)]
    pub num_turns: Option<i32>,
}

/// Response to the registration request: session identity plus the first
/// state snapshot. `token` and `num_floors` are issued exactly once here.
#[derive(Debug, Clone, Deserialize)]
pub struct StartResponse {
    pub token: String,
    pub num_floors: i32,
    #[serde(flatten)]
    pub state: SimulationState,
}

/// Building configurations known to the hosted simulator. Plain strings, not
/// an enum: the server adds buildings without requiring a client release.
pub mod buildings {
    /// 10 floors, 2 elevators, 30 turns.
    pub const TINY_RANDOM: &str = "tiny_random";
    /// 20 floors, 4 elevators, 80 turns.
    pub const MEDIUM_RANDOM: &str = "medium_random";
    /// 25 floors, 8 elevators, 500 turns.
    pub const BIG_RANDOM: &str = "big_random";
    /// Like `big_random`, with rush-hour request clustering.
    pub const BIG_CLUSTERED: &str = "big_clustered";
    /// 50 floors, 8 elevators, 1000 turns, clustered.
    pub const SKY_TOWER: &str = "85_sky_tower";
}
