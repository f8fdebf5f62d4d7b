//! The turn loop: policy in, commands out, state replaced wholesale.

use std::future::Future;

use crate::harness::models::{Command, SimulationState};
use crate::harness::policy::Policy;
use crate::harness::session::HarnessError;

/// Anything that can advance the simulation by one turn.
///
/// `SimulationSession` is the real implementation; tests drive the loop with
/// scripted fakes.
pub trait Simulator {
    fn num_floors(&self) -> i32;

    fn step(
        &mut self,
        commands: Vec<Command>,
    ) -> impl Future<Output = Result<SimulationState, HarnessError>>;
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub score: Option<i32>,
    pub replay_url: Option<String>,
    /// Turns driven by this loop, not counting the start response.
    pub turns: u32,
}

/// Runs `policy` against `sim` until the simulator reports `running = false`,
/// then returns the final score and replay link.
///
/// Errors the simulator reports inside a state snapshot are warnings, not
/// failures: the server may reject individual commands and still return a
/// usable state. Only transport and protocol failures abort the loop, and
/// trailing errors on the final snapshot never suppress the report.
pub async fn drive<S, P>(
    sim: &mut S,
    policy: &mut P,
    mut state: SimulationState,
) -> Result<FinalReport, HarnessError>
where
    S: Simulator,
    P: Policy,
{
    let mut turns = 0u32;
    loop {
        for error in &state.errors {
            tracing::warn!(%error, "simulator reported an error");
        }
        if !state.running {
            break;
        }

        let commands = policy.plan(&state, sim.num_floors());
        state = sim.step(commands).await?;
        turns += 1;
    }

    tracing::info!(
        turns,
        score = ?state.score,
        "simulation finished"
    );
    Ok(FinalReport {
        score: state.score,
        replay_url: state.replay_url,
        turns,
    })
}
