//! HTTP session against the Dianti simulator endpoint.
//!
//! One POST per simulated turn, `Content-Type: application/json`. The server
//! issues an opaque token on registration; every later request echoes it.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::harness::config::BotConfig;
use crate::harness::driver::Simulator;
use crate::harness::models::{Command, SimulationState, StartResponse};

/// The hosted simulator.
pub const DEFAULT_ENDPOINT: &str = "https://dianti.secondspace.dev/api";

/// Fatal failures of a simulator round trip. Either kind aborts the run;
/// there is no retry. Errors the simulator reports inside an otherwise valid
/// state snapshot are not represented here — those are warnings.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The network call did not complete, or the server answered non-2xx.
    #[error("transport failure talking to the simulator: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body arrived but is not the expected schema (invalid JSON, or a
    /// required field such as `token` or `num_floors` is missing).
    #[error("protocol failure decoding simulator response: {0}")]
    Protocol(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct StartRequest<'a> {
    bot: &'a str,
    building_name: &'a str,
    email: &'a str,
    event: &'a str,
    sandbox: bool,
}

#[derive(Serialize)]
struct StepRequest<'a> {
    token: &'a str,
    commands: &'a [Command],
}

/// A registered simulation run: endpoint, token, floor count, turn counter.
pub struct SimulationSession {
    client: Client,
    endpoint: String,
    token: String,
    num_floors: i32,
    cur_turn: u32,
}

impl SimulationSession {
    /// Registers a new run and returns the session plus the initial state.
    pub async fn start(
        config: &BotConfig,
    ) -> Result<(Self, SimulationState), HarnessError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let body = StartRequest {
            bot: &config.bot,
            building_name: &config.building_name,
            email: &config.email,
            event: &config.event,
            sandbox: config.sandbox,
        };
        let text = post_json(&client, &config.endpoint, &body).await?;
        let start: StartResponse = serde_json::from_str(&text)?;

        tracing::info!(
            num_floors = start.num_floors,
            elevators = start.state.elevators.len(),
            sandbox = config.sandbox,
            building = %config.building_name,
            "simulation registered"
        );

        let session = Self {
            client,
            endpoint: config.endpoint.clone(),
            token: start.token,
            num_floors: start.num_floors,
            cur_turn: 0,
        };
        Ok((session, start.state))
    }

    pub fn num_floors(&self) -> i32 {
        self.num_floors
    }

    /// Submits one command batch and returns the next state snapshot.
    /// One network round trip per simulated turn.
    pub async fn submit(
        &mut self,
        commands: &[Command],
    ) -> Result<SimulationState, HarnessError> {
        self.cur_turn += 1;
        tracing::info!(turn = self.cur_turn, commands = commands.len(), "turn");

        let body = StepRequest {
            token: &self.token,
            commands,
        };
        let text = post_json(&self.client, &self.endpoint, &body).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl Simulator for SimulationSession {
    fn num_floors(&self) -> i32 {
        self.num_floors
    }

    async fn step(&mut self, commands: Vec<Command>) -> Result<SimulationState, HarnessError> {
        self.submit(&commands).await
    }
}

/// POST a JSON body and return the response text. Transport and HTTP-status
/// failures surface here; schema failures surface at the parse site.
async fn post_json<T: Serialize>(
    client: &Client,
    url: &str,
    body: &T,
) -> Result<String, HarnessError> {
    let response = client
        .post(url)
        .json(body)
        .send()
        .await?
        .error_for_status()?;
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::models::{Action, Direction};
    use serde_json::json;

    #[test]
    fn start_request_wire_shape() {
        let body = StartRequest {
            bot: "updown-rust-bot",
            building_name: "tiny_random",
            email: "bob@mail.com",
            event: "secondspace2025",
            sandbox: true,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "bot": "updown-rust-bot",
                "building_name": "tiny_random",
                "email": "bob@mail.com",
                "event": "secondspace2025",
                "sandbox": true,
            })
        );
    }

    #[test]
    fn step_request_wire_shape() {
        let commands = vec![Command {
            elevator_id: "elevator-1".into(),
            direction: Direction::Up,
            action: Action::Stop,
        }];
        let body = StepRequest {
            token: "abc123",
            commands: &commands,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "token": "abc123",
                "commands": [
                    {"elevator_id": "elevator-1", "direction": true, "action": false}
                ],
            })
        );
    }

    #[test]
    fn malformed_start_body_is_a_protocol_error() {
        let err = serde_json::from_str::<StartResponse>("not json").unwrap_err();
        let harness_err = HarnessError::from(err);
        assert!(matches!(harness_err, HarnessError::Protocol(_)));
    }
}
