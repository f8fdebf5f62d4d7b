//! Client harness for the Dianti elevator-dispatch simulator.
//!
//! The simulator lives behind a single HTTP JSON endpoint. A bot registers a
//! run, then each turn submits one command per elevator and receives the next
//! full state snapshot, until the server reports the run is over.

pub mod harness;
