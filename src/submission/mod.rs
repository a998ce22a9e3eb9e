//! Account submission: transport abstraction and the controller state machine

mod client;
mod controller;
mod error;
mod traits;

pub use client::SimulatedTransport;
pub use controller::{SubmissionController, SubmissionState};
pub use traits::SubmissionTransport;

#[cfg(test)]
pub use traits::{MockSubmissionTransport, SubmissionReceipt};
