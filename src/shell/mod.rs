// Composition root for the event backend.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire state into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
