//! Liveness HTTP endpoint.
//!
//! Answers every request with `200 OK` so uptime monitors can tell the
//! process is alive. It carries no routes and never touches the database.

pub use server::{LIVENESS_BODY, run_with_listener, spawn_with_listener};

mod server;
