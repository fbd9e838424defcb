//! MeliVote — planning poker board configurator and API server.
//!
//! The configurator lives in [`services::configurator`] and operates on the
//! immutable [`state::BoardSnapshot`]. The HTTP surface is assembled in
//! [`routes::app`].

pub mod config;
pub mod routes;
pub mod services;
pub mod state;
