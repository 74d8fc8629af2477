//! Core Ember library (config, logging, auth collaborator).

pub mod auth;
pub mod config;
pub mod logging;
