//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate reducer and store calls into use-case level APIs.
//! - Keep UI layers decoupled from persistence details.

pub mod hr_service;
