//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the presentation-facing task list
//!   state machine.
//! - Keep UI layers decoupled from storage details.

pub mod task_list_service;
