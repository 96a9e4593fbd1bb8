#![allow(clippy::doc_markdown)] // Allow technical terms like WebView, Wizone in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Wizone Core Rust
//!
//! Rust implementation of the Wizone field-service task status workflow.
//!
//! ## Overview
//!
//! The Wizone support platform accumulated five mobile/WebView client
//! shells, each re-implementing the field engineer's task-update flow in
//! its own UI conditionals. This crate consolidates that flow into a
//! single core the shells share: the transition rules, the completion
//! capture, and the submission/cache-reconciliation path all live here,
//! and the UI layers become thin consumers of `Allowed`/`Rejected`
//! results.
//!
//! ## Architecture
//!
//! The state machine is pure: given a current status and a proposed
//! target it decides permission and required fields with no I/O, so the
//! whole rule matrix is unit-testable. Side effects are pushed to the
//! edges: the HTTP client behind the [`client::TaskUpdateApi`] trait,
//! the query cache behind [`cache::QueryCache`], and lifecycle events
//! behind the broadcast [`events::EventPublisher`], all injected
//! collaborators rather than ambient globals.
//!
//! ## Module Organization
//!
//! - [`state_machine`] - Field status states and pure transition rules
//! - [`workflow`] - Session, completion capture, and update submission
//! - [`client`] - Task API trait, HTTP implementation, wire payloads
//! - [`cache`] - Query cache keyed like the web client's query store
//! - [`events`] - Lifecycle event broadcast
//! - [`models`] - Task, status-change drafts, update-log entries
//! - [`constants`] - Status catalog and event names
//! - [`config`] - Configuration management
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wizone_core::cache::InMemoryQueryCache;
//! use wizone_core::client::HttpTaskUpdateApi;
//! use wizone_core::config::WizoneConfig;
//! use wizone_core::events::EventPublisher;
//! use wizone_core::models::Task;
//! use wizone_core::state_machine::FieldTaskState;
//! use wizone_core::workflow::{FieldTaskWorkflow, UpdateSubmitter};
//!
//! # async fn example(task: Task) -> Result<(), Box<dyn std::error::Error>> {
//! let config = WizoneConfig::load()?;
//! let api = Arc::new(HttpTaskUpdateApi::new(&config)?);
//! let cache = Arc::new(InMemoryQueryCache::new(config.cache.clone()));
//! let submitter = UpdateSubmitter::new(api, cache, EventPublisher::default());
//!
//! let mut workflow = FieldTaskWorkflow::new(task, submitter);
//! workflow.select_status(FieldTaskState::WaitingForCustomer)?;
//! workflow.set_note("Customer not available");
//! let outcome = workflow.submit().await?;
//! println!("submitted: {outcome:?}");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod logging;
pub mod models;
pub mod state_machine;
pub mod test_helpers;
pub mod workflow;

// Re-export the most commonly used types at the crate root
pub use error::{Result, WizoneError};
pub use models::Task;
pub use state_machine::FieldTaskState;
