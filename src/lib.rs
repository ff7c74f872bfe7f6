//! listen-together - command gating for shared playback.
//!
//! Several participants listen to one player together, but only hosts may
//! change what plays. The [`Mediator`](mediator::Mediator) sits between every
//! playback command and the underlying player and decides whether to forward
//! it, substitute host behaviour, or reject it with a notice and an equivalent
//! request to the room. It also filters the player's outgoing sync events,
//! turns the player's state stream into track change events and recognizes
//! join-room links.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use listen_together::{config::Config, mediator::{Collaborators, Mediator}, services::SessionState};
//!
//! let session = SessionState::new();
//! let mediator = Mediator::new(player, session.clone(), collaborators, &Config::default());
//!
//! // The network layer joins a room as a guest.
//! session.connected.set(true);
//!
//! // Rejected: the guest sees a notice and the host is asked to pause instead.
//! mediator.pause();
//! ```

/// Configuration schema, defaults and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Command gating, sync event filtering, track change and room link handling.
pub mod mediator;

/// Collaborator interfaces and shared primitives.
pub mod services;

/// Logging initialisation.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{MediatorError, Result};
