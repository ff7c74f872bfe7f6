//! Common primitives shared by the mediator's collaborators

/// Typed publish/subscribe event
pub mod event;
/// Reactive property system for fine-grained state updates
pub mod property;

pub use event::{Event, SubscriptionId};
pub use property::Property;
