//! Event handlers.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
