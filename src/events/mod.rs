//! Event system for decoupled inter-module communication.
//!
//! Menu actions and system notification observers don't touch hardware
//! directly; they publish an [`AppEvent`] and the dispatcher, driven by the
//! one-second poll timer, executes it on the main thread.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │ Status menu │     │  Observers  │
//! └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()
//!        ▼                   ▼
//! ┌─────────────────────────────────┐
//! │            EventBus             │
//! │         (mpsc channel)          │
//! └────────────────┬────────────────┘
//!                  │ drain()
//!                  ▼
//! ┌─────────────────────────────────┐
//! │           Dispatcher            │
//! │        (poll timer, 1 s)        │
//! └─────────────────────────────────┘
//! ```
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types
//! - [`global`]: Static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
