//! Session state for the Turn Co-Pilot assistant.
//!
//! This crate holds the pure, synchronous logic behind adaptive alerts:
//!
//! - [`tracker`] -- per-scenario occurrence counts and derived urgency
//! - [`log`] -- the fixed-capacity FIFO of recent alerts
//! - [`session`] -- the explicit session object owning tracker, log, and
//!   the current alert
//!
//! Nothing here performs I/O. The session is owned by whatever handles a
//! single user's interaction, which makes the escalation logic testable
//! without any UI or network harness.

pub mod log;
pub mod session;
pub mod tracker;

pub use log::{ALERT_LOG_CAPACITY, AlertLog, PROMPT_CONTEXT_WINDOW};
pub use session::{Session, TriggerOutcome};
pub use tracker::EscalationTracker;
