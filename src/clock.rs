//! The reference-clock collaborator (§5, §6 `now`).
//!
//! The core never reads the system clock itself unless the caller leaves
//! `now` unset; when that happens it asks a pluggable [`ClockProvider`] for
//! the reference instant. This mirrors the `SyncConfig`-style injectable
//! collaborators elsewhere in this codebase's call graph: the host owns the
//! provider's lifecycle, the core only performs a pure read.

use crate::types::Instant;
use std::sync::Arc;

/// A pure source of "now". Implementations must not block or perform I/O
/// beyond reading a local clock.
pub trait ClockProvider: Send + Sync {
    fn now(&self) -> Instant;
}

/// The zero-configuration default: reads the host's local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockProvider for SystemClock {
    fn now(&self) -> Instant {
        Instant::new(chrono::Local::now().naive_local())
    }
}

/// A fixed instant, useful for tests and any caller that wants every parse
/// in a batch to share one reference time without passing `now` on every
/// call.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Instant);

impl ClockProvider for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

pub(crate) fn default_provider() -> Arc<dyn ClockProvider> {
    Arc::new(SystemClock)
}
