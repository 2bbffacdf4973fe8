// Clock port.
//
// Purpose
// - Give the session handler a source of "now" that tests can control.
//
// Boundaries
// - Deciders never read the clock themselves; the handler passes the instant into the command.

use crate::shared::core::primitives::truncate_to_millis;
use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        truncate_to_millis(Utc::now())
    }
}

pub mod manual;
