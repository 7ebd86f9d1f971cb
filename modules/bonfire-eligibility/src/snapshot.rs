//! The engine's input value: one event's schedule, flags, window
//! configuration, and capacity as of the last data refresh.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bonfire_common::{BonfireError, JoinMode, Phase};

/// Immutable view of an event for eligibility evaluation. Re-fetched by the
/// data layer on every refresh; the engine holds nothing between calls.
///
/// Minute-offset fields use `None` as an explicit no-bound sentinel, distinct
/// from `Some(0)`. The data layer must carry that distinction losslessly
/// (`null` on the wire, never a magic number).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub id: Uuid,
    pub starts_at: DateTime<Utc>,
    /// Invariant: after `starts_at`. Enforced by [`EventSnapshot::validate`].
    pub ends_at: DateTime<Utc>,
    pub is_deleted: bool,
    pub is_canceled: bool,
    /// Server-computed phase. Authoritative over the local now-vs-schedule
    /// comparison when present, tolerating client/server clock drift.
    pub phase_hint: Option<Phase>,
    /// How early joining opens, relative to start. `None` = no lower bound.
    pub join_opens_minutes_before_start: Option<u32>,
    /// Pre-start cutoff, relative to start. `None` = open until `starts_at`.
    pub join_cutoff_minutes_before_start: Option<u32>,
    /// Whether joining is permitted at all once the event has started.
    pub allow_join_late: bool,
    /// Late-join cutoff, relative to start. `None` = open until `ends_at`.
    pub late_join_cutoff_minutes_after_start: Option<u32>,
    /// Organizer override. Closes joining without touching the phase.
    pub join_manually_closed: bool,
    pub min_participants: Option<u32>,
    /// `None` = capacity never constrains joinability.
    pub max_participants: Option<u32>,
    pub joined_count: u32,
    pub join_mode: JoinMode,
}

impl EventSnapshot {
    /// Check construction invariants. The data layer calls this once when it
    /// builds the snapshot; the engine assumes a validated value.
    pub fn validate(&self) -> Result<(), BonfireError> {
        if self.ends_at <= self.starts_at {
            return Err(BonfireError::Validation(format!(
                "event {}: ends_at {} must be after starts_at {}",
                self.id, self.ends_at, self.starts_at
            )));
        }
        if let (Some(min), Some(max)) = (self.min_participants, self.max_participants) {
            if min > max {
                return Err(BonfireError::Validation(format!(
                    "event {}: min_participants {min} exceeds max_participants {max}",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Instant joining opens, or `None` when there is no lower bound.
    pub fn join_opens_at(&self) -> Option<DateTime<Utc>> {
        self.join_opens_minutes_before_start
            .map(|m| self.starts_at - Duration::minutes(i64::from(m)))
    }

    /// Instant the pre-start window closes. Falls back to `starts_at` when no
    /// early cutoff is configured.
    pub fn join_cutoff_at(&self) -> DateTime<Utc> {
        match self.join_cutoff_minutes_before_start {
            Some(m) => self.starts_at - Duration::minutes(i64::from(m)),
            None => self.starts_at,
        }
    }

    /// Instant late joining closes, assuming it is allowed at all. Falls back
    /// to `ends_at` when unbounded.
    pub fn late_join_cutoff_at(&self) -> DateTime<Utc> {
        match self.late_join_cutoff_minutes_after_start {
            Some(m) => self.starts_at + Duration::minutes(i64::from(m)),
            None => self.ends_at,
        }
    }

    /// Seats left under the capacity bound, or `None` when unbounded.
    pub fn spots_remaining(&self) -> Option<u32> {
        self.max_participants
            .map(|max| max.saturating_sub(self.joined_count))
    }
}
