//! Phase derivation and the join guard chain.
//!
//! Joinability is an ordered list of guards; the first match wins. The order
//! encodes precedence, not a tie-break: terminal flags outrank phase, phase
//! outranks capacity, capacity outranks the organizer override, and only
//! then do the time windows apply.
//!
//! Boundary semantics, fixed by contract:
//!   - `now >= ends_at` is past; `now == starts_at` is ongoing.
//!   - The pre-start window is closed AT the cutoff instant (`>=`) and open
//!     AT the opens instant (`<` fails).
//!   - The late window is still open AT the late cutoff instant (`>`).

use chrono::{DateTime, Utc};
use tracing::debug;

use bonfire_common::{Evaluation, JoinReason, Joinability, Phase};

use crate::snapshot::EventSnapshot;

/// Evaluate one event at one instant.
///
/// Pure and total: never raises for a validated snapshot, touches nothing
/// but its arguments. Phase is derived first and feeds the join guards.
pub fn evaluate(snapshot: &EventSnapshot, now: DateTime<Utc>) -> Evaluation {
    debug_assert!(
        snapshot.ends_at > snapshot.starts_at,
        "snapshot must be validated before evaluation"
    );

    let phase = snapshot
        .phase_hint
        .unwrap_or_else(|| scheduled_phase(snapshot, now));
    let joinability = Joinability::for_reason(join_reason(snapshot, phase, now));

    debug!(
        event_id = %snapshot.id,
        %phase,
        reason = %joinability.reason,
        can_join = joinability.can_join,
        "Evaluated join eligibility"
    );

    Evaluation { phase, joinability }
}

/// Phase from the raw schedule. Only consulted when no server hint is
/// present; the hint is authoritative because the server's clock is.
fn scheduled_phase(snapshot: &EventSnapshot, now: DateTime<Utc>) -> Phase {
    if now >= snapshot.ends_at {
        Phase::Past
    } else if now >= snapshot.starts_at {
        Phase::Ongoing
    } else {
        Phase::Upcoming
    }
}

fn join_reason(snapshot: &EventSnapshot, phase: Phase, now: DateTime<Utc>) -> JoinReason {
    if snapshot.is_deleted {
        return JoinReason::Deleted;
    }
    if snapshot.is_canceled {
        return JoinReason::Canceled;
    }
    if phase == Phase::Past {
        return JoinReason::Past;
    }
    // Capacity before the organizer override: a full event is full whether or
    // not joining was also closed by hand.
    if let Some(max) = snapshot.max_participants {
        if snapshot.joined_count >= max {
            return JoinReason::Full;
        }
    }
    if snapshot.join_manually_closed {
        return JoinReason::ManuallyClosed;
    }

    match phase {
        Phase::Upcoming => {
            if let Some(opens_at) = snapshot.join_opens_at() {
                if now < opens_at {
                    return JoinReason::NotYetOpen;
                }
            }
            if now >= snapshot.join_cutoff_at() {
                return JoinReason::Closed;
            }
            JoinReason::Ok
        }
        Phase::Ongoing => {
            if !snapshot.allow_join_late {
                return JoinReason::LateJoinClosed;
            }
            if now > snapshot.late_join_cutoff_at() {
                return JoinReason::LateJoinClosed;
            }
            JoinReason::Ok
        }
        Phase::Past => JoinReason::Past,
    }
}

/// Earliest instant strictly after `now` at which re-evaluating this
/// snapshot could change outcome for time reasons alone. Countdown widgets
/// use this to schedule their next re-render instead of polling blind.
///
/// `None` once the event is over, or when a `Past` hint already pins it.
pub fn next_transition_at(
    snapshot: &EventSnapshot,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if snapshot.phase_hint == Some(Phase::Past) {
        return None;
    }

    let mut candidates = vec![
        snapshot.starts_at,
        snapshot.ends_at,
        snapshot.join_cutoff_at(),
    ];
    if let Some(opens_at) = snapshot.join_opens_at() {
        candidates.push(opens_at);
    }
    if snapshot.allow_join_late {
        candidates.push(snapshot.late_join_cutoff_at());
    }

    candidates.into_iter().filter(|t| *t > now).min()
}
