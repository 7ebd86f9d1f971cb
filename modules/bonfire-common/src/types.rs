//! Shared vocabulary for event phase and join eligibility.
//!
//! These enums are a closed wire contract consumed by the card, dashboard,
//! and countdown surfaces. Consumers switching on `JoinReason` must keep a
//! default branch for forward compatibility.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// --- Temporal phase ---

/// Where an event sits relative to its scheduled start/end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Upcoming,
    Ongoing,
    Past,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Upcoming => write!(f, "upcoming"),
            Phase::Ongoing => write!(f, "ongoing"),
            Phase::Past => write!(f, "past"),
        }
    }
}

impl Phase {
    /// Lenient parse for server-supplied phase strings. Returns `None` for
    /// unrecognized values so callers fall back to the schedule comparison.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upcoming" => Some(Phase::Upcoming),
            "ongoing" => Some(Phase::Ongoing),
            "past" => Some(Phase::Past),
            _ => None,
        }
    }
}

// --- Join mode ---

/// How a join is granted once eligibility allows it. Informational for the
/// eligibility engine; approval flows are handled elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum JoinMode {
    #[default]
    Open,
    Request,
    InviteOnly,
}

impl std::fmt::Display for JoinMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinMode::Open => write!(f, "open"),
            JoinMode::Request => write!(f, "request"),
            JoinMode::InviteOnly => write!(f, "invite_only"),
        }
    }
}

// --- Presentation tone ---

/// Severity hint for badges and labels. Carries no business semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Success => write!(f, "success"),
            Tone::Warning => write!(f, "warning"),
            Tone::Danger => write!(f, "danger"),
            Tone::Info => write!(f, "info"),
            Tone::Neutral => write!(f, "neutral"),
        }
    }
}

// --- Join reason ---

/// The single most relevant reason a user can or cannot join right now.
/// The presentation layer maps these to localized copy; no display strings
/// originate here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum JoinReason {
    Deleted,
    Canceled,
    Past,
    Full,
    ManuallyClosed,
    NotYetOpen,
    Closed,
    LateJoinClosed,
    Ok,
}

impl std::fmt::Display for JoinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinReason::Deleted => write!(f, "deleted"),
            JoinReason::Canceled => write!(f, "canceled"),
            JoinReason::Past => write!(f, "past"),
            JoinReason::Full => write!(f, "full"),
            JoinReason::ManuallyClosed => write!(f, "manually_closed"),
            JoinReason::NotYetOpen => write!(f, "not_yet_open"),
            JoinReason::Closed => write!(f, "closed"),
            JoinReason::LateJoinClosed => write!(f, "late_join_closed"),
            JoinReason::Ok => write!(f, "ok"),
        }
    }
}

impl JoinReason {
    /// True only for the single joinable outcome.
    pub fn allows_join(&self) -> bool {
        matches!(self, JoinReason::Ok)
    }

    /// Presentation tone for this reason. Total: every reason has exactly
    /// one tone.
    pub fn tone(&self) -> Tone {
        match self {
            JoinReason::Deleted | JoinReason::Canceled => Tone::Danger,
            JoinReason::Past => Tone::Neutral,
            JoinReason::Full
            | JoinReason::ManuallyClosed
            | JoinReason::Closed
            | JoinReason::LateJoinClosed => Tone::Warning,
            JoinReason::NotYetOpen => Tone::Info,
            JoinReason::Ok => Tone::Success,
        }
    }
}

// --- Evaluation output ---

/// Join status for one event at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joinability {
    pub can_join: bool,
    pub reason: JoinReason,
    pub tone: Tone,
}

impl Joinability {
    /// Derive the full status from a reason. `can_join` and `tone` are
    /// functions of the reason, never set independently.
    pub fn for_reason(reason: JoinReason) -> Self {
        Self {
            can_join: reason.allows_join(),
            reason,
            tone: reason.tone(),
        }
    }
}

/// Result of one eligibility evaluation: phase and joinability derived from
/// the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub phase: Phase,
    pub joinability: Joinability,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_REASONS: [JoinReason; 9] = [
        JoinReason::Deleted,
        JoinReason::Canceled,
        JoinReason::Past,
        JoinReason::Full,
        JoinReason::ManuallyClosed,
        JoinReason::NotYetOpen,
        JoinReason::Closed,
        JoinReason::LateJoinClosed,
        JoinReason::Ok,
    ];

    #[test]
    fn join_reason_wire_tags_are_snake_case() {
        let tags: Vec<String> = ALL_REASONS
            .iter()
            .map(|r| serde_json::to_string(r).unwrap())
            .collect();
        assert_eq!(
            tags,
            vec![
                "\"deleted\"",
                "\"canceled\"",
                "\"past\"",
                "\"full\"",
                "\"manually_closed\"",
                "\"not_yet_open\"",
                "\"closed\"",
                "\"late_join_closed\"",
                "\"ok\"",
            ]
        );
    }

    #[test]
    fn display_matches_wire_tag() {
        for reason in ALL_REASONS {
            let tag = serde_json::to_string(&reason).unwrap();
            assert_eq!(tag.trim_matches('"'), reason.to_string());
        }
    }

    #[test]
    fn allows_join_only_for_ok() {
        for reason in ALL_REASONS {
            assert_eq!(reason.allows_join(), reason == JoinReason::Ok);
        }
    }

    #[test]
    fn tone_mapping_is_total() {
        assert_eq!(JoinReason::Deleted.tone(), Tone::Danger);
        assert_eq!(JoinReason::Canceled.tone(), Tone::Danger);
        assert_eq!(JoinReason::Past.tone(), Tone::Neutral);
        assert_eq!(JoinReason::Full.tone(), Tone::Warning);
        assert_eq!(JoinReason::ManuallyClosed.tone(), Tone::Warning);
        assert_eq!(JoinReason::NotYetOpen.tone(), Tone::Info);
        assert_eq!(JoinReason::Closed.tone(), Tone::Warning);
        assert_eq!(JoinReason::LateJoinClosed.tone(), Tone::Warning);
        assert_eq!(JoinReason::Ok.tone(), Tone::Success);
    }

    #[test]
    fn for_reason_derives_both_fields() {
        let open = Joinability::for_reason(JoinReason::Ok);
        assert!(open.can_join);
        assert_eq!(open.tone, Tone::Success);

        let full = Joinability::for_reason(JoinReason::Full);
        assert!(!full.can_join);
        assert_eq!(full.tone, Tone::Warning);
    }

    #[test]
    fn phase_from_str_loose_accepts_server_casing() {
        assert_eq!(Phase::from_str_loose("UPCOMING"), Some(Phase::Upcoming));
        assert_eq!(Phase::from_str_loose("ongoing"), Some(Phase::Ongoing));
        assert_eq!(Phase::from_str_loose("Past"), Some(Phase::Past));
        assert_eq!(Phase::from_str_loose("archived"), None);
    }

    #[test]
    fn join_mode_defaults_to_open() {
        assert_eq!(JoinMode::default(), JoinMode::Open);
    }
}
