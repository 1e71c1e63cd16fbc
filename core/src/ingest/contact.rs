use serde::Serialize;
use std::fmt;

/// Fallback range when the field is unparsable; effectively "infinitely far".
pub const DEFAULT_RANGE_KM: f64 = 1e9;
pub const DEFAULT_CLOSING_MPS: f64 = 0.0;
pub const DEFAULT_ALTITUDE_M: f64 = 0.0;
pub const DEFAULT_RCS_M2: f64 = 1.0;

/// Identification-friend-or-foe status of a contact.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Iff {
    Friend,
    Foe,
    Unknown,
}

impl Iff {
    /// Case-insensitive match of a feed token. Unrecognized tokens yield `None`.
    pub fn parse_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "FRIEND" | "F" => Some(Self::Friend),
            "FOE" | "HOSTILE" | "H" => Some(Self::Foe),
            "UNKNOWN" | "U" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Friend => "FRIEND",
            Self::Foe => "FOE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Iff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One sensed track from the input feed. Never mutated after parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    /// Track ID or callsign.
    pub id: String,
    pub iff: Iff,
    /// Slant range in kilometres.
    pub range_km: f64,
    /// Positive when approaching.
    pub closing_mps: f64,
    pub altitude_m: f64,
    /// Radar cross-section in square metres.
    pub rcs_m2: f64,
}

impl Contact {
    pub fn new(
        id: impl Into<String>,
        iff: Iff,
        range_km: f64,
        closing_mps: f64,
        altitude_m: f64,
        rcs_m2: f64,
    ) -> Self {
        Self {
            id: id.into(),
            iff,
            range_km,
            closing_mps,
            altitude_m,
            rcs_m2,
        }
    }
}
