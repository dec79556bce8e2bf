//! Exam shift selection.
//!
//! The form offers exactly two sessions. The wire spelling is the
//! capitalized session name, which is also what `Display` prints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exam session a candidate sat in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Shift {
    /// Forenoon session. Preselected in the form.
    #[default]
    Morning,
    /// Afternoon session.
    Afternoon,
}

impl Shift {
    /// All selectable shifts, in the order the form lists them.
    pub const ALL: [Shift; 2] = [Shift::Morning, Shift::Afternoon];

    /// Returns the wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_spelling_matches_display() {
        for shift in Shift::ALL {
            let json = serde_json::to_string(&shift).unwrap();
            assert_eq!(json, format!("\"{shift}\""));
        }
    }

    #[test]
    fn unknown_shift_fails_deserialization() {
        let parsed: Result<Shift, _> = serde_json::from_str("\"Night\"");
        assert!(parsed.is_err());
    }
}
