//! Viewport threshold and role-based layout decision.
//!
//! # Design
//! - Keep the width comparison and the role gate pure so they run in native tests.
//! - The resize listener that feeds [`is_oversized`] lives in the wasm-only guard.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Widest viewport (logical pixels) a student may use: a portrait phone.
pub const MAX_STUDENT_WIDTH: u32 = 430;

/// Whether `width` exceeds `max_width`. Equal widths are not oversized.
#[must_use]
pub fn is_oversized(width: f64, max_width: u32) -> bool {
    width > f64::from(max_width)
}

/// Role of the person using the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UserRole {
    /// Student; restricted to phone-sized viewports.
    #[default]
    Student,
    /// Teacher.
    Teacher,
    /// Parent or guardian.
    Guardian,
    /// Administrator.
    Admin,
}

impl UserRole {
    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Guardian => "guardian",
            Self::Admin => "admin",
        }
    }

    /// Whether this role may only use the client on a phone-sized viewport.
    #[must_use]
    pub const fn mobile_only(self) -> bool {
        matches!(self, Self::Student)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            "guardian" | "parent" => Ok(Self::Guardian),
            "admin" => Ok(Self::Admin),
            _ => Err(ConfigError::UnknownRole {
                value: value.to_string(),
            }),
        }
    }
}

/// What the layout guard renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutDecision {
    /// Render the routed application.
    Application,
    /// Block the application with the screen size warning.
    ScreenSizeWarning,
}

/// Decide what to render for `role` given the current viewport state.
#[must_use]
pub const fn decide_layout(role: UserRole, oversized: bool) -> LayoutDecision {
    if oversized && role.mobile_only() {
        LayoutDecision::ScreenSizeWarning
    } else {
        LayoutDecision::Application
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_up_to_threshold_are_not_oversized() {
        for width in [0.0, 1.0, 320.0, 375.0, 429.5, 430.0] {
            assert!(!is_oversized(width, MAX_STUDENT_WIDTH), "{width}");
        }
    }

    #[test]
    fn widths_above_threshold_are_oversized() {
        for width in [430.5, 431.0, 768.0, 1280.0, 3840.0] {
            assert!(is_oversized(width, MAX_STUDENT_WIDTH), "{width}");
        }
    }

    #[test]
    fn only_students_are_blocked_on_wide_screens() {
        assert_eq!(
            decide_layout(UserRole::Student, true),
            LayoutDecision::ScreenSizeWarning
        );
        assert_eq!(
            decide_layout(UserRole::Student, false),
            LayoutDecision::Application
        );
        for role in [UserRole::Teacher, UserRole::Guardian, UserRole::Admin] {
            assert_eq!(decide_layout(role, true), LayoutDecision::Application);
            assert_eq!(decide_layout(role, false), LayoutDecision::Application);
        }
    }

    #[test]
    fn roles_parse_case_insensitively() -> Result<(), ConfigError> {
        assert_eq!(" Student ".parse::<UserRole>()?, UserRole::Student);
        assert_eq!("parent".parse::<UserRole>()?, UserRole::Guardian);
        assert_eq!("ADMIN".parse::<UserRole>()?, UserRole::Admin);
        assert_eq!(UserRole::Teacher.to_string(), "teacher");
        assert_eq!(
            "principal".parse::<UserRole>(),
            Err(ConfigError::UnknownRole {
                value: "principal".to_string()
            })
        );
        Ok(())
    }
}
