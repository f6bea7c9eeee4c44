//! Level classification for referral depth.
//!
//! Maps a member's depth relative to the viewing user (1 = direct referral)
//! to a badge color and a commission percentage. Both functions are total:
//! any depth outside 1–5 takes the fallback band instead of failing.

use serde::{Deserialize, Serialize};

/// Commission percent for direct (level 1) referrals.
pub const DIRECT_COMMISSION: f64 = 10.0;

/// Commission percent for levels 2–5 and any unmapped depth.
pub const INDIRECT_COMMISSION: f64 = 5.0;

/// Deepest level with its own badge; deeper referrals fall back to [`LevelColor::Gray`].
pub const MAX_LEVEL: u32 = 5;

/// Badge color for a referral level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelColor {
    /// Level 1 (direct referrals)
    Yellow,
    /// Level 2
    Blue,
    /// Level 3
    Green,
    /// Level 4
    Purple,
    /// Level 5
    Pink,
    /// Fallback for any depth outside 1–5
    Gray,
}

impl LevelColor {
    /// Classify a referral depth. Total: unmapped depths return `Gray`.
    pub fn for_level(level: u32) -> Self {
        match level {
            1 => Self::Yellow,
            2 => Self::Blue,
            3 => Self::Green,
            4 => Self::Purple,
            5 => Self::Pink,
            _ => Self::Gray,
        }
    }

    /// CSS utility classes for the badge, matching the dashboard theme.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Yellow => "text-yellow-400 bg-yellow-400/20",
            Self::Blue => "text-blue-400 bg-blue-400/20",
            Self::Green => "text-green-400 bg-green-400/20",
            Self::Purple => "text-purple-400 bg-purple-400/20",
            Self::Pink => "text-pink-400 bg-pink-400/20",
            Self::Gray => "text-gray-400 bg-gray-400/20",
        }
    }
}

impl std::fmt::Display for LevelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yellow => write!(f, "yellow"),
            Self::Blue => write!(f, "blue"),
            Self::Green => write!(f, "green"),
            Self::Purple => write!(f, "purple"),
            Self::Pink => write!(f, "pink"),
            Self::Gray => write!(f, "gray"),
        }
    }
}

/// Commission percent for a referral level.
///
/// Level 1 pays [`DIRECT_COMMISSION`]; every other depth, including
/// values outside 1–5, pays the flat [`INDIRECT_COMMISSION`]. The
/// schedule does not decay past level 1.
pub fn commission_percent(level: u32) -> f64 {
    if level == 1 {
        DIRECT_COMMISSION
    } else {
        INDIRECT_COMMISSION
    }
}

/// Legend label for a level ("Direct" for level 1, "Level N" otherwise).
pub fn level_label(level: u32) -> String {
    if level == 1 {
        "Direct".to_string()
    } else {
        format!("Level {level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_color_for_mapped_levels() {
        assert_eq!(LevelColor::for_level(1), LevelColor::Yellow);
        assert_eq!(LevelColor::for_level(2), LevelColor::Blue);
        assert_eq!(LevelColor::for_level(3), LevelColor::Green);
        assert_eq!(LevelColor::for_level(4), LevelColor::Purple);
        assert_eq!(LevelColor::for_level(5), LevelColor::Pink);
    }

    #[test]
    fn test_color_fallback_for_unmapped_levels() {
        assert_eq!(LevelColor::for_level(0), LevelColor::Gray);
        assert_eq!(LevelColor::for_level(6), LevelColor::Gray);
        assert_eq!(LevelColor::for_level(7), LevelColor::Gray);
        assert_eq!(LevelColor::for_level(u32::MAX), LevelColor::Gray);
    }

    #[test]
    fn test_commission_direct_vs_indirect() {
        assert_abs_diff_eq!(commission_percent(1), 10.0);
        for level in 2..=5 {
            assert_abs_diff_eq!(commission_percent(level), 5.0);
        }
    }

    #[test]
    fn test_commission_out_of_range_uses_default() {
        assert_abs_diff_eq!(commission_percent(0), 5.0);
        assert_abs_diff_eq!(commission_percent(7), 5.0);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(level_label(1), "Direct");
        assert_eq!(level_label(3), "Level 3");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(format!("{}", LevelColor::Yellow), "yellow");
        assert_eq!(format!("{}", LevelColor::Gray), "gray");
    }

    #[test]
    fn test_css_classes_cover_all_variants() {
        for level in 0..=6 {
            assert!(LevelColor::for_level(level).css_class().contains("text-"));
        }
    }
}
