//! Closed vocabularies: screens, feelings, specialist references, directions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GroveError;

// ── Screens ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    #[serde(rename = "main", alias = "home")]
    Main,
    #[serde(rename = "ai-call", alias = "call")]
    Call,
    #[serde(rename = "tree")]
    Tree,
    #[serde(rename = "forest")]
    Forest,
    #[serde(rename = "specialists")]
    Specialists,
    #[serde(rename = "profile")]
    Profile,
    #[serde(rename = "session-booking", alias = "booking")]
    Booking,
}

impl ScreenId {
    pub const ALL: [ScreenId; 7] = [
        ScreenId::Main,
        ScreenId::Call,
        ScreenId::Tree,
        ScreenId::Forest,
        ScreenId::Specialists,
        ScreenId::Profile,
        ScreenId::Booking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::Main => "main",
            ScreenId::Call => "ai-call",
            ScreenId::Tree => "tree",
            ScreenId::Forest => "forest",
            ScreenId::Specialists => "specialists",
            ScreenId::Profile => "profile",
            ScreenId::Booking => "session-booking",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Main => "Home",
            ScreenId::Call => "Guided Call",
            ScreenId::Tree => "Tree",
            ScreenId::Forest => "Forest",
            ScreenId::Specialists => "Specialists",
            ScreenId::Profile => "Profile",
            ScreenId::Booking => "Book Session",
        }
    }

    /// Immersive screens hide the bottom navigation.
    pub fn is_immersive(self) -> bool {
        matches!(self, ScreenId::Call | ScreenId::Booking)
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = GroveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "home" => Ok(ScreenId::Main),
            "ai-call" | "call" => Ok(ScreenId::Call),
            "tree" => Ok(ScreenId::Tree),
            "forest" => Ok(ScreenId::Forest),
            "specialists" => Ok(ScreenId::Specialists),
            "profile" => Ok(ScreenId::Profile),
            "session-booking" | "booking" => Ok(ScreenId::Booking),
            _ => Err(GroveError::UnknownScreen(s.to_string())),
        }
    }
}

// ── Feelings ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feeling {
    Anxious,
    Stressed,
    Angry,
    Sad,
    #[serde(alias = "fatigues")]
    Fatigued,
    Unsure,
    /// "Instant Help" from the home screen.
    Emergency,
}

impl Feeling {
    /// The feeling grid on the home screen, in display order.
    pub const SELECTABLE: [Feeling; 6] = [
        Feeling::Anxious,
        Feeling::Stressed,
        Feeling::Angry,
        Feeling::Sad,
        Feeling::Fatigued,
        Feeling::Unsure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Feeling::Anxious => "anxious",
            Feeling::Stressed => "stressed",
            Feeling::Angry => "angry",
            Feeling::Sad => "sad",
            Feeling::Fatigued => "fatigued",
            Feeling::Unsure => "unsure",
            Feeling::Emergency => "emergency",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Feeling::Anxious => "Anxious",
            Feeling::Stressed => "Stressed",
            Feeling::Angry => "Angry",
            Feeling::Sad => "Sad",
            Feeling::Fatigued => "Fatigued",
            Feeling::Unsure => "Unsure",
            Feeling::Emergency => "Instant Help +",
        }
    }
}

/// Heading shown on the call screen for the latched feeling.
pub fn support_title(feeling: Option<Feeling>) -> &'static str {
    match feeling {
        Some(Feeling::Emergency) => "Emergency Support",
        Some(Feeling::Anxious) => "Managing Anxiety",
        Some(Feeling::Stressed) => "Stress Relief",
        Some(Feeling::Angry) => "Anger Management",
        Some(Feeling::Fatigued) => "Energy Restoration",
        Some(Feeling::Unsure) => "Self-Discovery",
        Some(Feeling::Sad) | None => "Guided Support",
    }
}

impl std::fmt::Display for Feeling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feeling {
    type Err = GroveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anxious" => Ok(Feeling::Anxious),
            "stressed" => Ok(Feeling::Stressed),
            "angry" => Ok(Feeling::Angry),
            "sad" => Ok(Feeling::Sad),
            "fatigued" | "fatigues" => Ok(Feeling::Fatigued),
            "unsure" => Ok(Feeling::Unsure),
            "emergency" => Ok(Feeling::Emergency),
            _ => Err(GroveError::UnknownFeeling(s.to_string())),
        }
    }
}

// ── Specialists ──

/// Opaque reference into the specialist catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecialistId(pub u32);

// ── Directional input ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Keys the router understands. Everything else belongs to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Arrow(Direction),
    Escape,
}

// ── Bottom navigation ──

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub screen: ScreenId,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        screen: ScreenId::Main,
        label: "Home",
    },
    NavItem {
        screen: ScreenId::Tree,
        label: "Tree",
    },
    NavItem {
        screen: ScreenId::Forest,
        label: "Forest",
    },
    NavItem {
        screen: ScreenId::Specialists,
        label: "Specialists",
    },
    NavItem {
        screen: ScreenId::Profile,
        label: "Profile",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_round_trips_through_str() {
        for screen in ScreenId::ALL {
            assert_eq!(screen.as_str().parse::<ScreenId>().unwrap(), screen);
        }
        assert_eq!("call".parse::<ScreenId>().unwrap(), ScreenId::Call);
        assert_eq!(" Home ".parse::<ScreenId>().unwrap(), ScreenId::Main);
    }

    #[test]
    fn test_unknown_screen_is_an_error() {
        let err = "resource-hub".parse::<ScreenId>().unwrap_err();
        assert_eq!(err, GroveError::UnknownScreen("resource-hub".into()));
    }

    #[test]
    fn test_screen_serde_names() {
        let json = serde_json::to_string(&ScreenId::Booking).unwrap();
        assert_eq!(json, "\"session-booking\"");
        let parsed: ScreenId = serde_json::from_str("\"call\"").unwrap();
        assert_eq!(parsed, ScreenId::Call);
    }

    #[test]
    fn test_immersive_screens() {
        let immersive: Vec<ScreenId> = ScreenId::ALL
            .into_iter()
            .filter(|s| s.is_immersive())
            .collect();
        assert_eq!(immersive, vec![ScreenId::Call, ScreenId::Booking]);
    }

    #[test]
    fn test_feeling_parse_accepts_legacy_spelling() {
        assert_eq!("fatigues".parse::<Feeling>().unwrap(), Feeling::Fatigued);
        assert!("numb".parse::<Feeling>().is_err());
    }

    #[test]
    fn test_support_titles() {
        assert_eq!(support_title(Some(Feeling::Anxious)), "Managing Anxiety");
        assert_eq!(support_title(Some(Feeling::Emergency)), "Emergency Support");
        assert_eq!(support_title(None), "Guided Support");
    }

    #[test]
    fn test_nav_items_never_include_immersive_screens() {
        assert_eq!(NAV_ITEMS.len(), 5);
        assert!(NAV_ITEMS.iter().all(|item| !item.screen.is_immersive()));
    }
}
