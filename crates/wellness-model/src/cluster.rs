use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Traveler archetype. A closed set: the three visitor segments observed in
/// the underlying survey study, not a computed clustering result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cluster {
    /// Long stay, low budget, visiting friends and relatives.
    Economic,
    /// Standard itinerary and budget; the majority segment.
    General,
    /// Short, high-spend, consumption-focused repeat visitors.
    Premium,
}

impl Cluster {
    pub const COUNT: usize = 3;

    /// All clusters in ascending id order. The order is load-bearing: it is
    /// the documented iteration order for tie resolution.
    pub const ALL: [Cluster; Cluster::COUNT] = [Cluster::Economic, Cluster::General, Cluster::Premium];

    /// Numeric id as used in the source data (`score_cluster_<id>` columns).
    pub fn id(self) -> u8 {
        match self {
            Cluster::Economic => 0,
            Cluster::General => 1,
            Cluster::Premium => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Cluster> {
        match id {
            0 => Some(Cluster::Economic),
            1 => Some(Cluster::General),
            2 => Some(Cluster::Premium),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self.id() as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cluster::Economic => "economic",
            Cluster::General => "general",
            Cluster::Premium => "premium",
        }
    }

    pub fn profile(self) -> &'static ClusterProfile {
        &PROFILES[self.index()]
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = String;

    /// Accepts the numeric id or the archetype name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return Cluster::from_id(id).ok_or_else(|| format!("unknown cluster id: {id}"));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "economic" => Ok(Cluster::Economic),
            "general" => Ok(Cluster::General),
            "premium" => Ok(Cluster::Premium),
            _ => Err(format!("unknown cluster: {trimmed}")),
        }
    }
}

/// Descriptive metadata attached to a classification for presentation.
/// Carries no behavior; the share/count figures come from the study the
/// archetypes were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterProfile {
    pub cluster: Cluster,
    pub name: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    /// Display color, `#RRGGBB`.
    pub color: &'static str,
    pub share_pct: f64,
    pub respondent_count: u32,
    pub key_factors: &'static [(&'static str, &'static str)],
}

static PROFILES: [ClusterProfile; Cluster::COUNT] = [
    ClusterProfile {
        cluster: Cluster::Economic,
        name: "Economic Wellness Tourist",
        description: "Stays in Korea a long time and works through its culture \
                      slowly on a modest budget.",
        traits: &["long stay", "visiting friends & relatives", "low budget", "culture immersion"],
        color: "#3498DB",
        share_pct: 10.9,
        respondent_count: 282,
        key_factors: &[
            ("Stay duration", "21+ days"),
            ("Spend level", "Budget"),
            ("Visit history", "Repeat visitor"),
            ("Lodging", "Friends & relatives"),
        ],
    },
    ClusterProfile {
        cluster: Cluster::General,
        name: "General Wellness Tourist",
        description: "The representative visitor: a standard itinerary and budget \
                      balancing Korea's major sights and cultural experiences.",
        traits: &["standard itinerary", "balanced budget", "culture curious", "hotel stays"],
        color: "#2ECC71",
        share_pct: 81.0,
        respondent_count: 2099,
        key_factors: &[
            ("Stay duration", "7-10 days"),
            ("Spend level", "Mid-range"),
            ("Visit history", "First or repeat visit"),
            ("Lodging", "Hotel / resort"),
        ],
    },
    ClusterProfile {
        cluster: Cluster::Premium,
        name: "Premium Wellness Tourist",
        description: "An experienced repeat visitor packing shopping and dining \
                      into a short, high-spend trip.",
        traits: &["short and intense", "high budget", "shopping focus", "efficiency"],
        color: "#E37745",
        share_pct: 8.1,
        respondent_count: 210,
        key_factors: &[
            ("Stay duration", "1-6 days"),
            ("Spend level", "High"),
            ("Visit history", "Frequent repeat visits"),
            ("Lodging", "Premium lodging"),
        ],
    },
];

/// Profiles for all clusters, ascending id order.
pub fn cluster_profiles() -> &'static [ClusterProfile; Cluster::COUNT] {
    &PROFILES
}
