use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cluster::Cluster;

/// Identifier of one of the seven survey questions. Ordering is stable and
/// significant: Q1 (stay duration) and Q2 (spend level) double as tie-break
/// discriminators during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
}

impl QuestionId {
    pub const COUNT: usize = 7;

    pub const ALL: [QuestionId; QuestionId::COUNT] = [
        QuestionId::Q1,
        QuestionId::Q2,
        QuestionId::Q3,
        QuestionId::Q4,
        QuestionId::Q5,
        QuestionId::Q6,
        QuestionId::Q7,
    ];

    pub fn index(self) -> usize {
        match self {
            QuestionId::Q1 => 0,
            QuestionId::Q2 => 1,
            QuestionId::Q3 => 2,
            QuestionId::Q4 => 3,
            QuestionId::Q5 => 4,
            QuestionId::Q6 => 5,
            QuestionId::Q7 => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::Q1 => "q1",
            QuestionId::Q2 => "q2",
            QuestionId::Q3 => "q3",
            QuestionId::Q4 => "q4",
            QuestionId::Q5 => "q5",
            QuestionId::Q6 => "q6",
            QuestionId::Q7 => "q7",
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        QuestionId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| format!("unknown question id: {s}"))
    }
}

/// An immutable survey question: prompt, ordered option labels, and the
/// per-option weight row. `weights[option][cluster.index()]` is the integer
/// contribution the option adds to that cluster's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub category: &'static str,
    pub options: &'static [&'static str],
    pub weights: &'static [[u32; Cluster::COUNT]],
}

impl Question {
    /// Weight row for a selected option index, if in range.
    pub fn weight_row(&self, option: usize) -> Option<&[u32; Cluster::COUNT]> {
        self.weights.get(option)
    }
}

static QUESTIONS: [Question; QuestionId::COUNT] = [
    Question {
        id: QuestionId::Q1,
        prompt: "How long do you plan to stay in Korea?",
        category: "Stay duration",
        options: &[
            "1-6 days (short trip)",
            "7-10 days (typical visit)",
            "11-20 days (extended trip)",
            "21+ days (long stay)",
        ],
        weights: &[[0, 1, 2], [0, 2, 0], [1, 1, 0], [3, 0, 0]],
    },
    Question {
        id: QuestionId::Q2,
        prompt: "What is your expected daily spend per person (USD)?",
        category: "Spend level",
        options: &[
            "$0-150 (budget)",
            "$151-350 (mid-range)",
            "$351-700 (high)",
            "$701+ (premium)",
        ],
        weights: &[[3, 0, 0], [0, 2, 0], [0, 0, 1], [0, 0, 3]],
    },
    Question {
        id: QuestionId::Q3,
        prompt: "How many times have you visited Korea?",
        category: "Visit history",
        options: &[
            "First visit",
            "2nd-3rd visit",
            "4th-5th visit",
            "6th visit or more",
        ],
        weights: &[[0, 2, 0], [1, 2, 0], [1, 0, 1], [0, 0, 3]],
    },
    Question {
        id: QuestionId::Q4,
        prompt: "Which best describes your main lodging?",
        category: "Lodging type",
        options: &[
            "Staying with relatives or friends",
            "Hotel or resort",
            "Guesthouse or hostel",
            "Short-term rental or condominium",
        ],
        weights: &[[3, 0, 0], [0, 2, 1], [1, 1, 0], [0, 1, 1]],
    },
    Question {
        id: QuestionId::Q5,
        prompt: "How interested are you in hands-on traditional culture \
                 (hanbok fitting, cooking classes)?",
        category: "Culture experience",
        options: &[
            "Very high - a must-do",
            "Moderate - if the chance comes up",
            "Not sure - depends on the day",
            "Low - not important to me",
        ],
        weights: &[[1, 2, 0], [1, 1, 0], [0, 0, 0], [0, 0, 1]],
    },
    Question {
        id: QuestionId::Q6,
        prompt: "How keen are you on museums and exhibitions?",
        category: "Culture visits",
        options: &[
            "Very keen - several venues",
            "Somewhat - one or two places",
            "Not sure - if time allows",
            "Low - happy to skip them",
        ],
        weights: &[[1, 2, 0], [1, 1, 0], [0, 0, 0], [0, 0, 1]],
    },
    Question {
        id: QuestionId::Q7,
        prompt: "Which travel style sounds most like you?",
        category: "Travel style",
        options: &[
            "Stay long, take it slow, meet friends and soak up the culture",
            "Average itinerary balancing major sights and experiences",
            "Short and intense - shopping and dining, efficiency first",
        ],
        weights: &[[3, 0, 0], [0, 3, 0], [0, 0, 3]],
    },
];

/// All seven questions, in survey order.
pub fn questions() -> &'static [Question; QuestionId::COUNT] {
    &QUESTIONS
}

/// Look up a single question by id.
pub fn question(id: QuestionId) -> &'static Question {
    &QUESTIONS[id.index()]
}
