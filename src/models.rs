use serde::{Deserialize, Serialize};

pub const KNOWN_PLATFORMS: [&str; 6] = [
    "LeetCode",
    "Codeforces",
    "CodeChef",
    "HackerRank",
    "AtCoder",
    "Other",
];

pub const DEFAULT_PLATFORM: &str = "LeetCode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Display order of the distribution.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Easy" => Some(Self::Easy),
            "Medium" => Some(Self::Medium),
            "Hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn color_token(&self) -> &'static str {
        match self {
            Self::Easy => "var(--accent-success)",
            Self::Medium => "var(--accent-warning)",
            Self::Hard => "var(--accent-danger)",
        }
    }
}

/// A solved problem as handed over by the store.
///
/// `difficulty` stays textual so that records with a value outside the
/// known set still load; the stats tally skips them. `date` is a local
/// calendar day in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ProblemRecord {
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::parse(&self.difficulty)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    #[serde(default)]
    pub problems: Vec<ProblemRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewProblemRequest {
    #[serde(default)]
    pub title: String,
    pub platform: Option<String>,
    pub difficulty: Option<String>,
    /// Comma separated, e.g. `"Array, DP"`.
    #[serde(default)]
    pub tags: String,
    pub date: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemQuery {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultySlice {
    pub name: String,
    pub value: u64,
    pub color_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPoint {
    pub date_key: String,
    pub day_label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_solved: u64,
    pub difficulty_distribution: Vec<DifficultySlice>,
    pub current_streak: u32,
    pub activity_data: Vec<ActivityPoint>,
}
