use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Broad grouping of selectable emotions.
///
/// Categories only affect how emotions are listed and filtered; the rewrite
/// pipeline never branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Primary,
    Social,
    Professional,
    Casual,
    Complex,
}

impl EmotionCategory {
    /// Every category, in display order.
    pub const ALL: [EmotionCategory; 5] = [
        EmotionCategory::Primary,
        EmotionCategory::Social,
        EmotionCategory::Professional,
        EmotionCategory::Casual,
        EmotionCategory::Complex,
    ];

    /// The category name as shown to users.
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionCategory::Primary => "Primary",
            EmotionCategory::Social => "Social",
            EmotionCategory::Professional => "Professional",
            EmotionCategory::Casual => "Casual",
            EmotionCategory::Complex => "Complex",
        }
    }
}

impl Display for EmotionCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = String;

    /// Parses a category name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmotionCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown emotion category '{s}'"))
    }
}
