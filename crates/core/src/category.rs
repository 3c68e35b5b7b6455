//! Task categories (layers) and label normalization.

use serde::{Deserialize, Serialize};

/// Canonical category of a task's strategic role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Keeps everything else standing
    Fundament,
    /// Moves long-term goals forward
    Strategic,
    /// Routine upkeep
    #[default]
    Support,
    /// Free time and experiments
    Leisure,
}

impl Category {
    /// All categories, highest weight first.
    pub const ALL: [Category; 4] = [
        Category::Fundament,
        Category::Strategic,
        Category::Support,
        Category::Leisure,
    ];

    /// Map a free-form label to a category.
    ///
    /// Matching is trimmed and case-insensitive against a fixed synonym table
    /// that includes Czech spellings with and without diacritics. Anything
    /// unknown, including an empty label, is [`Category::Support`].
    pub fn normalize(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "fundament" | "fundamental" | "foundation" => Category::Fundament,
            "strategic" | "strategie" | "strategicky" | "strategicke" => Category::Strategic,
            "support" | "podpurne" | "podpůrné" => Category::Support,
            "leisure" | "volnocas" | "volnočas" | "experiment" | "experiments" => {
                Category::Leisure
            }
            _ => Category::Support,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fundament => "fundament",
            Category::Strategic => "strategic",
            Category::Support => "support",
            Category::Leisure => "leisure",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
