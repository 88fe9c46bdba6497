use serde::Serialize;

/// Fixed set of household expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Groceries,
    Housing,
    Transport,
    Health,
    Leisure,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Groceries,
        Category::Housing,
        Category::Transport,
        Category::Health,
        Category::Leisure,
        Category::Other,
    ];

    pub fn to_db_str(self) -> &'static str {
        match self {
            Category::Groceries => "groceries",
            Category::Housing => "housing",
            Category::Transport => "transport",
            Category::Health => "health",
            Category::Leisure => "leisure",
            Category::Other => "other",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "groceries" => Some(Category::Groceries),
            "housing" => Some(Category::Housing),
            "transport" => Some(Category::Transport),
            "health" => Some(Category::Health),
            "leisure" => Some(Category::Leisure),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    /// Display name for tables and summaries.
    pub fn label(self) -> &'static str {
        match self {
            Category::Groceries => "Groceries",
            Category::Housing => "Housing",
            Category::Transport => "Transport",
            Category::Health => "Health",
            Category::Leisure => "Leisure",
            Category::Other => "Other",
        }
    }
}
