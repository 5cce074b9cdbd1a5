use serde::{Deserialize, Serialize};

/// Non-exclusive facet attached to a dish.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuTag {
    Popular,
    Vegetarian,
    Specialty,
    New,
}

impl MenuTag {
    pub const ALL: [MenuTag; 4] = [
        Self::Popular,
        Self::Vegetarian,
        Self::Specialty,
        Self::New,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Vegetarian => "vegetarian",
            Self::Specialty => "specialty",
            Self::New => "new",
        }
    }
}

impl std::fmt::Display for MenuTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MenuTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popular" => Ok(Self::Popular),
            "vegetarian" => Ok(Self::Vegetarian),
            "specialty" => Ok(Self::Specialty),
            "new" => Ok(Self::New),
            _ => Err(format!("invalid menu tag: {}", s)),
        }
    }
}

/// Parses stored tag names, skipping anything outside the known set.
pub fn parse_tags<S: AsRef<str>>(raw: &[S]) -> Vec<MenuTag> {
    raw.iter().filter_map(|t| t.as_ref().parse().ok()).collect()
}

pub fn tag_names(tags: &[MenuTag]) -> Vec<String> {
    tags.iter().map(|t| t.as_str().to_string()).collect()
}
