use crate::i18n::Locale;
use crate::models::{MenuCategory, MenuItem, MenuTag};

/// Tag facet selection. `"all"` is the sentinel for no tag restriction.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TagFilter {
    #[default]
    All,
    Only(MenuTag),
}

impl TagFilter {
    pub const CHOICES: [TagFilter; 5] = [
        Self::All,
        Self::Only(MenuTag::Popular),
        Self::Only(MenuTag::Vegetarian),
        Self::Only(MenuTag::Specialty),
        Self::Only(MenuTag::New),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(tag) => tag.as_str(),
        }
    }

    /// Items without tags only pass when no specific tag is selected.
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(tag) => item.has_tag(*tag),
        }
    }
}

impl std::fmt::Display for TagFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TagFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

impl From<MenuTag> for TagFilter {
    fn from(tag: MenuTag) -> Self {
        Self::Only(tag)
    }
}

/// Inputs of the menu page. A category is always selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuFilter {
    pub category: MenuCategory,
    pub query: String,
    pub tag: TagFilter,
}

impl MenuFilter {
    pub fn new(category: MenuCategory) -> Self {
        Self {
            category,
            query: String::new(),
            tag: TagFilter::All,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<TagFilter>) -> Self {
        self.tag = tag.into();
        self
    }
}

#[derive(Debug, PartialEq)]
pub enum FilterOutcome<'a> {
    Matches(Vec<&'a MenuItem>),
    NoMatches,
}

impl<'a> FilterOutcome<'a> {
    pub fn items(&self) -> &[&'a MenuItem] {
        match self {
            Self::Matches(items) => items,
            Self::NoMatches => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatches)
    }
}

/// Selects the items shown for `filter`, ordered by `sort_order`.
///
/// The free-text query is matched case-insensitively against the name and
/// description in `locale` only. Equal `sort_order` values keep their input
/// order.
pub fn filter_items<'a>(
    items: &'a [MenuItem],
    filter: &MenuFilter,
    locale: Locale,
) -> Vec<&'a MenuItem> {
    let query = filter.query.to_lowercase();

    let mut matched: Vec<&MenuItem> = items
        .iter()
        .filter(|item| item.category == filter.category)
        .filter(|item| query.is_empty() || matches_query(item, &query, locale))
        .filter(|item| filter.tag.matches(item))
        .collect();

    matched.sort_by_key(|item| item.sort_order);
    matched
}

pub fn apply_filter<'a>(
    items: &'a [MenuItem],
    filter: &MenuFilter,
    locale: Locale,
) -> FilterOutcome<'a> {
    let matched = filter_items(items, filter, locale);
    if matched.is_empty() {
        FilterOutcome::NoMatches
    } else {
        FilterOutcome::Matches(matched)
    }
}

fn matches_query(item: &MenuItem, query: &str, locale: Locale) -> bool {
    item.name(locale).to_lowercase().contains(query)
        || item.description(locale).to_lowercase().contains(query)
}
