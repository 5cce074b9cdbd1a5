use chrono::Timelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::MenuCategory;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid hour range {start}..{end} for {period}")]
    InvalidRange {
        period: &'static str,
        start: u32,
        end: u32,
    },

    #[error(
        "Service hours for {earlier} and {later} overlap or are out of order"
    )]
    Overlap {
        earlier: &'static str,
        later: &'static str,
    },
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPeriod {
    Breakfast,
    Lunch,
    Dinner,
    Closed,
}

impl MealPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Closed => "closed",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Menu served during this period, if any.
    pub fn category(&self) -> Option<MenuCategory> {
        match self {
            Self::Breakfast => Some(MenuCategory::Breakfast),
            Self::Lunch => Some(MenuCategory::Lunch),
            Self::Dinner => Some(MenuCategory::Dinner),
            Self::Closed => None,
        }
    }
}

impl std::fmt::Display for MealPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Half-open `[start, end)` range of hours in a day.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.start <= hour && hour < self.end
    }

    fn is_valid(&self) -> bool {
        self.start < self.end && self.end <= 24
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ServiceHours {
    breakfast: HourRange,
    lunch: HourRange,
    dinner: HourRange,
}

impl Default for ServiceHours {
    fn default() -> Self {
        Self {
            breakfast: HourRange::new(9, 12),
            lunch: HourRange::new(12, 17),
            dinner: HourRange::new(17, 22),
        }
    }
}

impl ServiceHours {
    /// Ranges must be non-empty, within the day, and strictly follow one
    /// another: breakfast, then lunch, then dinner.
    pub fn new(
        breakfast: HourRange,
        lunch: HourRange,
        dinner: HourRange,
    ) -> Result<Self, ScheduleError> {
        let named = [
            ("breakfast", breakfast),
            ("lunch", lunch),
            ("dinner", dinner),
        ];

        for (period, range) in named {
            if !range.is_valid() {
                return Err(ScheduleError::InvalidRange {
                    period,
                    start: range.start,
                    end: range.end,
                });
            }
        }

        for pair in named.windows(2) {
            let (earlier, first) = pair[0];
            let (later, second) = pair[1];
            if first.end > second.start {
                return Err(ScheduleError::Overlap { earlier, later });
            }
        }

        Ok(Self {
            breakfast,
            lunch,
            dinner,
        })
    }

    pub fn range(&self, category: MenuCategory) -> HourRange {
        match category {
            MenuCategory::Breakfast => self.breakfast,
            MenuCategory::Lunch => self.lunch,
            MenuCategory::Dinner => self.dinner,
        }
    }

    pub fn period_at(&self, hour: u32) -> MealPeriod {
        if self.breakfast.contains(hour) {
            MealPeriod::Breakfast
        } else if self.lunch.contains(hour) {
            MealPeriod::Lunch
        } else if self.dinner.contains(hour) {
            MealPeriod::Dinner
        } else {
            MealPeriod::Closed
        }
    }
}

pub fn current_period<T: Timelike>(
    now: &T,
    hours: &ServiceHours,
) -> MealPeriod {
    hours.period_at(now.hour())
}

/// Category the menu opens on: the explicit request if it names one,
/// otherwise what is being served now, otherwise breakfast.
pub fn initial_menu_category(
    requested: Option<&str>,
    period: MealPeriod,
) -> MenuCategory {
    requested
        .and_then(|raw| raw.parse().ok())
        .or_else(|| period.category())
        .unwrap_or(MenuCategory::Breakfast)
}
