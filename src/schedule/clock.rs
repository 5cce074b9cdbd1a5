use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};

/// Source of the restaurant's local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<FixedOffset>;

    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Current time at a fixed UTC offset (the restaurant's time zone).
#[derive(Debug, Clone, Copy)]
pub struct RestaurantClock {
    offset: FixedOffset,
}

impl RestaurantClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Falls back to UTC when the offset is out of range.
    pub fn from_offset_minutes(minutes: i32) -> Self {
        let offset = minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                log::warn!(
                    "UTC offset of {} minutes is out of range, using UTC",
                    minutes
                );
                Utc.fix()
            });
        Self { offset }
    }
}

impl Clock for RestaurantClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}
