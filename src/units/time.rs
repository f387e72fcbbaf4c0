use super::Unit;

/// Time units. The base unit is the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    fn seconds(self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3600.0,
            TimeUnit::Day => 86400.0,
        }
    }
}

impl Unit for TimeUnit {
    const ALL: &'static [Self] = &[TimeUnit::Second, TimeUnit::Minute, TimeUnit::Hour, TimeUnit::Day];

    fn label(self) -> &'static str {
        match self {
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        value * self.seconds()
    }

    fn from_base(self, seconds: f64) -> f64 {
        seconds / self.seconds()
    }
}
