use crate::domain::ports::Clock;
use chrono::{Datelike, Local};

/// 以本地時間決定「今年」
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_matches_chrono() {
        let year = SystemClock.current_year();
        assert!((year - Local::now().year()).abs() <= 1);
    }
}
