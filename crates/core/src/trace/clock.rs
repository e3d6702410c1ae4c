/// Source of the `HH:MM:SS` stamp on meta lines.
pub trait TraceClock {
    fn hms(&self) -> String;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TraceClock for LocalClock {
    fn hms(&self) -> String {
        chrono::Local::now().format("%H:%M:%S").to_string()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl TraceClock for FixedClock {
    fn hms(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_clock_shape() {
        let stamp = LocalClock.hms();
        assert_eq!(stamp.len(), 8);
        assert_eq!(stamp.as_bytes()[2], b':');
        assert_eq!(stamp.as_bytes()[5], b':');
    }
}
