use std::time::Duration;

/// Configuration for view actors
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Capacity of the command channel of each view.
    ///
    /// Commands from the GUI are dropped with a warning when the channel is full.
    pub command_capacity: usize,

    /// How often views with time dependent data refresh it (seconds), e.g. routes
    /// of the clones view.
    pub tick_interval_seconds: u64,
}

impl ViewConfig {
    /// Create a new configuration with sensible defaults
    ///
    /// # Arguments
    /// * `command_capacity` - Capacity of the command channel of each view
    pub fn new(command_capacity: usize) -> Self {
        Self {
            command_capacity: command_capacity.max(1),
            tick_interval_seconds: 5 * 60, // 5 minutes
        }
    }

    /// Get tick interval as Duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_seconds)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(32)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::app::view::ViewConfig;

    #[test]
    fn test_default_config() {
        let config = ViewConfig::default();

        assert_eq!(
            config.command_capacity, 32,
            "Default command_capacity should be 32"
        );
        assert_eq!(
            config.tick_interval_seconds, 300,
            "Default tick_interval_seconds should be 300 (5 minutes)"
        );
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let config = ViewConfig::new(0);

        assert_eq!(
            config.command_capacity, 1,
            "command_capacity should be at least 1 as channels can not be empty"
        );
    }

    #[test]
    fn test_tick_interval_conversion() {
        let mut config = ViewConfig::new(8);
        config.tick_interval_seconds = 10;

        assert_eq!(
            config.tick_interval(),
            Duration::from_secs(10),
            "tick_interval() should return Duration from seconds"
        );
    }
}
