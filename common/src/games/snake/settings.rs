use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::{FieldSize, Point};

pub const MIN_FIELD_DIMENSION: u32 = 2;
pub const MAX_FIELD_DIMENSION: u32 = 200;
pub const MIN_TICK_INTERVAL_MS: u32 = 10;
pub const MAX_TICK_INTERVAL_MS: u32 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeSettings {
    pub field_width: u32,
    pub field_height: u32,
    /// Pixel size of one cell. Only renderers read it.
    pub cell_size: u32,
    pub tick_interval_ms: u32,
    pub start_x: u32,
    pub start_y: u32,
    pub initial_length: u32,
}

impl SnakeSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width as usize, self.field_height as usize)
    }

    pub fn start_position(&self) -> Point {
        Point::new(self.start_x as i32, self.start_y as i32)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        let dimensions = MIN_FIELD_DIMENSION..=MAX_FIELD_DIMENSION;
        if !dimensions.contains(&self.field_width) || !dimensions.contains(&self.field_height) {
            return Err(format!(
                "Field dimensions must be between {} and {}, got {}x{}",
                MIN_FIELD_DIMENSION, MAX_FIELD_DIMENSION, self.field_width, self.field_height
            ));
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(format!(
                "Tick interval must be between {}ms and {}ms, got {}ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, self.tick_interval_ms
            ));
        }
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        if self.start_x >= self.field_width || self.start_y >= self.field_height {
            return Err(format!(
                "Start position ({}, {}) is outside the {}x{} field",
                self.start_x, self.start_y, self.field_width, self.field_height
            ));
        }
        if self.initial_length < 1 {
            return Err("initial_length must be at least 1".to_string());
        }
        if self.initial_length > self.start_x + 1 {
            return Err(format!(
                "A snake of length {} starting at x={} does not fit on the field",
                self.initial_length, self.start_x
            ));
        }
        Ok(())
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            cell_size: 20,
            tick_interval_ms: 66,
            start_x: 0,
            start_y: 0,
            initial_length: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSettings::default().validate().is_ok());
        assert_eq!(SnakeSettings::default().tick_interval(), Duration::from_millis(66));
    }

    #[test]
    fn test_field_bounds_are_enforced() {
        let settings = SnakeSettings {
            field_width: 1,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = SnakeSettings {
            field_height: MAX_FIELD_DIMENSION + 1,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_start_must_be_on_field() {
        let settings = SnakeSettings {
            start_x: 20,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_initial_body_must_fit_behind_start() {
        let settings = SnakeSettings {
            start_x: 1,
            initial_length: 3,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = SnakeSettings {
            start_x: 2,
            initial_length: 3,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_tick_interval_bounds() {
        let settings = SnakeSettings {
            tick_interval_ms: 5,
            ..SnakeSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
