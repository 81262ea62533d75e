use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SessionSettings {
    pub grid_width: i32,
    pub grid_height: i32,
    pub max_speed_ms: u64,
    pub min_speed_ms: u64,
    pub speed_step_ms: u64,
    pub score_increment: u32,
}

impl SessionSettings {
    pub fn max_speed(&self) -> Duration {
        Duration::from_millis(self.max_speed_ms)
    }

    pub fn min_speed(&self) -> Duration {
        Duration::from_millis(self.min_speed_ms)
    }

    pub fn speed_step(&self) -> Duration {
        Duration::from_millis(self.speed_step_ms)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            max_speed_ms: 750,
            min_speed_ms: 50,
            speed_step_ms: 50,
            score_increment: 1,
        }
    }
}

impl Validate for SessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_width < 20 || self.grid_width > 100 {
            return Err("grid_width must be between 20 and 100".to_string());
        }
        if self.grid_height < 20 || self.grid_height > 100 {
            return Err("grid_height must be between 20 and 100".to_string());
        }
        if self.min_speed_ms == 0 {
            return Err("min_speed_ms must be greater than 0".to_string());
        }
        if self.max_speed_ms < self.min_speed_ms {
            return Err("max_speed_ms must not be below min_speed_ms".to_string());
        }
        if self.max_speed_ms > 5000 {
            return Err("max_speed_ms must not exceed 5000".to_string());
        }
        if self.speed_step_ms == 0 {
            return Err("speed_step_ms must be greater than 0".to_string());
        }
        if self.score_increment == 0 {
            return Err("score_increment must be greater than 0".to_string());
        }
        Ok(())
    }
}
