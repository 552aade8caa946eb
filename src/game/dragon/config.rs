// Dragon tuning values - all movement behaviour is data-driven

use thiserror::Error;

/// Tuning values for the dragon's movement, jumping and flight
#[derive(Debug, Clone)]
pub struct DragonConfig {
    // Ground movement
    /// Horizontal speed when walking (units/second)
    pub walk_speed: f32,
    /// Horizontal speed when running
    pub run_speed: f32,
    /// Horizontal speed when crawling
    pub crawl_speed: f32,
    /// Acceleration towards a non-zero target speed on the ground
    pub acceleration: f32,
    /// Deceleration towards zero on the ground
    pub deceleration: f32,
    /// Acceleration multiplier while airborne (0.0 = no air control)
    pub air_control: f32,

    // Jumping
    /// Vertical velocity applied on jump
    pub jump_force: f32,
    /// Grace window after leaving ground during which a jump still fires
    pub coyote_time: f32,
    /// Window before landing during which an early press is remembered
    pub jump_buffer: f32,
    /// Vertical velocity multiplier applied each frame jump is released early
    pub jump_cut_multiplier: f32,

    // Flight
    /// Minimum upward velocity on flight entry
    pub fly_impulse: f32,
    /// Maximum seconds between two airborne presses to enter flight
    pub double_tap_time: f32,
    /// Most negative vertical velocity allowed while gliding
    pub max_glide_fall_speed: f32,

    // Gravity scales per mode
    /// Gravity multiplier on the ground and in regular air
    pub normal_gravity: f32,
    /// Gravity multiplier while flying
    pub fly_gravity: f32,
    /// Gravity multiplier while gliding
    pub glide_gravity: f32,

    // Grounding
    /// Radius of the ground-overlap probe
    pub ground_check_radius: f32,
}

/// Baseline tuning, balanced for a 2 unit tall dragon
pub const BASE_CONFIG: DragonConfig = DragonConfig {
    walk_speed: 5.0,
    run_speed: 9.0,
    crawl_speed: 2.5,
    acceleration: 45.0,
    deceleration: 60.0,
    air_control: 0.65,

    jump_force: 12.0,
    coyote_time: 0.12,
    jump_buffer: 0.1,
    jump_cut_multiplier: 0.5,

    fly_impulse: 8.0,
    double_tap_time: 0.3,
    max_glide_fall_speed: -2.0,

    normal_gravity: 3.0,
    fly_gravity: 1.0,
    glide_gravity: 0.4,

    ground_check_radius: 0.15,
};

impl Default for DragonConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

/// A tuning value that cannot work at runtime
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

impl DragonConfig {
    /// Check the configuration for values that would corrupt the control loop
    ///
    /// Validation is opt-in; nothing in the per-frame update can fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("crawl_speed", self.crawl_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("air_control", self.air_control),
            ("jump_force", self.jump_force),
            ("coyote_time", self.coyote_time),
            ("jump_buffer", self.jump_buffer),
            ("jump_cut_multiplier", self.jump_cut_multiplier),
            ("fly_impulse", self.fly_impulse),
            ("double_tap_time", self.double_tap_time),
            ("max_glide_fall_speed", self.max_glide_fall_speed),
            ("normal_gravity", self.normal_gravity),
            ("fly_gravity", self.fly_gravity),
            ("glide_gravity", self.glide_gravity),
            ("ground_check_radius", self.ground_check_radius),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        // max_glide_fall_speed is the one legitimately negative value
        let non_negative = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("crawl_speed", self.crawl_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("air_control", self.air_control),
            ("coyote_time", self.coyote_time),
            ("jump_buffer", self.jump_buffer),
            ("jump_cut_multiplier", self.jump_cut_multiplier),
            ("double_tap_time", self.double_tap_time),
            ("ground_check_radius", self.ground_check_radius),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_config_is_valid() {
        assert_eq!(BASE_CONFIG.validate(), Ok(()));
    }

    #[test]
    fn test_default_equals_base() {
        let config = DragonConfig::default();
        assert_eq!(config.walk_speed, BASE_CONFIG.walk_speed);
        assert_eq!(config.coyote_time, BASE_CONFIG.coyote_time);
    }

    #[test]
    fn test_nan_rejected() {
        let mut config = DragonConfig::default();
        config.jump_force = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "jump_force", .. })
        ));
    }

    #[test]
    fn test_negative_timer_rejected() {
        let mut config = DragonConfig::default();
        config.coyote_time = -0.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "coyote_time", .. })
        ));
    }

    #[test]
    fn test_negative_glide_fall_speed_allowed() {
        let config = DragonConfig::default();
        assert!(config.max_glide_fall_speed < 0.0);
        assert_eq!(config.validate(), Ok(()));
    }
}
