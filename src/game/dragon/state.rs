// Movement mode and gravity mode definitions

use super::config::DragonConfig;

/// The dragon's discrete movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveMode {
    /// On the ground (walking, running, crawling or hiding)
    Grounded,
    /// In the air without flight (jump arc or fall)
    Airborne,
    /// Sustained flight after a double tap
    Flying,
    /// Flight with jump held: reduced gravity and a clamped fall speed
    Gliding,
}

impl Default for MoveMode {
    fn default() -> Self {
        Self::Grounded
    }
}

impl MoveMode {
    /// Check if the dragon is on the ground
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Grounded)
    }

    /// Check if the dragon is in the air (flying or not)
    pub fn is_airborne(&self) -> bool {
        !self.is_grounded()
    }

    /// Check if flight is active (gliding included)
    pub fn is_flying(&self) -> bool {
        matches!(self, Self::Flying | Self::Gliding)
    }
}

/// Which gravity-scale multiplier the physics body should use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityMode {
    /// Regular gravity on the ground and in a jump/fall
    Normal,
    /// Reduced gravity while flying
    Fly,
    /// Strongly reduced gravity while gliding
    Glide,
}

impl GravityMode {
    /// The gravity-scale multiplier for this mode
    pub fn scale(&self, config: &DragonConfig) -> f32 {
        match self {
            Self::Normal => config.normal_gravity,
            Self::Fly => config.fly_gravity,
            Self::Glide => config.glide_gravity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode() {
        assert_eq!(MoveMode::default(), MoveMode::Grounded);
    }

    #[test]
    fn test_mode_helpers() {
        assert!(MoveMode::Grounded.is_grounded());
        assert!(MoveMode::Airborne.is_airborne());
        assert!(!MoveMode::Airborne.is_flying());
        assert!(MoveMode::Flying.is_flying());
        assert!(MoveMode::Gliding.is_flying());
        assert!(MoveMode::Gliding.is_airborne());
    }

    #[test]
    fn test_gravity_scales() {
        let config = DragonConfig::default();
        assert_eq!(GravityMode::Normal.scale(&config), config.normal_gravity);
        assert_eq!(GravityMode::Fly.scale(&config), config.fly_gravity);
        assert_eq!(GravityMode::Glide.scale(&config), config.glide_gravity);
    }
}
