// Math utilities and helper functions

/// Input axis values smaller than this count as no input
pub const AXIS_DEADZONE: f32 = 0.01;

/// Move `current` towards `target` by at most `max_delta`
///
/// This is the approach-to-target step used by the speed controller:
/// the returned value never overshoots `target`.
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(delta)
    }
}

/// Snap an axis value to zero when it is inside the deadzone
pub fn deadzone(value: f32) -> f32 {
    if value.abs() < AXIS_DEADZONE {
        0.0
    } else {
        value
    }
}

/// Linear interpolation
#[allow(dead_code)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Check if two f32 values are approximately equal
#[allow(dead_code)]
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_toward_within_step() {
        assert_eq!(move_toward(0.0, 1.0, 2.0), 1.0);
        assert_eq!(move_toward(5.0, 5.0, 0.1), 5.0);
    }

    #[test]
    fn test_move_toward_clamps_step() {
        assert_eq!(move_toward(0.0, 10.0, 1.0), 1.0);
        assert_eq!(move_toward(0.0, -10.0, 1.0), -1.0);
    }

    #[test]
    fn test_move_toward_never_overshoots() {
        let mut v = 0.0;
        for _ in 0..100 {
            v = move_toward(v, 3.0, 0.25);
        }
        assert_eq!(v, 3.0);
    }

    #[test]
    fn test_deadzone() {
        assert_eq!(deadzone(0.005), 0.0);
        assert_eq!(deadzone(-0.009), 0.0);
        assert_eq!(deadzone(0.5), 0.5);
        assert_eq!(deadzone(-1.0), -1.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.00001, 0.0001));
        assert!(!approx_equal(1.0, 1.1, 0.01));
    }
}
