//! Default value functions for serde.

/// Default false value for serde
pub fn default_false() -> bool {
    false
}

/// Neutral contrast factor (1.0 = unchanged)
pub fn default_contrast() -> f32 {
    1.0
}

/// Neutral output scale (100%)
pub fn default_scale() -> u32 {
    100
}
