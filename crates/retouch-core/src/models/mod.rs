//! Adjustment settings for the preview pipeline.

mod defaults;

use serde::{Deserialize, Serialize};

// Re-export default functions for use in serde attributes
pub(crate) use defaults::{default_contrast, default_false, default_scale};

/// Slider values for the non-destructive adjustments.
///
/// All five values only ever affect the rendered preview; they are never
/// written into the base image or the edit history. The shell owning the
/// sliders is responsible for clamping each value to its domain before
/// handing the settings to the processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSettings {
    /// Additive brightness offset per channel (-100 to 100)
    #[serde(default)]
    pub brightness: i32,

    /// Gaussian blur strength; kernel size is `2 * blur + 1` (0 to 20)
    #[serde(default)]
    pub blur: u32,

    /// Multiplicative contrast factor (0.5 to 3.0, 1.0 = no change)
    #[serde(default = "default_contrast")]
    pub contrast: f32,

    /// Output size as a percentage of the base image (10 to 200)
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Render the preview as grayscale
    #[serde(default = "default_false")]
    pub grayscale: bool,
}

impl FilterSettings {
    /// Restore every adjustment to its neutral default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when every adjustment is at its neutral default, in which case
    /// rendering the preview reproduces the base image exactly.
    pub fn is_neutral(&self) -> bool {
        self == &Self::default()
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            brightness: 0,
            blur: 0,
            contrast: default_contrast(),
            scale: default_scale(),
            grayscale: default_false(),
        }
    }
}
