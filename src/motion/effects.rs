//! Style bundles driven by one scroll offset. Each property has its own
//! interpolator; they only share the offset they are evaluated at.

use super::scroll::ScrollInterpolator;
use crate::config::{BackdropConfig, ParallaxConfig};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStyle {
    pub opacity: f32,
    pub scale: f32,
    pub translate_y: f32,
}

impl Default for ScrollStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate_y: 0.0,
        }
    }
}

/// Hero content drifting down, shrinking and fading as the page scrolls.
#[derive(Debug, Clone)]
pub struct Parallax {
    translate_y: ScrollInterpolator,
    opacity: ScrollInterpolator,
    scale: ScrollInterpolator,
}

impl Parallax {
    pub fn new(config: &ParallaxConfig) -> Result<Self> {
        Ok(Self {
            translate_y: ScrollInterpolator::new(config.translate_y.clone())?,
            opacity: ScrollInterpolator::new(config.opacity.clone())?,
            scale: ScrollInterpolator::new(config.scale.clone())?,
        })
    }

    pub fn style_at(&self, offset: f32) -> ScrollStyle {
        ScrollStyle {
            opacity: self.opacity.value_at(offset),
            scale: self.scale.value_at(offset),
            translate_y: self.translate_y.value_at(offset),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropStyle {
    pub background_alpha: f32,
    pub shadow_blur: f32,
    pub shadow_alpha: f32,
}

/// Fixed header that turns opaque and gains a shadow once the page moves.
#[derive(Debug, Clone)]
pub struct Backdrop {
    background_alpha: ScrollInterpolator,
    shadow_blur: ScrollInterpolator,
    shadow_alpha: ScrollInterpolator,
}

impl Backdrop {
    pub fn new(config: &BackdropConfig) -> Result<Self> {
        Ok(Self {
            background_alpha: ScrollInterpolator::new(config.background_alpha.clone())?,
            shadow_blur: ScrollInterpolator::new(config.shadow_blur.clone())?,
            shadow_alpha: ScrollInterpolator::new(config.shadow_alpha.clone())?,
        })
    }

    pub fn style_at(&self, offset: f32) -> BackdropStyle {
        BackdropStyle {
            background_alpha: self.background_alpha.value_at(offset),
            shadow_blur: self.shadow_blur.value_at(offset),
            shadow_alpha: self.shadow_alpha.value_at(offset),
        }
    }
}
