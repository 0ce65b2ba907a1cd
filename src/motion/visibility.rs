use crate::error::{ConfigurationError, Result};

/// Fraction of a section `[top, top + height)` that sits inside the viewport
/// when the page is scrolled to `scroll`.
pub fn intersection_ratio(top: f32, height: f32, scroll: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible_top = top.max(scroll);
    let visible_bottom = (top + height).min(scroll + viewport_height);
    ((visible_bottom - visible_top).max(0.0) / height).min(1.0)
}

/// Turns a stream of intersection ratios into "entered view" edges.
///
/// `amount` is the fraction of the section that has to be visible. A gate
/// built with `once` latches on the first entry and ignores everything after.
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    amount: f32,
    once: bool,
    visible: bool,
}

impl VisibilityGate {
    pub fn new(amount: f32, once: bool) -> Result<Self> {
        if !(amount > 0.0 && amount <= 1.0) {
            return Err(ConfigurationError::InvalidAmount(amount));
        }
        Ok(Self {
            amount,
            once,
            visible: false,
        })
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds the latest ratio. Returns `true` only on the transition into view.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.once && self.visible {
            return false;
        }
        let now_visible = ratio >= self.amount;
        let entered = now_visible && !self.visible;
        self.visible = now_visible;
        entered
    }
}
