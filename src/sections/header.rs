use super::{ScrollView, Section};
use crate::config::{BackdropConfig, SectionKind};
use crate::error::Result;
use crate::motion::effects::{Backdrop, BackdropStyle};

/// The fixed top bar. It is always on screen, so it has no reveal; only its
/// backdrop follows the scroll offset.
pub struct Header {
    backdrop: Backdrop,
    style: BackdropStyle,
}

impl Header {
    pub fn new(config: &BackdropConfig) -> Result<Self> {
        let backdrop = Backdrop::new(config)?;
        let style = backdrop.style_at(0.0);
        Ok(Self { backdrop, style })
    }

    pub fn style(&self) -> BackdropStyle {
        self.style
    }
}

impl Section for Header {
    fn kind(&self) -> SectionKind {
        SectionKind::Header
    }

    fn on_scroll(&mut self, view: ScrollView, _now: f64) -> bool {
        self.style = self.backdrop.style_at(view.offset);
        false
    }

    fn update(&mut self, _now: f64) -> bool {
        false
    }

    fn describe(&self) -> String {
        format!(
            "header bg={:.2} shadow={:.1}px@{:.2}",
            self.style.background_alpha, self.style.shadow_blur, self.style.shadow_alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_tracks_scroll() {
        let mut header = Header::new(&BackdropConfig::default()).unwrap();
        assert_eq!(header.style().background_alpha, 0.95);

        let view = ScrollView {
            offset: 50.0,
            viewport_height: 800.0,
        };
        assert!(!header.on_scroll(view, 0.0));
        assert_eq!(header.style().shadow_blur, 11.0);
        assert!(header.describe().starts_with("header bg="));
        assert!(header.describe().contains("shadow=11.0px"));
    }
}
