use super::{ContentSection, ScrollView, Section, Stat};
use crate::config::{ParallaxConfig, SectionKind};
use crate::error::Result;
use crate::motion::effects::{Parallax, ScrollStyle};

/// Landing hero: a content section whose body also follows the scroll
/// parallax.
pub struct Hero {
    content: ContentSection,
    parallax: Parallax,
    style: ScrollStyle,
}

impl Hero {
    pub fn new(content: ContentSection, config: &ParallaxConfig) -> Result<Self> {
        let parallax = Parallax::new(config)?;
        let style = parallax.style_at(0.0);
        Ok(Self {
            content,
            parallax,
            style,
        })
    }

    pub fn style(&self) -> ScrollStyle {
        self.style
    }

    pub fn content(&self) -> &ContentSection {
        &self.content
    }
}

impl Section for Hero {
    fn kind(&self) -> SectionKind {
        SectionKind::Hero
    }

    fn on_scroll(&mut self, view: ScrollView, now: f64) -> bool {
        self.style = self.parallax.style_at(view.offset);
        self.content.on_scroll(view, now)
    }

    fn update(&mut self, now: f64) -> bool {
        self.content.update(now)
    }

    fn stats(&self) -> &[Stat] {
        self.content.stats()
    }

    fn describe(&self) -> String {
        format!(
            "{} y={:.1} scale={:.3} fade={:.2}",
            self.content.describe(),
            self.style.translate_y,
            self.style.scale,
            self.style.opacity
        )
    }
}
