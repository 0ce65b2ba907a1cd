pub mod content;
pub mod header;
pub mod hero;

use crate::config::{Config, SectionKind, StatConfig};
use crate::error::Result;
use crate::motion::counter::Counter;

pub use content::ContentSection;
pub use header::Header;
pub use hero::Hero;

/// Scroll position of the page together with the viewport it is seen through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollView {
    pub offset: f32,
    pub viewport_height: f32,
}

/// A labelled counter shown in a section's stat row.
#[derive(Debug, Clone)]
pub struct Stat {
    pub label: String,
    pub counter: Counter,
}

impl Stat {
    pub fn from_config(config: &StatConfig) -> Result<Self> {
        Ok(Self {
            label: config.label.clone(),
            counter: Counter::new(config.target, config.duration)?.with_suffix(config.suffix.clone()),
        })
    }
}

pub trait Section {
    fn kind(&self) -> SectionKind;
    /// Reacts to a new scroll position. Returns `true` if this started
    /// something that needs frames.
    fn on_scroll(&mut self, view: ScrollView, now: f64) -> bool;
    /// Advances running animations. Returns `true` while frames are needed.
    fn update(&mut self, now: f64) -> bool;
    fn stats(&self) -> &[Stat] {
        &[]
    }
    fn describe(&self) -> String;
}

pub fn build_sections(config: &Config) -> Result<Vec<Box<dyn Section>>> {
    let mut sections: Vec<Box<dyn Section>> = Vec::with_capacity(config.layout.len());
    for slot in &config.layout {
        let stats = config
            .stats
            .iter()
            .filter(|stat| stat.section == slot.kind)
            .map(Stat::from_config)
            .collect::<Result<Vec<_>>>()?;

        let section: Box<dyn Section> = match slot.kind {
            SectionKind::Header => Box::new(Header::new(&config.header_motion)?),
            SectionKind::Hero => {
                let content = ContentSection::new(slot, stats, config.animations_enabled)?;
                Box::new(Hero::new(content, &config.hero_motion)?)
            }
            _ => Box::new(ContentSection::new(slot, stats, config.animations_enabled)?),
        };
        sections.push(section);
    }
    Ok(sections)
}
