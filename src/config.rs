use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::motion::scroll::Breakpoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_fps_cap")]
    pub fps_cap: u32,

    #[serde(default = "default_animations_enabled")]
    pub animations_enabled: bool,

    #[serde(default = "default_viewport")]
    pub viewport: Size,

    #[serde(default)]
    pub preview: Preview,

    #[serde(default = "default_layout")]
    pub layout: Vec<SectionLayout>,

    #[serde(default = "default_stats")]
    pub stats: Vec<StatConfig>,

    #[serde(default)]
    pub hero_motion: ParallaxConfig,

    #[serde(default)]
    pub header_motion: BackdropConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Header,
    Hero,
    About,
    Services,
    Process,
    Testimonial,
    Contact,
    Footer,
}

impl SectionKind {
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Header => "header",
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Services => "services",
            SectionKind::Process => "process",
            SectionKind::Testimonial => "testimonial",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Where a section sits on the page and how much of it must show before it
/// counts as seen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionLayout {
    pub kind: SectionKind,
    pub top: f32,
    pub height: f32,
    #[serde(default = "default_amount")]
    pub amount: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats_row: Option<StatsRow>,
}

/// The strip inside a section that holds its counters. Counters start when
/// this strip is seen, which can be well after the section itself appears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsRow {
    pub top: f32,
    pub height: f32,
    #[serde(default = "default_stats_amount")]
    pub amount: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatConfig {
    pub section: SectionKind,
    pub label: String,
    pub target: u32,
    #[serde(default = "default_stat_duration")]
    pub duration: f64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallaxConfig {
    pub translate_y: Vec<Breakpoint>,
    pub opacity: Vec<Breakpoint>,
    pub scale: Vec<Breakpoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackdropConfig {
    pub background_alpha: Vec<Breakpoint>,
    pub shadow_blur: Vec<Breakpoint>,
    pub shadow_alpha: Vec<Breakpoint>,
}

/// Scripted scroll used by the preview runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preview {
    /// Pixels per second.
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: f32,
    /// Seconds to wait before scrolling starts.
    #[serde(default)]
    pub start_delay: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps_cap: default_fps_cap(),
            animations_enabled: default_animations_enabled(),
            viewport: default_viewport(),
            preview: Preview::default(),
            layout: default_layout(),
            stats: default_stats(),
            hero_motion: ParallaxConfig::default(),
            header_motion: BackdropConfig::default(),
        }
    }
}

impl Default for Preview {
    fn default() -> Self {
        Self {
            scroll_speed: default_scroll_speed(),
            start_delay: 0.0,
        }
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            translate_y: vec![Breakpoint::new(250.0, 0.0), Breakpoint::new(750.0, 150.0)],
            opacity: vec![Breakpoint::new(250.0, 1.0), Breakpoint::new(550.0, 0.0)],
            scale: vec![Breakpoint::new(250.0, 1.0), Breakpoint::new(550.0, 0.95)],
        }
    }
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            background_alpha: vec![Breakpoint::new(0.0, 0.95), Breakpoint::new(100.0, 1.0)],
            shadow_blur: vec![Breakpoint::new(0.0, 2.0), Breakpoint::new(100.0, 20.0)],
            shadow_alpha: vec![Breakpoint::new(0.0, 0.05), Breakpoint::new(100.0, 0.2)],
        }
    }
}

fn default_fps_cap() -> u32 {
    60
}

fn default_animations_enabled() -> bool {
    true
}

fn default_viewport() -> Size {
    Size {
        width: 1280.0,
        height: 800.0,
    }
}

fn default_amount() -> f32 {
    0.2
}

fn default_stats_amount() -> f32 {
    0.5
}

fn default_stat_duration() -> f64 {
    2.0
}

fn default_scroll_speed() -> f32 {
    900.0
}

fn default_layout() -> Vec<SectionLayout> {
    let slot = |kind, top, height, amount| SectionLayout {
        kind,
        top,
        height,
        amount,
        stats_row: None,
    };
    let with_row = |layout: SectionLayout, top, height, amount| SectionLayout {
        stats_row: Some(StatsRow {
            top,
            height,
            amount,
        }),
        ..layout
    };
    vec![
        slot(SectionKind::Header, 0.0, 80.0, 1.0),
        slot(SectionKind::Hero, 0.0, 900.0, 0.3),
        with_row(slot(SectionKind::About, 900.0, 1000.0, 0.2), 1550.0, 250.0, 0.5),
        slot(SectionKind::Services, 1900.0, 1100.0, 0.2),
        slot(SectionKind::Process, 3000.0, 900.0, 0.2),
        with_row(slot(SectionKind::Testimonial, 3900.0, 700.0, 0.2), 4400.0, 160.0, 0.8),
        slot(SectionKind::Contact, 4600.0, 900.0, 0.2),
        slot(SectionKind::Footer, 5500.0, 400.0, 0.3),
    ]
}

fn default_stats() -> Vec<StatConfig> {
    let stat = |section, label: &str, target, duration, suffix: &str| StatConfig {
        section,
        label: label.to_string(),
        target,
        duration,
        suffix: suffix.to_string(),
    };
    vec![
        stat(SectionKind::Hero, "Cost reduction", 40, 2.0, "%"),
        stat(SectionKind::Hero, "Full integration", 100, 2.3, "%"),
        stat(SectionKind::About, "Faster delivery", 40, 2.0, "%"),
        stat(SectionKind::About, "Client commitment", 100, 2.3, "%"),
        stat(SectionKind::Testimonial, "Successful projects", 50, 2.0, "+"),
        stat(SectionKind::Testimonial, "Satisfied clients", 98, 2.3, "%"),
    ]
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("landing-motion").join("config.toml"))
    }

    /// Loads the user config, writing the defaults there on first run.
    pub fn load_or_init() -> Result<Self> {
        Self::load_or_init_at(&Self::path()?)
    }

    pub fn load_or_init_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }
        let config = Config::default();
        config.save_to(path)?;
        info!("Wrote default config to {}", path.display());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Bottom edge of the lowest section.
    pub fn page_height(&self) -> f32 {
        self.layout
            .iter()
            .map(|slot| slot.top + slot.height)
            .fold(0.0, f32::max)
    }
}
