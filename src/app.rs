use crate::config::{Config, SectionKind};
use crate::error::Result;
use crate::sections::{build_sections, ScrollView, Section};
use log::{debug, info};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum UiEvent {
    Scroll { offset: f32 },
    Resize { width: f32, height: f32 },
    Unmount(SectionKind),
}

pub struct App {
    pub config: Config,
    pub time: f64,
    pub view: ScrollView,
    pub viewport_width: f32,
    sections: Vec<Box<dyn Section>>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let sections = build_sections(&config)?;
        let view = ScrollView {
            offset: 0.0,
            viewport_height: config.viewport.height,
        };
        info!("Built {} sections", sections.len());
        Ok(Self {
            viewport_width: config.viewport.width,
            config,
            time: 0.0,
            view,
            sections,
        })
    }

    pub fn frame_interval(&self) -> Duration {
        if self.config.fps_cap == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_nanos(1_000_000_000 / self.config.fps_cap as u64)
        }
    }

    pub fn page_height(&self) -> f32 {
        self.config.page_height()
    }

    /// Furthest offset the page can be scrolled to.
    pub fn max_scroll(&self) -> f32 {
        (self.page_height() - self.view.viewport_height).max(0.0)
    }

    pub fn sections(&self) -> &[Box<dyn Section>] {
        &self.sections
    }

    pub fn section(&self, kind: SectionKind) -> Option<&dyn Section> {
        self.sections
            .iter()
            .find(|section| section.kind() == kind)
            .map(|section| section.as_ref())
    }

    /// Routes an event to the sections. Returns `true` if an animation was
    /// started and frames are now needed.
    pub fn handle_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Scroll { offset } => {
                self.view.offset = offset.clamp(0.0, self.max_scroll());
                self.notify_scroll()
            }
            UiEvent::Resize { width, height } => {
                info!("Viewport resized to {}x{}", width, height);
                self.viewport_width = width;
                self.view.viewport_height = height;
                self.view.offset = self.view.offset.min(self.max_scroll());
                self.notify_scroll()
            }
            UiEvent::Unmount(kind) => {
                let before = self.sections.len();
                self.sections.retain(|section| section.kind() != kind);
                if self.sections.len() != before {
                    info!("Unmounted section {}", kind.name());
                }
                false
            }
        }
    }

    fn notify_scroll(&mut self) -> bool {
        let (view, now) = (self.view, self.time);
        let mut started = false;
        for section in &mut self.sections {
            started |= section.on_scroll(view, now);
        }
        started
    }

    /// Advances the clock by `dt` seconds and ticks every section. Returns
    /// `true` while any section still wants frames.
    pub fn update(&mut self, dt: f64) -> bool {
        self.time += dt;
        let now = self.time;
        let mut pending = false;
        for section in &mut self.sections {
            pending |= section.update(now);
        }
        pending
    }

    pub fn log_frame(&self) {
        for section in &self.sections {
            debug!("t={:.3} {}", self.time, section.describe());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn stat_values(app: &App, kind: SectionKind) -> Vec<u32> {
        app.section(kind)
            .unwrap()
            .stats()
            .iter()
            .map(|stat| stat.counter.value())
            .collect()
    }

    fn run_until_idle(app: &mut App) -> usize {
        let mut frames = 0;
        while app.update(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "animation never settled");
        }
        frames
    }

    #[test]
    fn test_frame_interval() {
        let mut config = Config::default();
        config.fps_cap = 50;
        let app = App::new(config).unwrap();
        assert_eq!(app.frame_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_hero_counts_up_on_load() {
        let mut app = App::new(Config::default()).unwrap();
        assert_eq!(stat_values(&app, SectionKind::Hero), vec![0, 0]);

        assert!(app.handle_event(UiEvent::Scroll { offset: 0.0 }));
        let frames = run_until_idle(&mut app);
        assert!(frames >= 130);
        assert_eq!(stat_values(&app, SectionKind::Hero), vec![40, 100]);
        // Further down the page nothing has started yet.
        assert_eq!(stat_values(&app, SectionKind::Testimonial), vec![0, 0]);
    }

    #[test]
    fn test_scrolling_reaches_testimonial() {
        let mut app = App::new(Config::default()).unwrap();
        app.handle_event(UiEvent::Scroll { offset: 3850.0 });
        run_until_idle(&mut app);

        let testimonial = app.section(SectionKind::Testimonial).unwrap();
        let shown: Vec<_> = testimonial
            .stats()
            .iter()
            .map(|stat| stat.counter.display())
            .collect();
        assert_eq!(shown, vec!["50+".to_string(), "98%".to_string()]);
    }

    #[test]
    fn test_scroll_is_clamped_to_page() {
        let mut app = App::new(Config::default()).unwrap();
        app.handle_event(UiEvent::Scroll { offset: -100.0 });
        assert_eq!(app.view.offset, 0.0);
        app.handle_event(UiEvent::Scroll { offset: 1e9 });
        assert_eq!(app.view.offset, app.max_scroll());
    }

    #[test]
    fn test_unmount_stops_pending_frames() {
        let mut app = App::new(Config::default()).unwrap();
        app.handle_event(UiEvent::Scroll { offset: 0.0 });
        assert!(app.update(FRAME));
        assert!(app.update(FRAME));

        app.handle_event(UiEvent::Unmount(SectionKind::Hero));
        assert!(app.section(SectionKind::Hero).is_none());
        // Hero's reveal and counters were the only running animations.
        assert!(!app.update(FRAME));
    }

    #[test]
    fn test_resize_can_reveal_sections() {
        let mut app = App::new(Config::default()).unwrap();
        app.handle_event(UiEvent::Scroll { offset: 0.0 });
        run_until_idle(&mut app);
        assert_eq!(stat_values(&app, SectionKind::About), vec![0, 0]);

        // A tall window shows the about section and its stats row without
        // scrolling.
        assert!(app.handle_event(UiEvent::Resize {
            width: 1280.0,
            height: 1800.0
        }));
        run_until_idle(&mut app);
        assert_eq!(stat_values(&app, SectionKind::About), vec![40, 100]);
    }

    #[test]
    fn test_section_reveals_before_stats_row() {
        let mut app = App::new(Config::default()).unwrap();
        // 300px of the about section is on screen; its stats row is not.
        app.handle_event(UiEvent::Scroll { offset: 400.0 });
        for _ in 0..60 {
            app.update(FRAME);
        }
        let about = app.section(SectionKind::About).unwrap();
        assert!(about.describe().starts_with("about opacity=1.00"));
        assert_eq!(stat_values(&app, SectionKind::About), vec![0, 0]);

        assert!(app.handle_event(UiEvent::Scroll { offset: 1000.0 }));
        run_until_idle(&mut app);
        assert_eq!(stat_values(&app, SectionKind::About), vec![40, 100]);
    }
}
