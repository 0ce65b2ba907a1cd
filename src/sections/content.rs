use log::{debug, info};

use super::{ScrollView, Section, Stat};
use crate::config::{SectionKind, SectionLayout, StatsRow};
use crate::error::Result;
use crate::motion::anim::{lerp, Timeline};
use crate::motion::visibility::{intersection_ratio, VisibilityGate};

const REVEAL_DURATION: f64 = 0.6;
const REVEAL_RISE: f32 = 30.0;

/// Gate for the stat strip of a section that has one.
struct StatsGate {
    row: StatsRow,
    gate: VisibilityGate,
}

/// A page section that fades in the first time it scrolls into view.
///
/// Its counters start with the reveal, unless the layout gives them their own
/// stats row; then they wait until that row is seen.
pub struct ContentSection {
    kind: SectionKind,
    top: f32,
    height: f32,
    gate: VisibilityGate,
    stats_gate: Option<StatsGate>,
    reveal: Timeline,
    revealed: bool,
    stats: Vec<Stat>,
    animations_enabled: bool,
}

impl ContentSection {
    pub fn new(layout: &SectionLayout, stats: Vec<Stat>, animations_enabled: bool) -> Result<Self> {
        let stats_gate = match layout.stats_row {
            Some(row) => Some(StatsGate {
                row,
                gate: VisibilityGate::new(row.amount, true)?,
            }),
            None => None,
        };
        Ok(Self {
            kind: layout.kind,
            top: layout.top,
            height: layout.height,
            gate: VisibilityGate::new(layout.amount, true)?,
            stats_gate,
            reveal: Timeline::new(REVEAL_DURATION),
            revealed: false,
            stats,
            animations_enabled,
        })
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Opacity of the section body; 0 until the section has been seen.
    pub fn reveal_opacity(&self) -> f32 {
        if self.revealed {
            self.reveal.eased_progress() as f32
        } else {
            0.0
        }
    }

    /// Vertical offset of the section body while it rises into place.
    pub fn reveal_offset(&self) -> f32 {
        lerp(REVEAL_RISE, 0.0, self.reveal_opacity())
    }

    fn reveal_body(&mut self, now: f64) {
        info!("Section {} in view", self.kind.name());
        self.revealed = true;
        self.reveal.start(now);
        if !self.animations_enabled {
            self.reveal.update(now + REVEAL_DURATION);
        }
    }

    fn start_stats(&mut self) {
        if !self.stats.is_empty() {
            info!("Stats of {} in view", self.kind.name());
        }
        for stat in &mut self.stats {
            if self.animations_enabled {
                stat.counter.activate();
            } else {
                stat.counter.complete();
            }
        }
    }
}

impl Section for ContentSection {
    fn kind(&self) -> SectionKind {
        self.kind
    }

    fn on_scroll(&mut self, view: ScrollView, now: f64) -> bool {
        let ratio = intersection_ratio(self.top, self.height, view.offset, view.viewport_height);
        let entered = self.gate.observe(ratio);
        if entered {
            self.reveal_body(now);
        }

        let stats_entered = match &mut self.stats_gate {
            Some(stats) => {
                let row = stats.row;
                stats
                    .gate
                    .observe(intersection_ratio(row.top, row.height, view.offset, view.viewport_height))
            }
            None => entered,
        };
        if stats_entered {
            self.start_stats();
        }

        (entered || stats_entered) && self.animations_enabled
    }

    fn update(&mut self, now: f64) -> bool {
        let mut pending = false;
        if self.revealed && !self.reveal.is_complete() {
            self.reveal.update(now);
            pending |= !self.reveal.is_complete();
        }
        for stat in &mut self.stats {
            let before = stat.counter.value();
            pending |= stat.counter.tick(now);
            if stat.counter.is_done() && before != stat.counter.value() {
                debug!("{} / {} settled at {}", self.kind.name(), stat.label, stat.counter.display());
            }
        }
        pending
    }

    fn stats(&self) -> &[Stat] {
        &self.stats
    }

    fn describe(&self) -> String {
        let mut out = format!("{} opacity={:.2}", self.kind.name(), self.reveal_opacity());
        for stat in &self.stats {
            out.push_str(&format!(" [{}: {}]", stat.label, stat.counter.display()));
        }
        out
    }
}
