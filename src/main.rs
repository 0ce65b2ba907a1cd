use anyhow::Result;
use calloop::timer::{TimeoutAction, Timer};
use calloop::{EventLoop, LoopSignal};
use landing_motion::app::{App, UiEvent};
use landing_motion::config::Config;
use log::{info, warn};
use std::time::{Duration, Instant};

/// Replays a visitor scrolling from the top of the page to the bottom.
struct Preview {
    app: App,
    signal: LoopSignal,
    interval: Duration,
    last_frame: Instant,
    offset: f32,
}

impl Preview {
    fn frame(&mut self) -> TimeoutAction {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        let preview = &self.app.config.preview;
        let waiting = self.app.time < preview.start_delay;
        let max_scroll = self.app.max_scroll();
        let scrolling = waiting || (preview.scroll_speed > 0.0 && self.offset < max_scroll);

        if !waiting && scrolling {
            self.offset = (self.offset + preview.scroll_speed * dt as f32).min(max_scroll);
            self.app.handle_event(UiEvent::Scroll {
                offset: self.offset,
            });
        }

        let pending = self.app.update(dt);
        self.app.log_frame();

        if scrolling || pending {
            TimeoutAction::ToDuration(self.interval)
        } else {
            info!("Preview finished at t={:.2}s", self.app.time);
            self.signal.stop();
            TimeoutAction::Drop
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    println!("Starting landing-motion preview...");

    let config = Config::load_or_init().unwrap_or_else(|err| {
        warn!("Falling back to default config: {:#}", err);
        Config::default()
    });
    let mut app = App::new(config)?;

    // Page load: whatever is above the fold is seen immediately.
    app.handle_event(UiEvent::Scroll { offset: 0.0 });

    let mut event_loop: EventLoop<Preview> = EventLoop::try_new()?;
    let interval = app.frame_interval();
    info!(
        "Scrolling {:.0}px of page at {:.0}px/s, frame every {:?}",
        app.max_scroll(),
        app.config.preview.scroll_speed,
        interval
    );

    let mut preview = Preview {
        app,
        signal: event_loop.get_signal(),
        interval,
        last_frame: Instant::now(),
        offset: 0.0,
    };

    event_loop
        .handle()
        .insert_source(Timer::immediate(), |_deadline, _, preview: &mut Preview| {
            preview.frame()
        })
        .map_err(|e| anyhow::anyhow!("Failed to insert frame timer: {}", e.error))?;

    event_loop.run(None, &mut preview, |_| {})?;

    for section in preview.app.sections() {
        println!("{}", section.describe());
    }

    Ok(())
}
