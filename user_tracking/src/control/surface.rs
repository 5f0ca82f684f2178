//! Sub-element visibility for the tracking control.
//!
//! Icons fade in and out over a fixed duration. A fade is advanced by frame
//! ticks, and once it settles its completion runs with mutable access to the
//! whole [`Surface`] so that follow-up steps (revealing the spinner, showing
//! the next icon) can be chained without timers.

use crate::model::VisualMode;
use std::f32::consts::TAU;
use iced::time::Instant;
use std::time::Duration;

/// How a pending fade ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The element reached the requested visibility.
    Finished,
    /// A newer request re-targeted the element before it got there.
    Superseded,
}

pub type Completion = Box<dyn FnOnce(&mut Surface, Settled)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartId {
    TrackingOn,
    TrackingOff,
}

struct Fade {
    from: f32,
    to: f32,
    started: Option<Instant>,
    on_complete: Option<Completion>,
}

impl Fade {
    /// Run `next` after whatever already waits on this fade, with the same
    /// outcome.
    fn then(&mut self, next: Completion) {
        let chained: Completion = match self.on_complete.take() {
            Some(first) => Box::new(move |surface: &mut Surface, settled: Settled| {
                first(surface, settled);
                next(surface, settled);
            }),
            None => next,
        };
        self.on_complete = Some(chained);
    }
}

/// One fading icon.
pub struct Part {
    hidden: bool,
    opacity: f32,
    fade: Option<Fade>,
}

impl Part {
    fn hidden() -> Self {
        Self {
            hidden: true,
            opacity: 0.0,
            fade: None,
        }
    }

    /// Hidden parts take no part in layout or input.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Visibility the part has, or is fading towards.
    pub fn target_visible(&self) -> bool {
        match &self.fade {
            Some(fade) => fade.to > 0.0,
            None => !self.hidden,
        }
    }

    fn advance(&mut self, now: Instant, duration: Duration) -> Option<Option<Completion>> {
        let fade = self.fade.as_mut()?;
        let started = *fade.started.get_or_insert(now);
        let t = if duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(started).as_secs_f32() / duration.as_secs_f32())
                .clamp(0.0, 1.0)
        };

        self.opacity = fade.from + (fade.to - fade.from) * ease_in_out(t);
        if t < 1.0 {
            return None;
        }

        let fade = self.fade.take()?;
        self.opacity = fade.to;
        self.hidden = fade.to == 0.0;
        Some(fade.on_complete)
    }
}

fn ease_in_out(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Busy indicator. Hidden whenever it is stopped.
#[derive(Debug, Default)]
pub struct Spinner {
    animating: bool,
    /// Rotation in radians, 0..TAU
    phase: f32,
    last_tick: Option<Instant>,
}

/// Full turns per second
const SPINNER_SPEED: f32 = 1.0;

impl Spinner {
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn is_hidden(&self) -> bool {
        !self.animating
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn start_animating(&mut self) {
        if !self.animating {
            self.animating = true;
            self.last_tick = None;
        }
    }

    pub fn stop_animating(&mut self) {
        self.animating = false;
        self.last_tick = None;
    }

    fn advance(&mut self, now: Instant) {
        if !self.animating {
            return;
        }
        if let Some(last) = self.last_tick {
            let elapsed = now.saturating_duration_since(last).as_secs_f32();
            self.phase = (self.phase + elapsed * SPINNER_SPEED * TAU) % TAU;
        }
        self.last_tick = Some(now);
    }
}

/// Everything the control renders, plus its current visual mode.
pub struct Surface {
    pub(super) mode: VisualMode,
    tracking_on: Part,
    tracking_off: Part,
    pub(super) spinner: Spinner,
    fade_duration: Duration,
}

impl Surface {
    pub fn new(fade_duration: Duration) -> Self {
        Self {
            mode: VisualMode::Initial,
            tracking_on: Part::hidden(),
            tracking_off: Part::hidden(),
            spinner: Spinner::default(),
            fade_duration,
        }
    }

    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    pub fn part(&self, id: PartId) -> &Part {
        match id {
            PartId::TrackingOn => &self.tracking_on,
            PartId::TrackingOff => &self.tracking_off,
        }
    }

    fn part_mut(&mut self, id: PartId) -> &mut Part {
        match id {
            PartId::TrackingOn => &mut self.tracking_on,
            PartId::TrackingOff => &mut self.tracking_off,
        }
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    /// True while a frame tick would change what is drawn.
    pub fn is_animating(&self) -> bool {
        self.tracking_on.is_fading() || self.tracking_off.is_fading() || self.spinner.animating
    }

    pub fn set_visible(
        &mut self,
        id: PartId,
        visible: bool,
        animated: bool,
        on_complete: Option<Completion>,
    ) {
        let part = self.part_mut(id);
        if part.target_visible() == visible {
            let Some(done) = on_complete else {
                return;
            };
            // Already heading there: settle together with the running fade.
            if let Some(fade) = part.fade.as_mut() {
                fade.then(done);
            } else {
                done(self, Settled::Finished);
            }
            return;
        }

        let superseded = part.fade.take().and_then(|fade| fade.on_complete);

        // Never un-hide at a stale opacity.
        if visible && part.hidden {
            part.opacity = 0.0;
            part.hidden = false;
        }

        let target = if visible { 1.0 } else { 0.0 };
        let finished = if animated {
            part.fade = Some(Fade {
                from: part.opacity,
                to: target,
                started: None,
                on_complete,
            });
            None
        } else {
            part.opacity = target;
            part.hidden = !visible;
            on_complete
        };

        if let Some(done) = superseded {
            done(self, Settled::Superseded);
        }
        if let Some(done) = finished {
            done(self, Settled::Finished);
        }
    }

    pub fn show(&mut self, id: PartId, animated: bool, on_complete: Option<Completion>) {
        self.set_visible(id, true, animated, on_complete);
    }

    pub fn hide(&mut self, id: PartId, animated: bool, on_complete: Option<Completion>) {
        self.set_visible(id, false, animated, on_complete);
    }

    /// Step fades and the spinner to `now`, then run completions of fades
    /// that settled.
    pub fn advance(&mut self, now: Instant) {
        let duration = self.fade_duration;
        let mut settled = Vec::new();
        for id in [PartId::TrackingOn, PartId::TrackingOff] {
            if let Some(done) = self.part_mut(id).advance(now, duration) {
                tracing::trace!(?id, "fade settled");
                settled.extend(done);
            }
        }
        for done in settled {
            done(self, Settled::Finished);
        }
        self.spinner.advance(now);
    }
}
