use super::surface::{PartId, Settled, Surface};
use crate::model::VisualMode;

impl Surface {
    /// Move the rendered parts to `to`. The stored mode always becomes `to`;
    /// parts that already match are left alone, so repeating a transition
    /// does not animate again.
    pub fn transition(&mut self, to: VisualMode, animated: bool) {
        let from = self.mode;
        self.mode = to;
        if from != to {
            tracing::debug!(?from, ?to, animated, "tracking control transition");
        }

        match to {
            VisualMode::AcquiringFix => {
                self.hide(
                    PartId::TrackingOff,
                    animated,
                    Some(Box::new(reveal_spinner)),
                );
                self.hide(PartId::TrackingOn, animated, Some(Box::new(reveal_spinner)));
            }
            VisualMode::TrackingOn => {
                self.spinner.stop_animating();
                self.hide(
                    PartId::TrackingOff,
                    animated,
                    Some(Box::new(move |surface: &mut Surface, settled: Settled| {
                        if settled == Settled::Finished && surface.mode == VisualMode::TrackingOn {
                            surface.show(PartId::TrackingOn, animated, None);
                        }
                    })),
                );
            }
            VisualMode::TrackingOff => {
                self.spinner.stop_animating();
                self.hide(
                    PartId::TrackingOn,
                    animated,
                    Some(Box::new(move |surface: &mut Surface, settled: Settled| {
                        if settled == Settled::Finished && surface.mode == VisualMode::TrackingOff {
                            surface.show(PartId::TrackingOff, animated, None);
                        }
                    })),
                );
            }
            VisualMode::Initial => {}
        }
    }

    /// Parts currently taking up space on screen.
    pub fn visible_parts(&self) -> Vec<&'static str> {
        let mut visible = Vec::new();
        if !self.part(PartId::TrackingOn).is_hidden() {
            visible.push("tracking_on");
        }
        if !self.part(PartId::TrackingOff).is_hidden() {
            visible.push("tracking_off");
        }
        if !self.spinner().is_hidden() {
            visible.push("spinner");
        }
        visible
    }
}

/// Spinner comes up once both icons are out of the way.
fn reveal_spinner(surface: &mut Surface, settled: Settled) {
    if settled != Settled::Finished || surface.mode != VisualMode::AcquiringFix {
        return;
    }
    if surface.part(PartId::TrackingOn).is_hidden() && surface.part(PartId::TrackingOff).is_hidden()
    {
        surface.spinner.start_animating();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::time::Instant;
    use std::time::Duration;

    const FADE: Duration = Duration::from_millis(200);

    fn settled_surface(mode: VisualMode) -> Surface {
        let mut surface = Surface::new(FADE);
        surface.transition(mode, false);
        surface
    }

    /// Drive the surface with 10 ms frames until nothing is fading,
    /// checking that two parts are never up at once.
    fn run_frames(surface: &mut Surface, start: Instant) -> Instant {
        let mut now = start;
        for _ in 0..200 {
            surface.advance(now);
            assert!(surface.visible_parts().len() <= 1, "{:?}", surface.visible_parts());
            let fading = surface.part(PartId::TrackingOn).is_fading()
                || surface.part(PartId::TrackingOff).is_fading();
            if !fading {
                break;
            }
            now += Duration::from_millis(10);
        }
        now
    }

    #[test]
    fn each_mode_shows_one_part() {
        assert_eq!(
            settled_surface(VisualMode::TrackingOff).visible_parts(),
            ["tracking_off"]
        );
        assert_eq!(
            settled_surface(VisualMode::TrackingOn).visible_parts(),
            ["tracking_on"]
        );
        let acquiring = settled_surface(VisualMode::AcquiringFix);
        assert_eq!(acquiring.visible_parts(), ["spinner"]);
        assert!(acquiring.spinner().is_animating());
    }

    #[test]
    fn initial_is_a_no_op() {
        let mut surface = settled_surface(VisualMode::TrackingOn);
        surface.transition(VisualMode::Initial, true);
        assert_eq!(surface.mode(), VisualMode::Initial);
        assert_eq!(surface.visible_parts(), ["tracking_on"]);
    }

    #[test]
    fn repeated_transition_does_not_animate() {
        let mut surface = settled_surface(VisualMode::TrackingOn);
        surface.transition(VisualMode::TrackingOn, true);
        assert!(!surface.is_animating());
        assert_eq!(surface.visible_parts(), ["tracking_on"]);
    }

    #[test]
    fn spinner_waits_for_icons_to_fade_out() {
        let mut surface = settled_surface(VisualMode::TrackingOff);
        surface.transition(VisualMode::AcquiringFix, true);
        assert_eq!(surface.mode(), VisualMode::AcquiringFix);
        assert!(!surface.spinner().is_animating());

        let t0 = Instant::now();
        surface.advance(t0);
        surface.advance(t0 + Duration::from_millis(100));
        assert_eq!(surface.visible_parts(), ["tracking_off"]);

        surface.advance(t0 + FADE);
        assert_eq!(surface.visible_parts(), ["spinner"]);
        assert!(surface.spinner().is_animating());
    }

    #[test]
    fn icons_cross_without_overlap() {
        let mut surface = settled_surface(VisualMode::TrackingOff);
        let mut now = Instant::now();
        for mode in [
            VisualMode::TrackingOn,
            VisualMode::TrackingOff,
            VisualMode::AcquiringFix,
            VisualMode::TrackingOn,
            VisualMode::AcquiringFix,
            VisualMode::TrackingOff,
        ] {
            surface.transition(mode, true);
            now = run_frames(&mut surface, now);
            assert_eq!(surface.visible_parts().len(), 1, "after {mode:?}");
        }
        assert_eq!(surface.visible_parts(), ["tracking_off"]);
    }

    #[test]
    fn interrupted_fix_search_does_not_leave_spinner() {
        let mut surface = settled_surface(VisualMode::TrackingOn);
        surface.transition(VisualMode::AcquiringFix, true);
        let t0 = Instant::now();
        surface.advance(t0);
        surface.advance(t0 + Duration::from_millis(50));

        surface.transition(VisualMode::TrackingOn, true);
        run_frames(&mut surface, t0 + Duration::from_millis(60));
        assert_eq!(surface.visible_parts(), ["tracking_on"]);
        assert!(!surface.spinner().is_animating());
    }

    #[test]
    fn fix_lost_during_icon_swap_reveals_spinner() {
        for (from, to) in [
            (VisualMode::TrackingOff, VisualMode::TrackingOn),
            (VisualMode::TrackingOn, VisualMode::TrackingOff),
        ] {
            let mut surface = settled_surface(from);
            surface.transition(to, true);
            let t0 = Instant::now();
            surface.advance(t0);
            surface.advance(t0 + Duration::from_millis(50));

            surface.transition(VisualMode::AcquiringFix, true);
            run_frames(&mut surface, t0 + Duration::from_millis(60));
            assert_eq!(surface.visible_parts(), ["spinner"], "{from:?} -> {to:?}");
            assert!(surface.spinner().is_animating());
        }
    }
}
