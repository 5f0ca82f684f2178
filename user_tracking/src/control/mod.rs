//! Button that toggles the map's user tracking and shows whether the map is
//! following the user, still looking for a fix, or not tracking at all.

use crate::config::{Config, IconPaths};
use crate::gui::styles::button_style::tracking_button;
use crate::gui::widgets::busy_indicator::busy_indicator;
use crate::map::{observe, MapHandle, MapObserver, MapView};
use crate::model::{TrackingError, TrackingResult, VisualMode};
use iced::time::Instant;
use iced::widget::{container, svg, Stack};
use iced::{window, Color, Element, Length, Size, Subscription, Theme};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub mod surface;
mod transition;

pub use surface::{PartId, Settled, Surface};

const TRACKING_ON_ICON: &[u8] = include_bytes!("../../assets/tracking_location.svg");
const TRACKING_OFF_ICON: &[u8] = include_bytes!("../../assets/tracking_location_off.svg");

/// Padding around the icon inside the button
const BUTTON_PADDING: f32 = 6.0;

#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
    Tick(Instant),
    MapChanged,
}

/// Template icons, tinted with the control's tint when drawn.
#[derive(Debug, Clone)]
pub struct TrackingIcons {
    pub tracking_on: svg::Handle,
    pub tracking_off: svg::Handle,
}

impl Default for TrackingIcons {
    fn default() -> Self {
        Self {
            tracking_on: svg::Handle::from_memory(TRACKING_ON_ICON),
            tracking_off: svg::Handle::from_memory(TRACKING_OFF_ICON),
        }
    }
}

impl TrackingIcons {
    pub fn from_paths(paths: &IconPaths) -> TrackingResult<Self> {
        let read = |path: &std::path::Path| {
            std::fs::read(path)
                .map_err(|e| TrackingError::AssetError(format!("{}: {e}", path.display())))
        };
        Ok(Self {
            tracking_on: svg::Handle::from_memory(read(&paths.tracking_on)?),
            tracking_off: svg::Handle::from_memory(read(&paths.tracking_off)?),
        })
    }
}

pub struct TrackingControl {
    surface: Surface,
    map: Option<MapHandle>,
    accuracy_threshold_m: f64,
    icons: TrackingIcons,
    tint: Color,
    icon_size: f32,
    corner_radius: f32,
}

impl TrackingControl {
    pub fn new(config: &Config) -> Self {
        let mut control = Self {
            surface: Surface::new(config.fade_duration()),
            map: None,
            accuracy_threshold_m: config.accuracy_threshold_m,
            icons: TrackingIcons::default(),
            tint: config.tint_color(),
            icon_size: config.icon_size,
            corner_radius: config.corner_radius,
        };
        control.surface.transition(VisualMode::TrackingOff, false);
        control
    }

    pub fn with_map<M: MapView + 'static>(config: &Config, map: &Rc<RefCell<M>>) -> Self {
        let mut control = Self::new(config);
        control.attach_map(map);
        control
    }

    /// Keep a weak reference to `map`; the caller stays its owner.
    pub fn attach_map<M: MapView + 'static>(&mut self, map: &Rc<RefCell<M>>) {
        let shared: Rc<RefCell<dyn MapView>> = map.clone();
        let handle: MapHandle = Rc::downgrade(&shared);
        self.map = Some(handle);
    }

    pub fn detach_map(&mut self) {
        self.map = None;
    }

    pub fn mode(&self) -> VisualMode {
        self.surface.mode()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Applies to both icons and the busy indicator.
    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    pub fn set_icons(&mut self, icons: TrackingIcons) {
        self.icons = icons;
    }

    pub fn intrinsic_size(&self) -> Size {
        let side = self.icon_size + 2.0 * BUTTON_PADDING;
        Size::new(side, side)
    }

    /// Re-derive the visual mode from the map. Runs the transition even if
    /// the mode is unchanged.
    pub fn refresh(&mut self, animated: bool) {
        let Some(map) = self.map.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        let observation = observe(&*map.borrow(), self.accuracy_threshold_m);
        let mode = crate::model::derive_mode(observation);
        self.surface.transition(mode, animated);
    }

    /// Ask the map to toggle tracking. The visual mode only follows once the
    /// map reports back.
    pub fn on_activate(&mut self) {
        let Some(map) = self.map.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        let mut map = map.borrow_mut();
        let requested = map.user_tracking_mode().toggled();
        tracing::debug!(?requested, "tracking control pressed");
        map.set_user_tracking_mode(requested, true);
    }

    /// Render as not tracking, for previews without a live map.
    pub fn prepare_for_preview(&mut self) {
        self.surface.transition(VisualMode::TrackingOff, false);
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Pressed => self.on_activate(),
            Message::Tick(now) => self.surface.advance(now),
            Message::MapChanged => self.refresh(true),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.surface.is_animating() {
            window::frames().map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let size = Length::Fixed(self.icon_size);
        let mut layers = Stack::new().width(size).height(size);

        for (id, handle) in [
            (PartId::TrackingOn, &self.icons.tracking_on),
            (PartId::TrackingOff, &self.icons.tracking_off),
        ] {
            let part = self.surface.part(id);
            if part.is_hidden() {
                continue;
            }
            let color = Color {
                a: self.tint.a * part.opacity(),
                ..self.tint
            };
            layers = layers.push(
                svg(handle.clone())
                    .width(size)
                    .height(size)
                    .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) }),
            );
        }

        let spinner = self.surface.spinner();
        if !spinner.is_hidden() {
            layers = layers.push(busy_indicator(spinner.phase(), self.tint, self.icon_size));
        }

        tracking_button(container(layers).clip(true), self.corner_radius)
            .padding(BUTTON_PADDING)
            .on_press(Message::Pressed)
            .into()
    }
}

impl MapObserver for TrackingControl {
    fn map_state_changed(&mut self, animated: bool) {
        self.refresh(animated);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{UserLocation, UserTrackingMode};

    #[derive(Default)]
    struct RecordingMap {
        mode: UserTrackingMode,
        location: Option<UserLocation>,
        requests: Vec<UserTrackingMode>,
    }

    impl MapView for RecordingMap {
        fn user_tracking_mode(&self) -> UserTrackingMode {
            self.mode
        }

        fn user_location(&self) -> Option<UserLocation> {
            self.location
        }

        fn set_user_tracking_mode(&mut self, mode: UserTrackingMode, _animated: bool) {
            self.requests.push(mode);
        }
    }

    fn shared(mode: UserTrackingMode, accuracy: Option<f64>) -> Rc<RefCell<RecordingMap>> {
        Rc::new(RefCell::new(RecordingMap {
            mode,
            location: accuracy.map(|a| UserLocation::new(45.5, -73.6, a)),
            requests: Vec::new(),
        }))
    }

    #[test]
    fn starts_tracking_off() {
        let control = TrackingControl::new(&Config::default());
        assert_eq!(control.mode(), VisualMode::TrackingOff);
        assert_eq!(control.surface().visible_parts(), ["tracking_off"]);
    }

    #[test]
    fn refresh_without_map_is_a_no_op() {
        let mut control = TrackingControl::new(&Config::default());
        control.refresh(true);
        control.on_activate();
        assert_eq!(control.mode(), VisualMode::TrackingOff);
        assert!(!control.surface().is_animating());
    }

    #[test]
    fn attached_map_stays_reachable_through_weak_handle() {
        let map = shared(UserTrackingMode::None, None);
        let mut control = TrackingControl::new(&Config::default());
        control.attach_map(&map);
        assert_eq!(Rc::strong_count(&map), 1);

        control.on_activate();
        assert_eq!(map.borrow().requests, [UserTrackingMode::Follow]);
    }

    #[test]
    fn dropped_map_is_treated_as_detached() {
        let map = shared(UserTrackingMode::Follow, Some(5.0));
        let mut control = TrackingControl::with_map(&Config::default(), &map);
        drop(map);
        control.refresh(false);
        assert_eq!(control.mode(), VisualMode::TrackingOff);
    }

    #[test]
    fn observations_map_to_modes() {
        let scenarios = [
            (UserTrackingMode::None, None, VisualMode::TrackingOff),
            (UserTrackingMode::Follow, None, VisualMode::AcquiringFix),
            (UserTrackingMode::Follow, Some(250.0), VisualMode::AcquiringFix),
            (UserTrackingMode::Follow, Some(12.0), VisualMode::TrackingOn),
            (
                UserTrackingMode::FollowWithHeading,
                Some(12.0),
                VisualMode::TrackingOn,
            ),
        ];
        for (mode, accuracy, expected) in scenarios {
            let map = shared(mode, accuracy);
            let mut control = TrackingControl::with_map(&Config::default(), &map);
            control.refresh(false);
            assert_eq!(control.mode(), expected, "{mode:?} {accuracy:?}");
        }
    }

    #[test]
    fn acquiring_shows_spinning_indicator() {
        let map = shared(UserTrackingMode::Follow, None);
        let mut control = TrackingControl::with_map(&Config::default(), &map);
        control.refresh(false);
        assert_eq!(control.surface().visible_parts(), ["spinner"]);
        assert!(control.surface().spinner().is_animating());
    }

    #[test]
    fn tracking_on_stops_spinner() {
        let map = shared(UserTrackingMode::Follow, None);
        let mut control = TrackingControl::with_map(&Config::default(), &map);
        control.refresh(false);
        map.borrow_mut().location = Some(UserLocation::new(45.5, -73.6, 8.0));
        control.map_state_changed(false);
        assert_eq!(control.surface().visible_parts(), ["tracking_on"]);
        assert!(!control.surface().spinner().is_animating());
    }

    #[test]
    fn repeated_refresh_keeps_visible_set() {
        let map = shared(UserTrackingMode::Follow, Some(12.0));
        let mut control = TrackingControl::with_map(&Config::default(), &map);
        control.refresh(false);
        let before = control.surface().visible_parts();
        control.refresh(true);
        assert_eq!(control.surface().visible_parts(), before);
        assert!(!control.surface().is_animating());
    }

    #[test]
    fn press_while_following_requests_off_once() {
        let map = shared(UserTrackingMode::Follow, Some(12.0));
        let mut control = TrackingControl::with_map(&Config::default(), &map);
        control.refresh(false);

        control.update(Message::Pressed);
        assert_eq!(map.borrow().requests, [UserTrackingMode::None]);
        // still showing what the map last reported
        assert_eq!(control.mode(), VisualMode::TrackingOn);
    }

    #[test]
    fn press_while_off_or_heading_requests_follow() {
        for mode in [UserTrackingMode::None, UserTrackingMode::FollowWithHeading] {
            let map = shared(mode, None);
            let mut control = TrackingControl::with_map(&Config::default(), &map);
            control.on_activate();
            assert_eq!(map.borrow().requests, [UserTrackingMode::Follow]);
        }
    }

    #[test]
    fn preview_renders_tracking_off_without_map() {
        let map = shared(UserTrackingMode::Follow, Some(12.0));
        let mut control = TrackingControl::with_map(&Config::default(), &map);
        control.refresh(false);
        control.detach_map();
        control.prepare_for_preview();
        assert_eq!(control.mode(), VisualMode::TrackingOff);
        assert_eq!(control.surface().visible_parts(), ["tracking_off"]);
    }

    #[test]
    fn tint_and_size_come_from_config() {
        let config = Config {
            icon_size: 30.0,
            ..Config::default()
        };
        let mut control = TrackingControl::new(&config);
        assert_eq!(control.intrinsic_size(), Size::new(42.0, 42.0));
        assert_eq!(control.tint(), config.tint_color());
        control.set_tint(Color::WHITE);
        assert_eq!(control.tint(), Color::WHITE);
    }

    #[test]
    fn missing_icon_file_is_an_asset_error() {
        let paths = IconPaths {
            tracking_on: "/nonexistent/on.svg".into(),
            tracking_off: "/nonexistent/off.svg".into(),
        };
        assert!(matches!(
            TrackingIcons::from_paths(&paths),
            Err(TrackingError::AssetError(_))
        ));
    }
}
