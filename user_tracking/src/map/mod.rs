use crate::model::{MapObservation, UserLocation, UserTrackingMode};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub mod simulated;

pub use simulated::{MapSnapshot, SimulatedMap};

/// The map the tracking control drives. The map owns the tracking mode and
/// the user location; the control only reads them and asks for changes.
pub trait MapView {
    fn user_tracking_mode(&self) -> UserTrackingMode;

    fn user_location(&self) -> Option<UserLocation>;

    fn set_user_tracking_mode(&mut self, mode: UserTrackingMode, animated: bool);
}

/// Receives a push from the map whenever its tracking mode or fix changes.
pub trait MapObserver {
    fn map_state_changed(&mut self, animated: bool);
}

pub type SharedMap = Rc<RefCell<dyn MapView>>;

/// Non-owning handle held by the control.
pub type MapHandle = Weak<RefCell<dyn MapView>>;

pub fn observe(map: &dyn MapView, accuracy_threshold_m: f64) -> MapObservation {
    MapObservation::from_parts(
        map.user_tracking_mode(),
        map.user_location(),
        accuracy_threshold_m,
    )
}
