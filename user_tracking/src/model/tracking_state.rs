use std::fmt;

/// Fixes with a horizontal accuracy at or above this radius (meters) are
/// not good enough to follow.
pub const DEFAULT_ACCURACY_THRESHOLD_M: f64 = 100.0;

/// Tracking mode owned by the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTrackingMode {
    #[default]
    None,
    Follow,
    FollowWithHeading,
}

impl UserTrackingMode {
    pub fn is_tracking(self) -> bool {
        self != UserTrackingMode::None
    }

    /// Mode to request when the control is pressed while the map is in `self`.
    pub fn toggled(self) -> UserTrackingMode {
        match self {
            UserTrackingMode::Follow => UserTrackingMode::None,
            _ => UserTrackingMode::Follow,
        }
    }
}

/// Last known user location as reported by the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of uncertainty in meters. Negative means the fix is invalid.
    pub horizontal_accuracy: f64,
}

impl UserLocation {
    pub fn new(latitude: f64, longitude: f64, horizontal_accuracy: f64) -> Self {
        Self {
            latitude,
            longitude,
            horizontal_accuracy,
        }
    }

    pub fn is_accurate(&self, threshold_m: f64) -> bool {
        // NaN fails both comparisons
        self.horizontal_accuracy >= 0.0 && self.horizontal_accuracy < threshold_m
    }
}

/// Snapshot of the two map properties the control cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapObservation {
    pub tracking_enabled: bool,
    pub has_accurate_fix: bool,
}

impl MapObservation {
    pub fn new(tracking_enabled: bool, has_accurate_fix: bool) -> Self {
        Self {
            tracking_enabled,
            has_accurate_fix,
        }
    }

    pub fn from_parts(
        mode: UserTrackingMode,
        location: Option<UserLocation>,
        threshold_m: f64,
    ) -> Self {
        Self {
            tracking_enabled: mode.is_tracking(),
            has_accurate_fix: location.is_some_and(|l| l.is_accurate(threshold_m)),
        }
    }
}

/// Visual state of the tracking control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualMode {
    #[default]
    Initial,
    AcquiringFix,
    TrackingOff,
    TrackingOn,
}

impl fmt::Display for VisualMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualMode::Initial => write!(f, "Initial"),
            VisualMode::AcquiringFix => write!(f, "Locating"),
            VisualMode::TrackingOff => write!(f, "Tracking Off"),
            VisualMode::TrackingOn => write!(f, "Tracking"),
        }
    }
}

pub fn derive_mode(observation: MapObservation) -> VisualMode {
    if !observation.tracking_enabled {
        VisualMode::TrackingOff
    } else if !observation.has_accurate_fix {
        VisualMode::AcquiringFix
    } else {
        VisualMode::TrackingOn
    }
}
