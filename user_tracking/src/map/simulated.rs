use super::MapView;
use crate::config::SimulationConfig;
use crate::model::{UserLocation, UserTrackingMode};
use tokio::sync::watch;

/// What the map publishes to its subscribers after every change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapSnapshot {
    pub mode: UserTrackingMode,
    pub location: Option<UserLocation>,
}

/// In-process map with a location source whose accuracy converges while
/// tracking is on. Changes are published on a watch channel.
pub struct SimulatedMap {
    mode: UserTrackingMode,
    location: Option<UserLocation>,
    simulation: SimulationConfig,
    changes: watch::Sender<MapSnapshot>,
}

impl SimulatedMap {
    pub fn new(simulation: SimulationConfig) -> Self {
        let (changes, _) = watch::channel(MapSnapshot::default());
        Self {
            mode: UserTrackingMode::None,
            location: None,
            simulation,
            changes,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<MapSnapshot> {
        self.changes.subscribe()
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            mode: self.mode,
            location: self.location,
        }
    }

    /// Advance the location source by one reading. Does nothing while the
    /// map is not tracking.
    pub fn step_fix(&mut self) {
        if !self.mode.is_tracking() {
            return;
        }
        let sim = &self.simulation;
        let accuracy = match self.location {
            None => sim.initial_accuracy_m,
            Some(loc) if loc.horizontal_accuracy < 0.0 => sim.initial_accuracy_m,
            Some(loc) => {
                (loc.horizontal_accuracy * sim.improvement_factor).max(sim.best_accuracy_m)
            }
        };
        let next = UserLocation::new(sim.latitude, sim.longitude, accuracy);
        if self.location == Some(next) {
            return;
        }
        self.location = Some(next);
        self.publish();
    }

    pub fn lose_fix(&mut self) {
        if self.location.take().is_some() {
            tracing::debug!("simulated location lost");
            self.publish();
        }
    }

    fn publish(&self) {
        self.changes.send_replace(self.snapshot());
    }
}

impl MapView for SimulatedMap {
    fn user_tracking_mode(&self) -> UserTrackingMode {
        self.mode
    }

    fn user_location(&self) -> Option<UserLocation> {
        self.location
    }

    fn set_user_tracking_mode(&mut self, mode: UserTrackingMode, _animated: bool) {
        if self.mode == mode {
            return;
        }
        tracing::debug!(?mode, "map tracking mode changed");
        self.mode = mode;
        self.publish();
    }
}
