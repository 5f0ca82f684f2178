use thiserror::Error;

pub mod tracking_state;

pub use tracking_state::{
    derive_mode, MapObservation, UserLocation, UserTrackingMode, VisualMode,
    DEFAULT_ACCURACY_THRESHOLD_M,
};

pub type TrackingResult<T> = Result<T, TrackingError>;

#[derive(Error, Debug, Clone)]

pub enum TrackingError {
    #[error("AssetError: {0}")]
    AssetError(String),
}
