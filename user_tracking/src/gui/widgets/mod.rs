pub mod busy_indicator;
pub mod map_canvas;
pub mod tracking_status;
