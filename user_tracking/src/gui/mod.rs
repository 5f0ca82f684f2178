pub mod styles;
pub mod widgets;
