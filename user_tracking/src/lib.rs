pub mod app;
pub mod config;
pub mod control;
pub mod gui;
pub mod map;
pub mod model;
