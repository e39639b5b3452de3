//! Custom widgets

pub mod radar;

pub use radar::RadarChart;
