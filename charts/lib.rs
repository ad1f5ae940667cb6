mod chart;
pub mod components;
mod config;
pub mod confusion_matrix_chart;

pub use self::components::*;
