//! Ampel Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits, Typen und Pure Functions für
//! den Distanz-Indikator und den Taster-Zyklus.

#![no_std]

pub mod cycle;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use cycle::{ButtonCycler, EdgeDetector, LedCycle};
pub use logic::{
    DEFAULT_MAX_DISTANCE_CM, ThresholdIndicator, apply_state, classify, echo_outcome,
    echo_to_distance_cm, max_echo_us,
};
pub use traits::{ButtonInput, DistanceSensor, OutputLines, PollDelay, SensorError};
pub use types::{ConfigError, IndicatorConfig, Line, OutputState, Thresholds, Zone};
