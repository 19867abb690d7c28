// Task-Modul: Enthält die Embassy Tasks
//
// Pro Binary läuft genau ein Task, der die drei LEDs exklusiv besitzt.

pub mod button_cycle;
pub mod distance_indicator;

// Re-export Tasks für einfachen Import
pub use button_cycle::button_cycle_task;
pub use distance_indicator::distance_indicator_task;
