// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von ampel-core
pub use ampel_core::{
    ButtonCycler, ConfigError, IndicatorConfig, Line, OutputState, SensorError,
    ThresholdIndicator, Zone,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal,
// embassy-executor). Alles was ohne Hardware testbar ist liegt deshalb in
// ampel-core und wird von ampel-tests auf dem Host getestet:
//
// - Klassifikation, Schwellwerte, Konfigurations-Validierung
// - Mess-Schleife inkl. Fehler-Weitergabe (Mock-Sensor, Mock-LEDs)
// - Taster-Flankenerkennung und LED-Zyklus
//
// Hier bleiben nur dünne Adapter (hal/) und die Task-Verdrahtung (tasks/).
