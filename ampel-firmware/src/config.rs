// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use ampel_core::{ConfigError, IndicatorConfig};

// ============================================================================
// Build-Zeit Konfiguration (aus .env / AMPEL_* Environment-Variablen)
// ============================================================================
//
// Erzeugt von build.rs:
// - LOW_THRESHOLD_CM:  unter diesem Wert → Rot   (Default 20 cm)
// - HIGH_THRESHOLD_CM: über diesem Wert  → Grün  (Default 80 cm)
// - POLL_INTERVAL_MS:  Pause zwischen zwei Messungen (Default 200 ms)
// - MAX_DISTANCE_CM:   größere Messwerte werden begrenzt (Default 100 cm)
include!(concat!(env!("OUT_DIR"), "/ampel_config.rs"));

/// Validierte Indikator-Konfiguration aus den Build-Zeit Konstanten
pub fn indicator_config() -> Result<IndicatorConfig, ConfigError> {
    IndicatorConfig::new(LOW_THRESHOLD_CM, HIGH_THRESHOLD_CM, POLL_INTERVAL_MS)
}

// ============================================================================
// LED Konfiguration
// ============================================================================
//
// Drei einzelne LEDs mit Vorwiderstand gegen GND (active high).
// Die Pins werden in den Binaries direkt als Peripherals genutzt
// (GPIO4/5/6), die Nummern hier dienen nur der Dokumentation.

/// GPIO-Pin für die rote LED (Nah)
pub const LED_RED_GPIO_PIN: u8 = 4;

/// GPIO-Pin für die gelbe LED (Mitte)
pub const LED_AMBER_GPIO_PIN: u8 = 5;

/// GPIO-Pin für die grüne LED (Fern)
pub const LED_GREEN_GPIO_PIN: u8 = 6;

// ============================================================================
// HC-SR04 Ultraschall-Sensor
// ============================================================================

/// GPIO-Pin für den Trigger-Eingang des Sensors
pub const SENSOR_TRIGGER_GPIO_PIN: u8 = 2;

/// GPIO-Pin für den Echo-Ausgang des Sensors
/// ACHTUNG: HC-SR04 liefert 5 V, Spannungsteiler auf 3,3 V nötig!
pub const SENSOR_ECHO_GPIO_PIN: u8 = 3;

/// Länge des Trigger-Pulses in µs (Datenblatt: mindestens 10 µs)
pub const TRIGGER_PULSE_US: u32 = 10;

/// Maximale Wartezeit auf den Beginn des Echo-Pulses in µs
pub const ECHO_START_TIMEOUT_US: u64 = 30_000;

/// Maximale Wartezeit bis Echo vor dem Trigger wieder Low ist
/// Ohne Hindernis hält der HC-SR04 Echo ~38 ms High, manche Clones länger
pub const ECHO_SETTLE_TIMEOUT_US: u64 = 200_000;

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// GPIO-Pin für den Taster (BOOT-Taster auf dem DevKit, active low)
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Abtast-Intervall für den Taster in ms
pub const BUTTON_POLL_INTERVAL_MS: u64 = 20;
