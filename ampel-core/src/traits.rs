//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use core::fmt;
use core::future::Future;

use crate::types::Line;

/// Fehler-Typ für Sensor-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Echo-Puls kam nicht rechtzeitig zurück
    Timeout,
    /// Echo-Leitung war nie High (Sensor nicht angeschlossen?)
    NoEcho,
    /// Messwert ist NaN, unendlich oder negativ
    InvalidData,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Timeout => f.write_str("Sensor-Timeout"),
            SensorError::NoEcho => f.write_str("kein Echo vom Sensor"),
            SensorError::InvalidData => f.write_str("ungültiger Messwert"),
        }
    }
}

impl core::error::Error for SensorError {}

/// Trait für Distanz-Sensoren
///
/// # Implementierungen
/// - **Production:** HcSr04 (Ultraschall, Trigger/Echo über GPIO)
/// - **Testing:** ScriptedSensor (liefert vorgegebene Messwerte)
pub trait DistanceSensor {
    /// Liest eine Distanz in Zentimetern (blockierend)
    ///
    /// # Fehlerbehandlung
    /// Hardware-Fehler werden als `SensorError` zurückgegeben, nie als
    /// Ersatzwert.
    fn read_distance(&mut self) -> Result<f32, SensorError>;
}

/// Trait für die drei Ausgangsleitungen (LEDs)
///
/// Mehrfaches Setzen desselben Pegels muss erlaubt und wirkungslos sein.
pub trait OutputLines {
    fn set_line(&mut self, line: Line, on: bool);
}

/// Wartezeit zwischen zwei Zyklen
///
/// - **Production:** EmbassyDelay (`embassy_time::Timer`)
/// - **Testing:** Mock der die Aufrufe nur zählt
pub trait PollDelay {
    fn wait(&mut self, millis: u64) -> impl Future<Output = ()>;
}

/// Trait für einen Taster
pub trait ButtonInput {
    /// `true` solange der Taster gedrückt ist (Pegel, kein Ereignis)
    fn is_pressed(&mut self) -> bool;
}
