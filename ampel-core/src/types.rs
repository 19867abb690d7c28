//! Core Types für die Ampel-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Distanz-Zone (Ergebnis der Klassifikation einer Messung)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Distanz kleiner als unterer Schwellwert
    Near,
    /// Distanz zwischen den Schwellwerten (inklusive beider Grenzen)
    Mid,
    /// Distanz größer als oberer Schwellwert
    Far,
}

impl Zone {
    /// Feste Zuordnung Zone → LED: Nah = Rot, Mitte = Gelb, Fern = Grün
    pub const fn line(self) -> Line {
        match self {
            Zone::Near => Line::Red,
            Zone::Mid => Line::Amber,
            Zone::Far => Line::Green,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Zone::Near => "Nah",
            Zone::Mid => "Mitte",
            Zone::Far => "Fern",
        }
    }
}

/// Eine der drei Ausgangsleitungen (je eine LED)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Red,
    Amber,
    Green,
}

impl Line {
    /// Alle Leitungen in fester Reihenfolge
    pub const ALL: [Line; 3] = [Line::Red, Line::Amber, Line::Green];

    pub const fn name(self) -> &'static str {
        match self {
            Line::Red => "Rot",
            Line::Amber => "Gelb",
            Line::Green => "Grün",
        }
    }
}

/// Zustand der drei Ausgangsleitungen
///
/// Kann nur mit genau einer aktiven Leitung erzeugt werden:
/// nie zwei LEDs gleichzeitig an, nie alle aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputState {
    active: Line,
}

impl OutputState {
    /// Nur `line` ist an, die anderen beiden sind aus
    pub const fn only(line: Line) -> Self {
        Self { active: line }
    }

    pub const fn active(&self) -> Line {
        self.active
    }

    pub fn is_on(&self, line: Line) -> bool {
        self.active == line
    }

    /// Pegel aller Leitungen in der Reihenfolge von [`Line::ALL`]
    pub fn levels(&self) -> [(Line, bool); 3] {
        Line::ALL.map(|line| (line, self.is_on(line)))
    }
}

impl From<Zone> for OutputState {
    fn from(zone: Zone) -> Self {
        Self::only(zone.line())
    }
}

/// Fehler bei ungültiger Konfiguration
///
/// Wird beim Start erkannt - die Mess-Schleife startet nie mit
/// inkonsistenten Werten.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `low >= high`
    InvertedThresholds { low: f32, high: f32 },
    /// Schwellwert ist NaN oder unendlich
    NonFiniteThreshold,
    /// Poll-Intervall von 0 ms
    ZeroPollInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvertedThresholds { low, high } => write!(
                f,
                "unterer Schwellwert {low} muss kleiner als oberer Schwellwert {high} sein"
            ),
            ConfigError::NonFiniteThreshold => f.write_str("Schwellwert ist nicht endlich"),
            ConfigError::ZeroPollInterval => f.write_str("Poll-Intervall muss > 0 ms sein"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Validiertes Schwellwert-Paar (`low < high`, beide endlich)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    low: f32,
    high: f32,
}

impl Thresholds {
    pub fn new(low: f32, high: f32) -> Result<Self, ConfigError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ConfigError::NonFiniteThreshold);
        }
        if low >= high {
            return Err(ConfigError::InvertedThresholds { low, high });
        }
        Ok(Self { low, high })
    }

    pub const fn low(&self) -> f32 {
        self.low
    }

    pub const fn high(&self) -> f32 {
        self.high
    }
}

/// Konfiguration des Distanz-Indikators
///
/// Wird einmal beim Start erzeugt, keine Rekonfiguration zur Laufzeit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorConfig {
    pub thresholds: Thresholds,
    pub poll_interval_ms: u64,
}

impl IndicatorConfig {
    /// Erstellt und validiert eine Konfiguration
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use ampel_core::{ConfigError, IndicatorConfig};
    /// assert!(IndicatorConfig::new(20.0, 80.0, 200).is_ok());
    /// assert_eq!(
    ///     IndicatorConfig::new(80.0, 20.0, 200),
    ///     Err(ConfigError::InvertedThresholds { low: 80.0, high: 20.0 })
    /// );
    /// ```
    pub fn new(low: f32, high: f32, poll_interval_ms: u64) -> Result<Self, ConfigError> {
        let thresholds = Thresholds::new(low, high)?;
        if poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(Self {
            thresholds,
            poll_interval_ms,
        })
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Zone {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Line {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OutputState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "OutputState {{ red: {}, amber: {}, green: {} }}",
            self.is_on(Line::Red),
            self.is_on(Line::Amber),
            self.is_on(Line::Green)
        )
    }
}
