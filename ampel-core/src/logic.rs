//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use core::convert::Infallible;

use crate::traits::{DistanceSensor, OutputLines, PollDelay, SensorError};
use crate::types::{ConfigError, IndicatorConfig, Line, OutputState, Thresholds, Zone};

/// Schallgeschwindigkeit in cm/µs (343 m/s bei ~20 °C)
const SPEED_OF_SOUND_CM_PER_US: f32 = 0.0343;

/// Maximale Messdistanz in cm, größere Werte werden begrenzt
pub const DEFAULT_MAX_DISTANCE_CM: f32 = 100.0;

/// Klassifiziert eine Distanz in eine Zone
///
/// Beide Vergleiche sind strikt: ein Wert genau auf einem Schwellwert
/// landet in `Mid`. NaN erfüllt keinen Vergleich und ergibt ebenfalls `Mid`.
///
/// # Beispiele
///
/// ```
/// # use ampel_core::{Thresholds, Zone, classify};
/// let t = Thresholds::new(20.0, 80.0).unwrap();
/// assert_eq!(classify(10.0, &t), Zone::Near);
/// assert_eq!(classify(20.0, &t), Zone::Mid);
/// assert_eq!(classify(90.0, &t), Zone::Far);
/// ```
pub fn classify(distance: f32, thresholds: &Thresholds) -> Zone {
    if distance < thresholds.low() {
        Zone::Near
    } else if distance > thresholds.high() {
        Zone::Far
    } else {
        Zone::Mid
    }
}

/// Schreibt einen Ausgangszustand auf die Leitungen
///
/// Zuerst werden die inaktiven Leitungen ausgeschaltet, danach die aktive
/// eingeschaltet. So sind auch zwischen zwei Schreibzugriffen nie zwei
/// LEDs gleichzeitig an.
pub fn apply_state<L: OutputLines + ?Sized>(lines: &mut L, state: OutputState) {
    for line in Line::ALL {
        if !state.is_on(line) {
            lines.set_line(line, false);
        }
    }
    lines.set_line(state.active(), true);
}

/// Rechnet die Echo-Pulsbreite eines HC-SR04 in Zentimeter um
///
/// Der Schall läuft hin und zurück, daher wird halbiert. Das Ergebnis ist
/// auf `max_distance_cm` begrenzt.
pub fn echo_to_distance_cm(echo_us: u64, max_distance_cm: f32) -> f32 {
    let distance = echo_us as f32 * SPEED_OF_SOUND_CM_PER_US / 2.0;
    distance.min(max_distance_cm)
}

/// Echo-Pulsbreite in µs, die genau `max_distance_cm` entspricht
pub fn max_echo_us(max_distance_cm: f32) -> u64 {
    (max_distance_cm * 2.0 / SPEED_OF_SOUND_CM_PER_US) as u64
}

/// Entscheidet während der Echo-Messung, ob ein Ergebnis feststeht
///
/// - Pulsbreite erreicht `max_echo_us` → `Some(max_distance_cm)`, auch
///   wenn die Echo-Leitung noch High ist (kein Hindernis in Reichweite,
///   der HC-SR04 hält Echo dann ~38 ms oder länger)
/// - Echo ist wieder Low → `Some(distance)`
/// - sonst `None`, weiter warten
///
/// # Beispiele
///
/// ```
/// # use ampel_core::echo_outcome;
/// assert_eq!(echo_outcome(38_000, true, 100.0), Some(100.0));
/// assert_eq!(echo_outcome(1_000, true, 100.0), None);
/// ```
pub fn echo_outcome(width_us: u64, echo_high: bool, max_distance_cm: f32) -> Option<f32> {
    if width_us >= max_echo_us(max_distance_cm) {
        Some(max_distance_cm)
    } else if !echo_high {
        Some(echo_to_distance_cm(width_us, max_distance_cm))
    } else {
        None
    }
}

/// Distanz-Indikator: Messwert → Zone → genau eine LED
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `L: OutputLines` ermöglicht:
/// - Real Hardware (GpioLines) im Production-Code
/// - Mock Implementation (RecordingLines) in Tests
pub struct ThresholdIndicator<L: OutputLines> {
    config: IndicatorConfig,
    lines: L,
    zone: Option<Zone>,
}

impl<L: OutputLines> ThresholdIndicator<L> {
    /// Erstellt den Indikator
    ///
    /// Die LEDs werden erst beim ersten `step()` gesetzt.
    pub fn new(config: IndicatorConfig, lines: L) -> Result<Self, ConfigError> {
        // Felder von IndicatorConfig sind öffentlich, daher hier erneut prüfen
        if config.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(Self {
            config,
            lines,
            zone: None,
        })
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Zuletzt gesetzte Zone (`None` vor dem ersten `step()`)
    pub fn zone(&self) -> Option<Zone> {
        self.zone
    }

    pub fn output_state(&self) -> Option<OutputState> {
        self.zone.map(OutputState::from)
    }

    pub fn lines(&self) -> &L {
        &self.lines
    }

    pub fn into_lines(self) -> L {
        self.lines
    }

    /// Klassifiziert `distance` und setzt genau die passende LED
    ///
    /// Keine Validierung, keine Fehler - reiner Klassifikations-Schritt.
    pub fn step(&mut self, distance: f32) -> Zone {
        let zone = classify(distance, &self.config.thresholds);
        apply_state(&mut self.lines, OutputState::from(zone));
        self.zone = Some(zone);
        zone
    }

    /// Liest einen Messwert und führt einen `step()` aus
    ///
    /// # Fehlerbehandlung
    /// Sensor-Fehler werden unverändert zurückgegeben. NaN, unendliche und
    /// negative Werte werden als `SensorError::InvalidData` abgelehnt.
    /// In beiden Fällen bleiben die LEDs unverändert.
    pub fn poll_once<S: DistanceSensor + ?Sized>(
        &mut self,
        sensor: &mut S,
    ) -> Result<Zone, SensorError> {
        let distance = sensor.read_distance()?;
        if !distance.is_finite() || distance < 0.0 {
            return Err(SensorError::InvalidData);
        }

        let zone = self.step(distance);

        #[cfg(feature = "defmt")]
        defmt::debug!("Distance: {} cm -> {}", distance, zone);

        Ok(zone)
    }

    /// Mess-Schleife: lesen → klassifizieren → LEDs setzen → warten
    ///
    /// Läuft endlos und kehrt nur beim ersten Sensor-Fehler zurück.
    /// Ob danach neu gestartet wird entscheidet der Aufrufer.
    pub async fn run<S, D>(
        &mut self,
        sensor: &mut S,
        delay: &mut D,
    ) -> Result<Infallible, SensorError>
    where
        S: DistanceSensor + ?Sized,
        D: PollDelay + ?Sized,
    {
        let interval_ms = self.config.poll_interval_ms;
        loop {
            self.poll_once(sensor)?;
            delay.wait(interval_ms).await;
        }
    }

    /// Wie `run()`, startet nach einem Sensor-Fehler aber neu
    ///
    /// Nach einem Fehler wird ein Poll-Intervall gewartet. Die LEDs behalten
    /// in der Zwischenzeit den letzten gültigen Zustand.
    pub async fn run_with_retry<S, D>(&mut self, sensor: &mut S, delay: &mut D)
    where
        S: DistanceSensor + ?Sized,
        D: PollDelay + ?Sized,
    {
        let interval_ms = self.config.poll_interval_ms;
        loop {
            let Err(_e) = self.run(sensor, delay).await;

            #[cfg(feature = "defmt")]
            defmt::error!("Sensor error: {} - restarting in {} ms", _e, interval_ms);

            delay.wait(interval_ms).await;
        }
    }
}
