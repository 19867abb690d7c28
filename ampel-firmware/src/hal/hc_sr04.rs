// HC-SR04 Ultraschall-Sensor
//
// Ablauf einer Messung:
// 1. Trigger für 10 µs auf High
// 2. Warten bis Echo auf High geht (Sensor sendet Burst)
// 3. Echo-Pulsbreite messen = Laufzeit hin und zurück, höchstens bis
//    zur Pulsbreite von max_distance_cm (danach gilt: nichts in Reichweite)
//
// Die Messung ist blockierend (Busy-Wait, keine GPIO-Interrupts).

use ampel_core::{DistanceSensor, SensorError, echo_outcome};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, Output};
use esp_hal::time::{Duration, Instant};

use crate::config::{ECHO_SETTLE_TIMEOUT_US, ECHO_START_TIMEOUT_US, TRIGGER_PULSE_US};

pub struct HcSr04<'d> {
    trigger: Output<'d>,
    echo: Input<'d>,
    delay: Delay,
    max_distance_cm: f32,
}

impl<'d> HcSr04<'d> {
    /// Erstellt den Sensor-Treiber
    ///
    /// # Parameter
    /// - `trigger`: Ausgang zum TRIG-Pin (initial Low)
    /// - `echo`: Eingang vom ECHO-Pin (über Spannungsteiler!)
    /// - `max_distance_cm`: größere Messwerte werden auf diesen Wert begrenzt
    pub fn new(trigger: Output<'d>, echo: Input<'d>, max_distance_cm: f32) -> Self {
        Self {
            trigger,
            echo,
            delay: Delay::new(),
            max_distance_cm,
        }
    }

    fn send_trigger_pulse(&mut self) {
        self.trigger.set_low();
        self.delay.delay_micros(2);
        self.trigger.set_high();
        self.delay.delay_micros(TRIGGER_PULSE_US);
        self.trigger.set_low();
    }

    /// Wartet bis die Echo-Leitung Low ist (Rest eines vorherigen Bursts)
    fn wait_echo_idle(&mut self) -> Result<(), SensorError> {
        let settle_timeout = Duration::from_micros(ECHO_SETTLE_TIMEOUT_US);
        let waiting_since = Instant::now();
        while self.echo.is_high() {
            if waiting_since.elapsed() > settle_timeout {
                // Echo dauerhaft High → Sensor hängt
                return Err(SensorError::Timeout);
            }
        }
        Ok(())
    }

    /// Führt eine Messung aus und liefert die Distanz in cm
    ///
    /// Sobald die Pulsbreite `max_distance_cm` entspricht wird nicht weiter
    /// gewartet: kein Hindernis in Reichweite ist ein gültiger Messwert.
    fn measure_cm(&mut self) -> Result<f32, SensorError> {
        self.wait_echo_idle()?;
        self.send_trigger_pulse();

        let start_timeout = Duration::from_micros(ECHO_START_TIMEOUT_US);
        let waiting_since = Instant::now();
        while self.echo.is_low() {
            if waiting_since.elapsed() > start_timeout {
                return Err(SensorError::NoEcho);
            }
        }

        let pulse_start = Instant::now();
        loop {
            let echo_high = self.echo.is_high();
            let width_us = pulse_start.elapsed().as_micros();
            if let Some(distance) = echo_outcome(width_us, echo_high, self.max_distance_cm) {
                return Ok(distance);
            }
        }
    }
}

impl DistanceSensor for HcSr04<'_> {
    fn read_distance(&mut self) -> Result<f32, SensorError> {
        self.measure_cm()
    }
}
