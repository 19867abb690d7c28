//! Integration Tests für den Distanz-Indikator
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Sensor,
//! Mock-LEDs und Mock-Delay

use std::collections::VecDeque;
use std::future::Future;

use ampel_core::{
    ConfigError, DEFAULT_MAX_DISTANCE_CM, DistanceSensor, IndicatorConfig, Line, OutputLines,
    OutputState, PollDelay, SensorError, ThresholdIndicator, Zone, echo_outcome,
};
use embassy_futures::block_on;

// ============================================================================
// Mocks
// ============================================================================

/// Zeichnet alle Schreibzugriffe auf und merkt sich den aktuellen Pegel
#[derive(Default)]
pub struct RecordingLines {
    pub levels: [bool; 3],
    pub writes: Vec<(Line, bool)>,
    /// Höchste Anzahl gleichzeitig eingeschalteter LEDs nach irgendeinem Write
    pub max_lit: usize,
}

impl RecordingLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lit(&self) -> Vec<Line> {
        Line::ALL
            .into_iter()
            .filter(|line| self.levels[index(*line)])
            .collect()
    }
}

fn index(line: Line) -> usize {
    match line {
        Line::Red => 0,
        Line::Amber => 1,
        Line::Green => 2,
    }
}

impl OutputLines for RecordingLines {
    fn set_line(&mut self, line: Line, on: bool) {
        self.levels[index(line)] = on;
        self.writes.push((line, on));
        let lit = self.levels.iter().filter(|on| **on).count();
        self.max_lit = self.max_lit.max(lit);
    }
}

/// Liefert vorgegebene Messwerte, danach `SensorError::Timeout`
pub struct ScriptedSensor {
    readings: VecDeque<Result<f32, SensorError>>,
    pub reads: usize,
}

impl ScriptedSensor {
    pub fn new(readings: impl IntoIterator<Item = Result<f32, SensorError>>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            reads: 0,
        }
    }
}

impl DistanceSensor for ScriptedSensor {
    fn read_distance(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;
        self.readings
            .pop_front()
            .unwrap_or(Err(SensorError::Timeout))
    }
}

#[derive(Default)]
pub struct CountingDelay {
    pub waits: Vec<u64>,
}

impl PollDelay for CountingDelay {
    fn wait(&mut self, millis: u64) -> impl Future<Output = ()> {
        self.waits.push(millis);
        std::future::ready(())
    }
}

/// Zählt Wartezyklen und bricht die endlose Schleife per Panic ab
pub struct LimitedDelay {
    pub waits: Vec<u64>,
    pub limit: usize,
}

impl PollDelay for LimitedDelay {
    fn wait(&mut self, millis: u64) -> impl Future<Output = ()> {
        self.waits.push(millis);
        if self.waits.len() >= self.limit {
            panic!("delay limit reached");
        }
        std::future::ready(())
    }
}

fn indicator() -> ThresholdIndicator<RecordingLines> {
    let config = IndicatorConfig::new(20.0, 80.0, 200).unwrap();
    ThresholdIndicator::new(config, RecordingLines::new()).unwrap()
}

// ============================================================================
// Tests: step()
// ============================================================================

#[test]
fn test_step_end_to_end() {
    let mut ind = indicator();
    assert_eq!(ind.step(10.0), Zone::Near);
    assert_eq!(ind.step(50.0), Zone::Mid);
    assert_eq!(ind.step(90.0), Zone::Far);
    assert_eq!(ind.step(20.0), Zone::Mid);
    assert_eq!(ind.step(80.0), Zone::Mid);
}

#[test]
fn test_step_boundaries() {
    let mut ind = indicator();
    assert_eq!(ind.step(19.0), Zone::Near);
    assert_eq!(ind.step(20.0), Zone::Mid);
    assert_eq!(ind.step(80.0), Zone::Mid);
    assert_eq!(ind.step(81.0), Zone::Far);
}

#[test]
fn test_step_sets_matching_line() {
    let mut ind = indicator();

    ind.step(5.0);
    assert_eq!(ind.lines().lit(), vec![Line::Red]);

    ind.step(50.0);
    assert_eq!(ind.lines().lit(), vec![Line::Amber]);

    ind.step(200.0);
    assert_eq!(ind.lines().lit(), vec![Line::Green]);
}

#[test]
fn test_step_exactly_one_line_for_many_distances() {
    let mut ind = indicator();
    let mut d = 0.0_f32;
    while d <= 120.0 {
        let zone = ind.step(d);
        let lit = ind.lines().lit();
        assert_eq!(lit.len(), 1, "distance {d}");
        assert_eq!(lit[0], zone.line());
        d += 0.5;
    }
    assert_eq!(ind.lines().max_lit, 1);
}

#[test]
fn test_step_never_two_lines_between_writes() {
    let mut ind = indicator();
    for d in [5.0, 90.0, 50.0, 5.0, 50.0, 90.0] {
        ind.step(d);
    }
    // Auch zwischen einzelnen set_line() Aufrufen nie zwei LEDs an
    assert_eq!(ind.lines().max_lit, 1);
}

#[test]
fn test_step_idempotent() {
    let mut ind = indicator();

    let first = ind.step(42.0);
    let first_state = ind.output_state();
    let first_levels = ind.lines().levels;

    let second = ind.step(42.0);

    assert_eq!(first, second);
    assert_eq!(first_state, ind.output_state());
    assert_eq!(first_levels, ind.lines().levels);
    assert_eq!(ind.output_state(), Some(OutputState::only(Line::Amber)));
}

#[test]
fn test_step_records_zone() {
    let mut ind = indicator();
    assert_eq!(ind.zone(), None);
    ind.step(90.0);
    assert_eq!(ind.zone(), Some(Zone::Far));
}

// ============================================================================
// Tests: Konfiguration
// ============================================================================

#[test]
fn test_config_inverted_thresholds() {
    let result = IndicatorConfig::new(80.0, 20.0, 200);
    assert_eq!(
        result,
        Err(ConfigError::InvertedThresholds {
            low: 80.0,
            high: 20.0
        })
    );
}

#[test]
fn test_config_keeps_interval() {
    let config = IndicatorConfig::new(20.0, 80.0, 150).unwrap();
    assert_eq!(config.poll_interval_ms, 150);
    assert_eq!(config.thresholds.low(), 20.0);
    assert_eq!(config.thresholds.high(), 80.0);
}

// ============================================================================
// Tests: poll_once()
// ============================================================================

#[test]
fn test_poll_once_valid_reading() {
    let mut ind = indicator();
    let mut sensor = ScriptedSensor::new([Ok(12.5)]);
    assert_eq!(ind.poll_once(&mut sensor), Ok(Zone::Near));
    assert_eq!(ind.lines().lit(), vec![Line::Red]);
}

#[test]
fn test_poll_once_rejects_invalid_readings() {
    for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1.0] {
        let mut ind = indicator();
        let mut sensor = ScriptedSensor::new([Ok(bad)]);
        assert_eq!(ind.poll_once(&mut sensor), Err(SensorError::InvalidData));
        assert!(ind.lines().writes.is_empty());
        assert_eq!(ind.zone(), None);
    }
}

#[test]
fn test_poll_once_sensor_error_keeps_leds() {
    let mut ind = indicator();
    let mut sensor = ScriptedSensor::new([Ok(90.0), Err(SensorError::NoEcho)]);

    ind.poll_once(&mut sensor).unwrap();
    let writes_before = ind.lines().writes.len();

    assert_eq!(ind.poll_once(&mut sensor), Err(SensorError::NoEcho));
    assert_eq!(ind.lines().writes.len(), writes_before);
    assert_eq!(ind.zone(), Some(Zone::Far));
}

// ============================================================================
// Tests: run()
// ============================================================================

#[test]
fn test_run_propagates_first_error() {
    let mut ind = indicator();
    let mut sensor = ScriptedSensor::new([
        Ok(10.0),
        Ok(50.0),
        Ok(90.0),
        Err(SensorError::NoEcho),
        Ok(50.0),
    ]);
    let mut delay = CountingDelay::default();

    let result = block_on(ind.run(&mut sensor, &mut delay));

    assert_eq!(result.unwrap_err(), SensorError::NoEcho);
    assert_eq!(sensor.reads, 4);
    assert_eq!(delay.waits, vec![200, 200, 200]);
    assert_eq!(ind.zone(), Some(Zone::Far));
}

#[test]
fn test_run_stops_on_invalid_data() {
    let mut ind = indicator();
    let mut sensor = ScriptedSensor::new([Ok(30.0), Ok(f32::NAN)]);
    let mut delay = CountingDelay::default();

    let result = block_on(ind.run(&mut sensor, &mut delay));

    assert_eq!(result.unwrap_err(), SensorError::InvalidData);
    assert_eq!(delay.waits.len(), 1);
    assert_eq!(ind.lines().lit(), vec![Line::Amber]);
}

#[test]
fn test_run_immediate_error_writes_nothing() {
    let mut ind = indicator();
    let mut sensor = ScriptedSensor::new(Vec::<Result<f32, SensorError>>::new());
    let mut delay = CountingDelay::default();

    let result = block_on(ind.run(&mut sensor, &mut delay));

    assert_eq!(result.unwrap_err(), SensorError::Timeout);
    assert!(delay.waits.is_empty());
    assert!(ind.into_lines().writes.is_empty());
}

#[test]
fn test_run_with_retry_waits_poll_interval_after_error() {
    let mut ind = indicator();
    let mut sensor = ScriptedSensor::new([Ok(10.0), Err(SensorError::NoEcho), Ok(90.0)]);
    let mut delay = LimitedDelay {
        waits: Vec::new(),
        limit: 4,
    };

    // Ok(10) → wait, NoEcho → Retry-wait, Ok(90) → wait, Timeout → Retry-wait (Abbruch)
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        block_on(ind.run_with_retry(&mut sensor, &mut delay));
    }));

    assert!(result.is_err());
    assert_eq!(delay.waits, vec![200, 200, 200, 200]);
    assert_eq!(sensor.reads, 4);
    assert_eq!(ind.zone(), Some(Zone::Far));
    assert_eq!(ind.lines().lit(), vec![Line::Green]);
}

// ============================================================================
// Tests: Echo-Auswertung
// ============================================================================

#[test]
fn test_no_obstacle_echo_is_far() {
    // Ohne Hindernis hält der HC-SR04 Echo ~38 ms High
    let distance = echo_outcome(38_000, true, DEFAULT_MAX_DISTANCE_CM);
    assert_eq!(distance, Some(DEFAULT_MAX_DISTANCE_CM));

    let mut ind = indicator();
    let mut sensor = ScriptedSensor::new(distance.map(Ok));
    assert_eq!(ind.poll_once(&mut sensor), Ok(Zone::Far));
    assert_eq!(ind.lines().lit(), vec![Line::Green]);
}

#[test]
fn test_echo_still_measuring_within_range() {
    // 2 ms Echo (~34 cm) noch High → weiter warten
    assert_eq!(echo_outcome(2_000, true, DEFAULT_MAX_DISTANCE_CM), None);

    let distance = echo_outcome(2_000, false, DEFAULT_MAX_DISTANCE_CM).unwrap();
    let mut ind = indicator();
    assert_eq!(ind.step(distance), Zone::Mid);
}
