// Distanz-Indikator Task - Ultraschall-Messung → Rot/Gelb/Grün
use ampel_core::{DistanceSensor, OutputLines, PollDelay, ThresholdIndicator};
use defmt::info;

use crate::hal::{EmbassyDelay, GpioLines, HcSr04};

/// Distanz-Indikator Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Startet die Mess-Schleife aus ampel-core. Nach einem Sensor-Fehler
/// wird sie nach einem Poll-Intervall neu gestartet.
pub async fn distance_indicator_logic<L, S, D>(
    mut indicator: ThresholdIndicator<L>,
    mut sensor: S,
    mut delay: D,
) where
    L: OutputLines,
    S: DistanceSensor,
    D: PollDelay,
{
    let thresholds = indicator.config().thresholds;
    info!(
        "Distance indicator: red < {} cm <= amber <= {} cm < green, interval {} ms",
        thresholds.low(),
        thresholds.high(),
        indicator.config().poll_interval_ms
    );

    indicator.run_with_retry(&mut sensor, &mut delay).await;
}

/// Distanz-Indikator Task - Embassy Task
///
/// Hardware wird in main() erstellt und hier nur übergeben.
///
/// # Parameter
/// - `indicator`: Indikator mit den drei LED-Ausgängen
/// - `sensor`: HC-SR04 Treiber
#[embassy_executor::task]
pub async fn distance_indicator_task(
    indicator: ThresholdIndicator<GpioLines<'static>>,
    sensor: HcSr04<'static>,
) {
    distance_indicator_logic(indicator, sensor, EmbassyDelay).await;
}
