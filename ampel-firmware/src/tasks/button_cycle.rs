// Taster-Ampel Task - jeder Tastendruck schaltet zur nächsten LED
use ampel_core::ButtonCycler;
use defmt::info;

use crate::config::BUTTON_POLL_INTERVAL_MS;
use crate::hal::{EmbassyDelay, GpioButton, GpioLines};

/// Taster-Ampel Task - Embassy Task
///
/// Der Taster wird im festen Intervall abgetastet (kein GPIO-Interrupt).
/// Ein Druck zählt nur beim Übergang losgelassen → gedrückt.
#[embassy_executor::task]
pub async fn button_cycle_task(mut cycler: ButtonCycler<GpioButton<'static>, GpioLines<'static>>) {
    info!("Button cycler started with {}", cycler.current());
    cycler.run(&mut EmbassyDelay, BUTTON_POLL_INTERVAL_MS).await;
}
