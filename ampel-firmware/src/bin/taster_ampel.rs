// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

use {esp_backtrace as _, esp_println as _};

use esp_distanz_ampel::ButtonCycler;
use esp_distanz_ampel::hal::{GpioButton, GpioLines};
use esp_distanz_ampel::tasks::button_cycle_task;

esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Startet mit grüner LED, jeder Druck auf den BOOT-Taster (GPIO9)
/// schaltet weiter: Grün → Gelb → Rot → Grün.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    let lines = GpioLines::new(
        Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO6, Level::Low, OutputConfig::default()),
    );

    // Taster gegen GND, interner Pull-Up
    let button = GpioButton::new(Input::new(
        peripherals.GPIO9,
        InputConfig::default().with_pull(Pull::Up),
    ));

    // Schaltet sofort die Start-LED (Grün) ein
    let cycler = ButtonCycler::new(button, lines);

    spawner.spawn(button_cycle_task(cycler)).unwrap();

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
