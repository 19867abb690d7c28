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
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_distanz_ampel::ThresholdIndicator;
use esp_distanz_ampel::config::{MAX_DISTANCE_CM, indicator_config};
use esp_distanz_ampel::hal::{GpioLines, HcSr04};
use esp_distanz_ampel::tasks::distance_indicator_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Validiert die Konfiguration, initialisiert LEDs und Sensor und startet
/// den Distanz-Indikator Task. Danach schläft main().
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // Fail fast: ungültige Schwellwerte → Panic bevor irgendeine Messung startet
    let config = match indicator_config() {
        Ok(config) => config,
        Err(e) => {
            defmt::error!("Invalid configuration: {}", e);
            panic!("invalid indicator configuration");
        }
    };

    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LEDs: alle starten aus
    let lines = GpioLines::new(
        Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO6, Level::Low, OutputConfig::default()),
    );

    // HC-SR04: Trigger GPIO2, Echo GPIO3 (Pull-Down hält Echo ohne Sensor auf Low)
    let sensor = HcSr04::new(
        Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default()),
        Input::new(
            peripherals.GPIO3,
            InputConfig::default().with_pull(Pull::Down),
        ),
        MAX_DISTANCE_CM,
    );

    let indicator = ThresholdIndicator::new(config, lines).expect("config already validated");

    spawner
        .spawn(distance_indicator_task(indicator, sensor))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
