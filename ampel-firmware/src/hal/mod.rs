// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus ampel-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod delay;
pub mod gpio_lines;
pub mod hc_sr04;

pub use delay::EmbassyDelay;
pub use gpio_lines::{GpioButton, GpioLines};
pub use hc_sr04::HcSr04;
