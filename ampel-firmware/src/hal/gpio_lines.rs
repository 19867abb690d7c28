// GPIO-Implementierungen für LEDs und Taster
//
// Verbindet esp-hal Output/Input Pins mit den Traits aus ampel-core.

use ampel_core::{ButtonInput, Line, OutputLines};
use esp_hal::gpio::{Input, Level, Output};

/// Drei LEDs an einzelnen GPIO-Ausgängen (active high)
pub struct GpioLines<'d> {
    red: Output<'d>,
    amber: Output<'d>,
    green: Output<'d>,
}

impl<'d> GpioLines<'d> {
    /// Übernimmt die drei Ausgänge
    ///
    /// Die Pins sollten mit `Level::Low` erzeugt werden, damit beim Start
    /// keine LED leuchtet.
    pub fn new(red: Output<'d>, amber: Output<'d>, green: Output<'d>) -> Self {
        Self { red, amber, green }
    }
}

impl OutputLines for GpioLines<'_> {
    fn set_line(&mut self, line: Line, on: bool) {
        let pin = match line {
            Line::Red => &mut self.red,
            Line::Amber => &mut self.amber,
            Line::Green => &mut self.green,
        };
        pin.set_level(Level::from(on));
    }
}

/// Taster gegen GND mit internem Pull-Up (gedrückt = Low)
pub struct GpioButton<'d> {
    input: Input<'d>,
}

impl<'d> GpioButton<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self { input }
    }
}

impl ButtonInput for GpioButton<'_> {
    fn is_pressed(&mut self) -> bool {
        self.input.is_low()
    }
}
