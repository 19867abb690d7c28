//! Taster-Zyklus: Jeder Tastendruck schaltet zur nächsten LED
//!
//! Ein Druck wird als Flanke (losgelassen → gedrückt) zwischen zwei
//! Abtastungen erkannt, nicht als Pegel. Ein gehaltener Taster zählt
//! also genau einmal.

use crate::logic::apply_state;
use crate::traits::{ButtonInput, OutputLines, PollDelay};
use crate::types::{Line, OutputState};

/// Erkennt steigende Flanken in einer Folge von Abtastwerten
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeDetector {
    was_pressed: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { was_pressed: false }
    }

    /// `true` nur beim Übergang losgelassen → gedrückt
    pub fn rising(&mut self, is_pressed: bool) -> bool {
        let edge = is_pressed && !self.was_pressed;
        self.was_pressed = is_pressed;
        edge
    }
}

/// Reihenfolge der LEDs im Zyklus: Grün → Gelb → Rot → Grün
const CYCLE_ORDER: [Line; 3] = [Line::Green, Line::Amber, Line::Red];

/// Index in die Zyklus-Reihenfolge, startet bei Grün
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LedCycle {
    index: usize,
}

impl LedCycle {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    pub const fn current(&self) -> Line {
        CYCLE_ORDER[self.index]
    }

    /// Schaltet zur nächsten LED und gibt sie zurück
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use ampel_core::{LedCycle, Line};
    /// let mut cycle = LedCycle::new();
    /// assert_eq!(cycle.current(), Line::Green);
    /// assert_eq!(cycle.advance(), Line::Amber);
    /// assert_eq!(cycle.advance(), Line::Red);
    /// assert_eq!(cycle.advance(), Line::Green);
    /// ```
    pub fn advance(&mut self) -> Line {
        self.index = (self.index + 1) % CYCLE_ORDER.len();
        self.current()
    }

    pub const fn output_state(&self) -> OutputState {
        OutputState::only(self.current())
    }
}

/// Verbindet Taster, Zyklus und LEDs
pub struct ButtonCycler<B: ButtonInput, L: OutputLines> {
    button: B,
    lines: L,
    edge: EdgeDetector,
    cycle: LedCycle,
}

impl<B: ButtonInput, L: OutputLines> ButtonCycler<B, L> {
    /// Erstellt den Zyklus und schaltet sofort die Start-LED (Grün) ein
    pub fn new(button: B, mut lines: L) -> Self {
        let cycle = LedCycle::new();
        apply_state(&mut lines, cycle.output_state());
        Self {
            button,
            lines,
            edge: EdgeDetector::new(),
            cycle,
        }
    }

    pub fn current(&self) -> Line {
        self.cycle.current()
    }

    pub fn lines(&self) -> &L {
        &self.lines
    }

    /// Tastet den Taster einmal ab
    ///
    /// Bei einer steigenden Flanke wird weitergeschaltet und die neue
    /// LED zurückgegeben, sonst `None`.
    pub fn poll(&mut self) -> Option<Line> {
        let pressed = self.button.is_pressed();
        if !self.edge.rising(pressed) {
            return None;
        }

        let line = self.cycle.advance();
        apply_state(&mut self.lines, self.cycle.output_state());

        #[cfg(feature = "defmt")]
        defmt::info!("Button pressed -> {}", line);

        Some(line)
    }

    /// Endlose Abtast-Schleife mit festem Intervall
    pub async fn run<D: PollDelay + ?Sized>(&mut self, delay: &mut D, interval_ms: u64) {
        loop {
            self.poll();
            delay.wait(interval_ms).await;
        }
    }
}
