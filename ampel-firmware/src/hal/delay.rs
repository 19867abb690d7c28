// Poll-Delay über den Embassy Timer
//
// Gibt die CPU während der Wartezeit an den Executor zurück.

use ampel_core::PollDelay;
use core::future::Future;
use embassy_time::{Duration, Timer};

pub struct EmbassyDelay;

impl PollDelay for EmbassyDelay {
    fn wait(&mut self, millis: u64) -> impl Future<Output = ()> {
        Timer::after(Duration::from_millis(millis))
    }
}
