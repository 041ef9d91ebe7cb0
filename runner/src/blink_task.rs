use blink::{BlinkDriver, LedPin, TimeSource};
use defmt::info;
use embassy_stm32::gpio::Output;
use embassy_time::{Instant, Timer};
use static_cell::StaticCell;

const ON_DURATION_MS: u32 = 1000;
const OFF_DURATION_MS: u32 = 500;
const UPDATE_INTERVAL_MS: u64 = 50;

pub struct LedOutput<'a>(Output<'a>);

impl LedPin for LedOutput<'_> {
    fn set(&mut self, on: bool) {
        if on {
            self.0.set_high();
        } else {
            self.0.set_low();
        }
    }
}

/// Milliseconds since boot, truncated onto the u32 ring the controller
/// expects.
pub struct Uptime;

impl TimeSource for Uptime {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

pub struct BlinkTaskState<'a> {
    driver: BlinkDriver<Uptime, LedOutput<'a>>,
}

impl BlinkTaskState<'_> {
    pub fn new(led: Output<'_>) -> BlinkTaskState<'_> {
        BlinkTaskState {
            driver: BlinkDriver::new(Uptime, LedOutput(led), ON_DURATION_MS, OFF_DURATION_MS),
        }
    }
}

pub static BLINK_STATE: StaticCell<BlinkTaskState> = StaticCell::new();

#[embassy_executor::task]
pub async fn blink_task(state: &'static mut BlinkTaskState<'static>) {
    info!(
        "Blink task started (on: {}ms, off: {}ms)",
        ON_DURATION_MS, OFF_DURATION_MS
    );

    loop {
        state.driver.tick();
        Timer::after_millis(UPDATE_INTERVAL_MS).await
    }
}
