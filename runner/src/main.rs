#![no_std]
#![no_main]

mod blink_task;
mod hardware;

use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Executor;
use static_cell::StaticCell;

use crate::{
    blink_task::{BLINK_STATE, BlinkTaskState, blink_task},
    hardware::Hardware,
};

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[cortex_m_rt::entry]
fn main() -> ! {
    let hardware = Hardware::get();

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner
            .spawn(blink_task(
                BLINK_STATE.init(BlinkTaskState::new(hardware.status_led)),
            ))
            .ok();
    })
}
