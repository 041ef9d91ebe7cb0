use defmt::info;
use embassy_stm32::gpio::{Level, Output, Speed};

pub struct Hardware<'a> {
    pub status_led: Output<'a>,
}

impl<'a> Hardware<'a> {
    pub fn get() -> Hardware<'a> {
        info!("Initializing");
        let peripherals = embassy_stm32::init(Default::default());

        let status_led = Output::new(peripherals.PB0, Level::Low, Speed::Low);

        Hardware { status_led }
    }
}
