use std::thread::sleep;
use std::time::Duration;

use blink::BlinkDriver;
use clap::Parser;
use console_sim::{ConsoleLedPin, WallClock};

#[derive(Parser, Debug)]
#[command(name = "Blink Demo")]
#[command(about = "Visualizes the blink controller with a console LED", long_about = None)]
struct Args {
    /// How long the LED stays on (ms)
    #[arg(long, default_value = "1000")]
    on_duration: u32,

    /// How long the LED stays off (ms)
    #[arg(long, default_value = "500")]
    off_duration: u32,

    /// Total simulation time (ms)
    #[arg(long, default_value = "10000")]
    duration: u32,

    /// Delay between controller updates (ms)
    #[arg(long, default_value = "50")]
    interval: u32,
}

fn main() {
    let args = Args::parse();

    println!("\n=== Blink Demo ===\n");
    println!("Configuration:");
    println!("  ON duration:  {}ms", args.on_duration);
    println!("  OFF duration: {}ms", args.off_duration);
    println!(
        "  Total cycle:  {}ms",
        args.on_duration + args.off_duration
    );
    println!("\nRunning for {}ms...\n", args.duration);

    let mut driver = BlinkDriver::new(
        WallClock::new(),
        ConsoleLedPin::new(),
        args.on_duration,
        args.off_duration,
    );

    while driver.clock().millis() < args.duration {
        driver.tick();
        println!("{}", driver.pin().last_output());
        sleep(Duration::from_millis(args.interval as u64));
    }

    println!("\n=== Demo Complete ===");
    println!("The same controller drives a mock pin in tests, this console");
    println!("pin on the host, and a GPIO output in the firmware runner.");
}
