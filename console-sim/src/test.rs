use std::thread::sleep;
use std::time::Duration;

use blink::LedPin;
use pretty_assertions::assert_eq;

use crate::{ConsoleLedPin, WallClock, format_output, strip_ansi_codes};

#[test]
fn initial_state_is_off() {
    let pin = ConsoleLedPin::new();

    assert!(!pin.state());
    assert_eq!(pin.last_output(), "");
}

#[test]
fn set_transitions_are_observable() {
    let mut pin = ConsoleLedPin::new();

    pin.set(true);
    assert!(pin.state());

    pin.set(false);
    assert!(!pin.state());

    pin.set(true);
    pin.set(true);
    assert!(pin.state());
}

#[test]
fn output_contains_timestamp_and_label() {
    let mut pin = ConsoleLedPin::new();

    pin.set(true);

    assert!(pin.last_output().contains("ms]"));
    assert!(pin.last_output().contains("LED:"));
}

#[test]
fn output_shows_on_and_off_states() {
    let mut pin = ConsoleLedPin::new();

    pin.set(true);
    assert!(strip_ansi_codes(pin.last_output()).contains("ON"));

    pin.set(false);
    assert!(strip_ansi_codes(pin.last_output()).contains("OFF"));
}

#[test]
fn output_colors_match_the_state() {
    let mut pin = ConsoleLedPin::new();

    pin.set(true);
    assert!(pin.last_output().contains("\x1b[32m"));
    assert!(pin.last_output().contains("\x1b[0m"));

    pin.set(false);
    assert!(pin.last_output().contains("\x1b[31m"));
    assert!(pin.last_output().contains("\x1b[0m"));
}

#[test]
fn format_output_renders_the_given_timestamp() {
    assert!(format_output(1234, true).contains("1234ms"));
    assert!(format_output(5678, false).contains("5678ms"));
    assert!(format_output(0, true).contains("0ms"));
}

#[test]
fn strip_ansi_codes_removes_color_sequences() {
    assert_eq!(strip_ansi_codes("\x1b[32mGREEN TEXT\x1b[0m"), "GREEN TEXT");
    assert_eq!(
        strip_ansi_codes("\x1b[31mRED\x1b[0m and \x1b[32mGREEN\x1b[0m"),
        "RED and GREEN"
    );
}

#[test]
fn strip_ansi_codes_leaves_plain_text_untouched() {
    assert_eq!(
        strip_ansi_codes("Plain text without codes"),
        "Plain text without codes"
    );
    assert_eq!(strip_ansi_codes(""), "");
}

#[test]
fn pin_timestamp_restarts_on_reset() {
    let mut pin = ConsoleLedPin::new();

    sleep(Duration::from_millis(30));
    let before_reset = pin.timestamp_ms();
    assert!(before_reset >= 20);

    pin.reset_time();
    assert!(pin.timestamp_ms() < before_reset);
}

#[test]
fn wall_clock_is_monotonic() {
    let clock = WallClock::new();

    let t1 = clock.millis();
    sleep(Duration::from_millis(5));
    let t2 = clock.millis();
    sleep(Duration::from_millis(5));
    let t3 = clock.millis();

    assert!(t1 <= t2);
    assert!(t2 <= t3);
}

#[test]
fn wall_clock_restarts_on_reset() {
    let mut clock = WallClock::new();

    sleep(Duration::from_millis(30));
    let before_reset = clock.millis();
    assert!(before_reset >= 20);

    clock.reset();
    assert!(clock.millis() < before_reset);
}

#[test]
fn wall_clock_advances_while_sleeping() {
    let clock = WallClock::new();

    sleep(Duration::from_millis(20));

    assert!(clock.millis() >= 10);
}
