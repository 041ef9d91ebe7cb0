#![cfg_attr(not(test), no_std)]

use defmt::info;

/// Output sink for a binary LED state.
pub trait LedPin {
    fn set(&mut self, on: bool);
}

/// Monotonic millisecond clock. The counter wraps at `u32::MAX`
/// (after ~49.7 days); consumers must treat the domain as a ring.
pub trait TimeSource {
    fn now_ms(&self) -> u32;
}

/// Blink timing state machine. Pure logic, no hardware dependencies:
/// feed it timestamps, it tells you whether the LED should be on.
#[derive(Debug, Clone, Copy)]
pub struct BlinkController {
    on_duration_ms: u32,
    off_duration_ms: u32,
    last_toggle_time_ms: u32,
    led_on: bool,
}

impl BlinkController {
    pub fn new(on_duration_ms: u32, off_duration_ms: u32) -> Self {
        Self {
            on_duration_ms,
            off_duration_ms,
            last_toggle_time_ms: 0,
            led_on: false,
        }
    }

    /// Advance the state machine to `current_time_ms` and return the LED
    /// state. Toggles once the time since the last toggle reaches the
    /// active duration. A zero duration toggles on every call.
    pub fn update(&mut self, current_time_ms: u32) -> bool {
        // wrapping_sub measures the span on the 2^32 ring, so a timestamp
        // that wrapped past zero still yields the correct elapsed time
        let elapsed = current_time_ms.wrapping_sub(self.last_toggle_time_ms);

        let target_duration = if self.led_on {
            self.on_duration_ms
        } else {
            self.off_duration_ms
        };

        if elapsed >= target_duration {
            self.led_on = !self.led_on;
            self.last_toggle_time_ms = current_time_ms;
            info!("LED toggled {} at {}ms", self.led_on, current_time_ms);
        }

        self.led_on
    }

    pub fn reset(&mut self) {
        self.last_toggle_time_ms = 0;
        self.led_on = false;
    }

    pub fn on_duration_ms(&self) -> u32 {
        self.on_duration_ms
    }

    pub fn off_duration_ms(&self) -> u32 {
        self.off_duration_ms
    }

    pub fn is_on(&self) -> bool {
        self.led_on
    }

    pub fn last_toggle_time_ms(&self) -> u32 {
        self.last_toggle_time_ms
    }
}

/// Couples a controller to an injected clock and pin. `tick` writes the
/// pin on every call, not only on transitions.
pub struct BlinkDriver<C: TimeSource, P: LedPin> {
    controller: BlinkController,
    clock: C,
    pin: P,
}

impl<C: TimeSource, P: LedPin> BlinkDriver<C, P> {
    pub fn new(clock: C, pin: P, on_duration_ms: u32, off_duration_ms: u32) -> Self {
        Self {
            controller: BlinkController::new(on_duration_ms, off_duration_ms),
            clock,
            pin,
        }
    }

    pub fn tick(&mut self) -> bool {
        let is_on = self.controller.update(self.clock.now_ms());
        self.pin.set(is_on);
        is_on
    }

    /// Back to the initial state, with the pin driven low.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.pin.set(false);
    }

    pub fn controller(&self) -> &BlinkController {
        &self.controller
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
