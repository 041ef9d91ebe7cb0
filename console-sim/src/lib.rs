//! Host-side stand-ins for the blink hardware seams: a console "LED pin"
//! that renders its state as a colored terminal line, and a wall-clock
//! time source. Rendering is kept separate from I/O so it can be tested
//! without capturing stdout.

use std::time::Instant;

use blink::{LedPin, TimeSource};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Render one status line: `[1234ms] LED: ███ ON ███` (green when on,
/// red when off).
pub fn format_output(timestamp_ms: u32, on: bool) -> String {
    if on {
        format!("[{timestamp_ms}ms] LED: {GREEN}███ ON ███{RESET}")
    } else {
        format!("[{timestamp_ms}ms] LED: {RED}▓▓▓ OFF ▓▓▓{RESET}")
    }
}

/// Remove `ESC[...m` sequences so tests can assert on the plain text.
pub fn strip_ansi_codes(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut in_escape = false;

    for c in input.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            result.push(c);
        }
    }

    result
}

/// LED pin that renders every state change as a console line. The last
/// rendered line is retrievable, so nothing here needs to print.
pub struct ConsoleLedPin {
    state: bool,
    start: Instant,
    last_output: String,
}

impl ConsoleLedPin {
    pub fn new() -> Self {
        ConsoleLedPin {
            state: false,
            start: Instant::now(),
            last_output: String::new(),
        }
    }

    pub fn state(&self) -> bool {
        self.state
    }

    pub fn last_output(&self) -> &str {
        &self.last_output
    }

    /// Milliseconds since creation or the last `reset_time`.
    pub fn timestamp_ms(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    pub fn reset_time(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for ConsoleLedPin {
    fn default() -> Self {
        Self::new()
    }
}

impl LedPin for ConsoleLedPin {
    fn set(&mut self, on: bool) {
        self.state = on;
        self.last_output = format_output(self.timestamp_ms(), on);
    }
}

/// Time source backed by `std::time::Instant`. Monotonic; `reset` starts
/// it over from zero.
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        WallClock {
            start: Instant::now(),
        }
    }

    pub fn millis(&self) -> u32 {
        self.start.elapsed().as_millis() as u32
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn now_ms(&self) -> u32 {
        self.millis()
    }
}

#[cfg(test)]
mod test;
