//! Polling Loop Example
//!
//! A control loop polls a 16-bit 1 MHz timer that wraps every 65.536 ms and
//! keeps a non-wrapping uptime from it.

use core::cell::Cell;
use core::time::Duration;

use tickwrap::prelude::*;

/// Stand-in for a hardware timer register
struct Timer16 {
    register: Cell<u16>,
}

impl TickSource for Timer16 {
    type Config = Timer16Micros;

    fn sample(&self) -> TickSample<Timer16Micros> {
        TickSample::new(self.register.get())
    }
}

fn main() -> Result<(), TickError> {
    let loop_period = Duration::from_millis(20);
    TickValidator::check_poll_interval::<Timer16Micros>(loop_period)?;

    let timer = Timer16 {
        register: Cell::new(60_000),
    };
    let mut uptime = ElapsedTracker::<Timer16Micros>::new();
    uptime.poll_source(&timer);

    for iteration in 1..=10 {
        // Pretend the loop body took 20 ms
        let ticks = loop_period.as_micros() as u16;
        timer.register.set(timer.register.get().wrapping_add(ticks));

        let delta = uptime.poll_source(&timer);
        println!(
            "iteration {iteration:2}: register={:5} delta={delta} uptime={:?}",
            timer.register.get(),
            uptime.total_duration()?
        );
    }

    Ok(())
}
