//! Elapsed Time Example
//!
//! Measure elapsed microseconds on a free-running 32-bit 1 MHz timer,
//! including a sample pair taken across the counter overflow.

use tickwrap::prelude::*;

fn main() -> Result<(), TickError> {
    // Samples taken without a wrap in between
    let before = TickSample::<Micros32>::new(1_000);
    let after = TickSample::<Micros32>::new(251_000);
    println!(
        "{} -> {}: {} ticks, {:?}",
        before.raw(),
        after.raw(),
        after.elapsed_since(before),
        after.duration_since(before)?
    );

    // The timer overflowed between these two samples
    let before = TickSample::<Micros32>::new(u32::MAX - 499);
    let after = TickSample::<Micros32>::new(1_500);
    println!(
        "{} -> {}: {} ticks, {:?}",
        before.raw(),
        after.raw(),
        after.elapsed_since(before),
        after.duration_since(before)?
    );

    // Plain integers work too
    println!("elapsed(50, 100) = {}", elapsed_u32(50, 100));
    println!("wrap period: {:?}", Micros32::wrap_period()?);

    Ok(())
}
