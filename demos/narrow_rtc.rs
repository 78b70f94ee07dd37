//! Narrow Counter Example
//!
//! A 24-bit real-time counter at 32.768 kHz wraps every 512 s. Native 32-bit
//! subtraction would wrap at the wrong modulus; NarrowCounter masks to 24 bits.

use tickwrap::prelude::*;

fn main() -> Result<(), TickError> {
    let before = TickSample::<Rtc24>::new(NarrowCounter::new(0x00FF_C000)?);
    let after = TickSample::<Rtc24>::new(NarrowCounter::new(0x0000_4000)?);

    let wrong = (0x0000_4000u32).wrapping_sub(0x00FF_C000);
    println!("32-bit subtraction: {wrong} ticks");
    println!(
        "24-bit distance:    {} ticks ({:?})",
        after.elapsed_since(before).get(),
        after.duration_since(before)?
    );

    // Width only known at runtime, e.g. read from a device descriptor
    let bits = 24;
    println!(
        "elapsed_bits:       {} ticks",
        elapsed_bits(0x0000_4000, 0x00FF_C000, bits)?
    );

    // Register values with garbage in the upper byte
    match NarrowCounter::<24>::new(0xAB00_4000) {
        Ok(_) => println!("unexpected: accepted oversized sample"),
        Err(error) => println!("rejected: {error}"),
    }
    println!(
        "truncated: {:#x}",
        NarrowCounter::<24>::truncate(0xAB00_4000).get()
    );

    Ok(())
}
