//! Shared Tracker Example
//!
//! Several threads poll one cycle counter through a shared tracker. Each tick
//! is reported to exactly one of them.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;

use tickwrap::prelude::*;

fn main() {
    let cycles = Arc::new(AtomicU32::new(u32::MAX - 5_000));
    let tracker = Arc::new(AtomicElapsedTracker::<DwtCycles168MHz>::new(TickSample::new(
        cycles.load(Ordering::SeqCst),
    )));

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let cycles = Arc::clone(&cycles);
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || {
                let mut seen = 0u64;
                for _ in 0..1_000 {
                    let now = cycles.fetch_add(3, Ordering::SeqCst).wrapping_add(3);
                    seen += u64::from(tracker.poll(TickSample::new(now)));
                }
                println!("worker {worker} saw {seen} cycles");
                seen
            })
        })
        .collect();

    let mut total: u64 = handles
        .into_iter()
        .map(|handle| handle.join().unwrap_or(0))
        .sum();
    total += u64::from(tracker.poll(TickSample::new(cycles.load(Ordering::SeqCst))));

    println!("total: {total} cycles (expected 12000)");
}
