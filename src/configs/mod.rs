//! Configuration presets module
//!
//! This module provides pre-defined tick configurations for common timer
//! peripherals.

use crate::counter::NarrowCounter;
use crate::timing::define_tick_config;

// General purpose timers
define_tick_config! {
    name: Micros32,
    counter: u32,
    frequency_hz: 1_000_000,  // wraps after ~71.6 minutes
    label: "32-bit timer @ 1 MHz",
}

define_tick_config! {
    name: Timer16Micros,
    counter: u16,
    frequency_hz: 1_000_000,  // wraps after 65.536 ms
    label: "16-bit timer @ 1 MHz",
}

// Software tick counters
define_tick_config! {
    name: Millis32,
    counter: u32,
    frequency_hz: 1_000,  // wraps after ~49.7 days
    label: "32-bit millisecond counter",
}

// Low power real-time counters
define_tick_config! {
    name: Rtc24,
    counter: NarrowCounter<24>,
    frequency_hz: 32_768,  // wraps after 512 s
    label: "24-bit RTC @ 32.768 kHz",
}

// Cycle counters
define_tick_config! {
    name: DwtCycles168MHz,
    counter: u32,
    frequency_hz: 168_000_000,  // wraps after ~25.6 s
    label: "DWT CYCCNT @ 168 MHz",
}
