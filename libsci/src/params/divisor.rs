// libsci/src/params/divisor.rs
//! DM7025 PLL divisor table.
//!
//! The DM7025 derives the card clock from its PLL through `fs`. Only the
//! 1 MHz class entry (`fs = 16`) is picked automatically; the rest of the
//! table is exposed for callers that want a faster card clock.

/// (`fs`, card clock in kHz)
pub const DM7025_DIVISORS: [(u32, u32); 11] = [
    (6, 5188),
    (7, 4611),
    (8, 3953),
    (9, 3609),
    (10, 3192),
    (11, 2965),
    (12, 2677),
    (13, 2441),
    (14, 2306),
    (15, 2128),
    (16, 1977),
];

/// Card clock in kHz produced by divisor `fs`, if the table has it.
pub fn card_khz_for_divisor(fs: u32) -> Option<u32> {
    DM7025_DIVISORS
        .iter()
        .find(|(d, _)| *d == fs)
        .map(|(_, khz)| *khz)
}

/// Pick the fastest table entry whose clock does not exceed `max_khz`.
pub fn divisor_for_card_khz(max_khz: u32) -> Option<u32> {
    DM7025_DIVISORS
        .iter()
        .find(|(_, khz)| *khz <= max_khz)
        .map(|(d, _)| *d)
}
