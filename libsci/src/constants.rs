// libsci/src/constants.rs
//! Common protocol and reader constants used across the crate

/// Largest ATR the SCI driver buffers, TS included
pub const MAX_ATR_SIZE: usize = 33;

/// Base ATR character timeout. Nominal readers count in milliseconds,
/// PLL readers in microseconds (see `utils::atr_read_timeout`).
pub const ATR_TIMEOUT: u32 = 800;

/// TS for the direct convention
pub const TS_DIRECT: u8 = 0x3B;

/// TS for the inverse convention, as decoded by an ISO UART
pub const TS_INVERSE: u8 = 0x3F;

/// Raw TS value the SCI line reports for an inverse convention card
pub const TS_INVERSE_RAW: u8 = 0x03;

/// TS as stored after complementing `TS_INVERSE_RAW`
pub const TS_INVERSE_STORED: u8 = !TS_INVERSE_RAW;

/// TAi present in T0 / TDi
pub const TA_PRESENT: u8 = 0x10;
/// TBi present
pub const TB_PRESENT: u8 = 0x20;
/// TCi present
pub const TC_PRESENT: u8 = 0x40;
/// TDi present, the chain continues
pub const TD_PRESENT: u8 = 0x80;

/// Low nibble of T0 (historical byte count) and of TDi (protocol type)
pub const LOW_NIBBLE: u8 = 0x0F;

/// Maximum number of interface byte groups in an ATR
pub const MAX_PROTOCOL_GROUPS: usize = 7;

/// Clock classes above this value are PLL readers that express the clock
/// in hundredths of a MHz.
pub const PLL_CLOCK_THRESHOLD: u32 = 2000;

/// Clock class reported by the DM7025 PLL reader
pub const DM7025_CLOCK: u32 = 8300;

/// ETU (clock cycles per bit) for every reader class
pub const DEFAULT_ETU: u32 = 372;
/// Extra guard time on nominal readers
pub const DEFAULT_EGT: u32 = 3;
/// Clock divisor on nominal readers
pub const DEFAULT_FS: u32 = 5;
/// Extra guard time on PLL readers
pub const PLL_EGT: u32 = 0;
/// DM7025 divisor table entry for a 1 MHz card clock
pub const DM7025_FS: u32 = 16;

/// Irdeto S02 cards on some SCI drivers report a bogus TS; their ATR
/// carries this tag.
pub const IRDETO_TAG: &[u8; 6] = b"IRDETO";
/// Position of `IRDETO_TAG` in the ATR
pub const IRDETO_TAG_OFFSET: usize = 4;
