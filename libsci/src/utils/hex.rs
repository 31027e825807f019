//! Hex formatting for ATR and parameter diagnostics.

use std::fmt::Write;

/// Format bytes as lowercase hex pairs separated by single spaces, the
/// form ATRs are usually quoted in.
///
/// Example: `&[0x3b, 0x9f]` -> `"3b 9f"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}
