// fixtures.rs: ATRs of cards commonly seen in SCI readers

pub fn decode(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

/// Irdeto T=14: TA1 TD1, 15 historical bytes, no TCK read
pub fn irdeto_atr() -> Vec<u8> {
    decode("3b 9f 21 0e 49 52 44 45 54 4f 20 41 43 53 20 56 32 2e 32")
}

/// T=0 card with TB1 and four historical bytes
pub fn conax_atr() -> Vec<u8> {
    decode("3b 24 00 30 42 30 30")
}

/// Two interface groups (TA1 TB1 TC1 TD1, TC2), T=0, 7 historical bytes
pub fn two_group_atr() -> Vec<u8> {
    decode("3b f7 11 00 01 40 96 54 30 04 0e 6c b6 d6")
}

/// T=1 card with a correct TCK trailing the historical byte
pub fn t1_atr_with_tck() -> Vec<u8> {
    decode("3b 81 01 42 c2")
}
