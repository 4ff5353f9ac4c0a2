//! Standalone checksum validators.
//!
//! Independent re-derivations of the two checksums, usable to audit encoder
//! output or to screen deliberately corrupted input. Malformed input is
//! reported as `false`, never as an error; both functions are total and
//! never panic.

use crate::checksum::{crc16_ccitt, mod11_check_digit};

/// Recomputes and compares the modulo-11 check digit of a 44-digit slip
/// code.
///
/// Anything that is not exactly 44 ASCII digits fails. Otherwise the digit
/// at position 4 is removed, the checksum is recomputed over the remaining
/// 43-digit body, and the two are compared.
pub fn validate_slip_checksum(code: &str) -> bool {
    if code.len() != 44 || !code.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let embedded = u32::from(code.as_bytes()[4] - b'0');
    let body = format!("{}{}", &code[..4], &code[5..]);

    mod11_check_digit(&body) == embedded
}

/// Recomputes and compares the CRC16 trailer of a TLV payload.
///
/// The trailer is the 4 characters after the last `6304` marker. The CRC is
/// recomputed over everything up to and including that marker and compared
/// case-insensitively, so lowercase hex trailers also verify.
pub fn validate_crc(payload: &str) -> bool {
    if payload.len() < 8 {
        return false;
    }

    let marker = match payload.rfind("6304") {
        Some(idx) => idx,
        None => return false,
    };

    let embedded = match payload.get(marker + 4..marker + 8) {
        Some(trailer) => trailer,
        None => return false,
    };

    let expected = crc16_ccitt(&payload[..marker + 4]);
    embedded.eq_ignore_ascii_case(&expected)
}
