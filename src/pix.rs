//! EMV TLV payload encoding for PIX transfers.
//!
//! Every field is emitted as a 2-digit tag, a 2-digit character count, and
//! the value itself. The payload closes with tag 63: the CRC16 of
//! everything before it, the trailer's own tag and length included in the
//! hashed text.

use crate::checksum::crc16_ccitt;
use crate::record::PaymentRecord;

/// Fixed GUI for the merchant account information template.
const PIX_GUI: &str = "br.gov.bcb.pix";

/// Merchant name substitute when sanitizing leaves nothing.
const DEFAULT_MERCHANT_NAME: &str = "PROPRIETARIO";

/// City substitute when the address yields no usable token.
const DEFAULT_MERCHANT_CITY: &str = "CAMPO GRANDE";

/// Builds the complete TLV payload for a record, CRC trailer included.
pub fn encode_pix_payload(record: &PaymentRecord) -> String {
    let mut payload = String::new();

    // Payload format indicator, then the static point-of-sale method.
    payload.push_str(&tlv("00", "01"));
    payload.push_str(&tlv("01", "12"));

    payload.push_str(&merchant_account_info(&record.pix_key));

    // Merchant category (unused) and the BRL numeric currency code.
    payload.push_str(&tlv("52", "0000"));
    payload.push_str(&tlv("53", "986"));

    payload.push_str(&tlv("54", &record.amount.to_string()));
    payload.push_str(&tlv("58", "BR"));
    payload.push_str(&tlv("59", &merchant_name(&record.owner_name)));
    payload.push_str(&tlv("60", &merchant_city(&record.address)));

    payload.push_str(&additional_data(&record.slip_number));

    // The trailer's tag and length take part in the hash.
    payload.push_str("6304");
    let crc = crc16_ccitt(&payload);
    payload.push_str(&crc);

    payload
}

/// Formats one TLV field: 2-digit tag + 2-digit character count + value.
fn tlv(tag: &str, value: &str) -> String {
    format!("{}{:02}{}", tag, value.chars().count(), value)
}

/// Nested tag 26: the PIX GUI plus the key, verbatim.
fn merchant_account_info(pix_key: &str) -> String {
    let nested = format!("{}{}", tlv("00", PIX_GUI), tlv("01", pix_key));
    tlv("26", &nested)
}

/// Uppercases, strips everything outside `[A-Z0-9 ]`, trims, and caps at
/// 25 characters. A blank result falls back to the fixed placeholder.
fn merchant_name(owner_name: &str) -> String {
    let sanitized = sanitize(owner_name, 25);
    if sanitized.is_empty() {
        DEFAULT_MERCHANT_NAME.to_string()
    } else {
        sanitized
    }
}

/// Extracts the city token from a free-form address.
///
/// The tail after the last `-` is taken as the city, cut at `/` when a
/// state suffix follows. Addresses without a `-`-separated tail fall back
/// to the default city.
fn merchant_city(address: &str) -> String {
    if address.trim().is_empty() {
        return DEFAULT_MERCHANT_CITY.to_string();
    }

    let parts: Vec<&str> = address.split('-').collect();
    if parts.len() < 2 {
        return DEFAULT_MERCHANT_CITY.to_string();
    }

    let mut city = parts[parts.len() - 1].trim();
    if let Some(idx) = city.find('/') {
        city = city[..idx].trim();
    }

    let sanitized = sanitize(city, 15);
    if sanitized.is_empty() {
        DEFAULT_MERCHANT_CITY.to_string()
    } else {
        sanitized
    }
}

/// Optional tag 62: emitted only when the slip number is non-blank,
/// wrapping a nested tag 05 reference truncated to 25 characters.
fn additional_data(slip_number: &str) -> String {
    if slip_number.trim().is_empty() {
        return String::new();
    }

    let reference: String = slip_number.chars().take(25).collect();
    tlv("62", &tlv("05", &reference))
}

/// Uppercase, `[A-Z0-9 ]` only, trimmed, truncated to `max` characters.
fn sanitize(text: &str, max: usize) -> String {
    let upper = text.to_uppercase();
    let kept: String = upper
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    let mut trimmed = kept.trim().to_string();
    trimmed.truncate(max);
    trimmed
}

/// Recognized PIX key shapes.
///
/// Classification is informational only; the encoder accepts any key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixKeyKind {
    /// Email address
    Email,

    /// Brazilian phone number with the +55 country prefix
    Phone,

    /// 11-digit CPF
    Cpf,

    /// 14-digit CNPJ
    Cnpj,

    /// Randomly assigned key in 8-4-4-4-12 hex-group form
    Random,

    /// Anything else; still accepted for encoding
    Opaque,
}

/// Classifies a PIX key by shape. Returns `None` for a blank key.
pub fn classify_key(pix_key: &str) -> Option<PixKeyKind> {
    let key = pix_key.trim();
    if key.is_empty() {
        return None;
    }

    if key.contains('@') {
        return Some(PixKeyKind::Email);
    }

    if let Some(digits) = key.strip_prefix("+55") {
        if (10..=11).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
            return Some(PixKeyKind::Phone);
        }
    }

    if key.chars().all(|c| c.is_ascii_digit()) {
        return match key.len() {
            11 => Some(PixKeyKind::Cpf),
            14 => Some(PixKeyKind::Cnpj),
            _ => Some(PixKeyKind::Opaque),
        };
    }

    if is_random_key(key) {
        return Some(PixKeyKind::Random);
    }

    Some(PixKeyKind::Opaque)
}

/// 8-4-4-4-12 hexadecimal groups separated by dashes.
fn is_random_key(key: &str) -> bool {
    let groups: Vec<&str> = key.split('-').collect();
    let lens = [8, 4, 4, 4, 12];

    groups.len() == lens.len()
        && groups
            .iter()
            .zip(lens)
            .all(|(group, len)| group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit()))
}
