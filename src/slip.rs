//! 44-digit FEBRABAN slip code encoding.
//!
//! Layout, left to right: bank (3) + currency (1) + check digit (1) +
//! due factor (4) + amount (10) + free field (25). The check digit covers
//! the other 43 digits and sits at absolute position 4.

use crate::checksum::mod11_check_digit;
use crate::record::PaymentRecord;
use chrono::NaiveDate;

/// Issuing bank segment.
const BANK_CODE: &str = "001";

/// Currency segment (9 = real).
const CURRENCY_CODE: &str = "9";

/// Installment marker inside the free field.
const INSTALLMENT_MARKER: &str = "00001";

/// The date the due factor counts from.
fn base_date() -> NaiveDate {
    // 1997-10-07 is always a valid calendar date
    NaiveDate::from_ymd_opt(1997, 10, 7).expect("valid base date")
}

/// Builds the 44-digit slip code for a record.
pub fn encode_slip_code(record: &PaymentRecord) -> String {
    let due_factor = due_date_factor(record.due_date);
    let amount_field = format!("{:010}", record.amount.cents());
    let free_field = free_field(record);

    let body = format!(
        "{}{}{}{}{}",
        BANK_CODE, CURRENCY_CODE, due_factor, amount_field, free_field
    );
    let check_digit = mod11_check_digit(&body);

    format!(
        "{}{}{}{}{}{}",
        BANK_CODE, CURRENCY_CODE, check_digit, due_factor, amount_field, free_field
    )
}

/// Day count from the base date, wrapped into the 4-digit cyclic range.
///
/// The field is inherently cyclic: dates before the base date and dates
/// more than 10000 days past it both wrap into 0..=9999.
fn due_date_factor(due_date: NaiveDate) -> String {
    let days = (due_date - base_date()).num_days();
    format!("{:04}", days.rem_euclid(10_000))
}

/// Builds the 25-digit free field: slip number (10) + installment
/// marker (5) + owner document (10).
fn free_field(record: &PaymentRecord) -> String {
    format!(
        "{}{}{}",
        pad_digits(&record.slip_number),
        INSTALLMENT_MARKER,
        pad_digits(&record.owner_document),
    )
}

/// Keeps only the ASCII digits of `text`, truncated to the first 10 or
/// right-padded with '0' to exactly 10.
fn pad_digits(text: &str) -> String {
    let mut digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.truncate(10);
    while digits.len() < 10 {
        digits.push('0');
    }
    digits
}

/// Groups a 44-digit code for display as
/// `AAAAA.AAAAA BBBBB.BBBBBB CCCCC.CCCCCC D EEEEEEEEEEEEEEE`.
///
/// Defined only for exactly-44-digit input; anything else is returned
/// unchanged.
pub fn format_for_display(code: &str) -> String {
    if code.len() != 44 || !code.chars().all(|c| c.is_ascii_digit()) {
        return code.to_string();
    }

    format!(
        "{}.{} {}.{} {}.{} {} {}",
        &code[..5],
        &code[5..10],
        &code[10..15],
        &code[15..21],
        &code[21..26],
        &code[26..32],
        &code[32..33],
        &code[33..],
    )
}
