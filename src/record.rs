//! Payment record models for CSV parsing and encoding.

use crate::error::{CodecError, Result};
use crate::money::Money2;
use crate::{pix, slip};
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;

/// Raw payment record as read from CSV.
///
/// All fields arrive as text. Validation of the raw values happens in
/// [`RecordRow::parse`]; the encoders below it only ever see records whose
/// amount and date already parsed.
#[derive(Debug, Deserialize)]
pub struct RecordRow {
    /// Slip owner's full name
    pub owner_name: String,

    /// National id document; digits plus punctuation accepted
    pub owner_document: String,

    /// Free-form address; only used to extract a city token
    pub address: String,

    /// PIX key: email, phone, CPF, CNPJ, or random key
    pub pix_key: String,

    /// Amount as decimal text, e.g. "100.50"
    pub amount: String,

    /// Free text shown on the slip; never encoded
    pub description: String,

    /// Due date in ISO format, e.g. "2024-01-15"
    pub due_date: String,

    /// Slip reference number; numeric content used (up to 10 digits)
    pub slip_number: String,
}

impl RecordRow {
    /// Parses the raw CSV row into a validated record.
    ///
    /// Returns `None` when the owner name is blank, the amount is
    /// unparseable or not positive, or the due date is not a valid ISO
    /// date.
    pub fn parse(&self) -> Option<PaymentRecord> {
        let owner_name = self.owner_name.trim();
        if owner_name.is_empty() {
            return None;
        }

        let amount = Money2::from_str(self.amount.trim()).ok()?;
        if !amount.is_positive() {
            return None;
        }

        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").ok()?;

        Some(PaymentRecord {
            owner_name: owner_name.to_string(),
            owner_document: self.owner_document.trim().to_string(),
            address: self.address.trim().to_string(),
            pix_key: self.pix_key.trim().to_string(),
            amount,
            description: self.description.trim().to_string(),
            due_date,
            slip_number: self.slip_number.trim().to_string(),
        })
    }
}

/// An immutable payment record, ready for encoding.
///
/// Both derived strings are pure functions of these fields: encoding the
/// same record twice always reproduces byte-identical output.
#[derive(Debug, Clone)]
pub struct PaymentRecord {
    /// Slip owner's full name
    pub owner_name: String,

    /// National id document; only its digit content is encoded
    pub owner_document: String,

    /// Free-form address; only used to extract a city token
    pub address: String,

    /// PIX key, carried into the payload verbatim
    pub pix_key: String,

    /// Amount with 2 decimal places; must be positive to encode
    pub amount: Money2,

    /// Display-only text; encoded into neither output
    pub description: String,

    /// Due date; drives the 4-digit due factor
    pub due_date: NaiveDate,

    /// Slip reference number
    pub slip_number: String,
}

impl PaymentRecord {
    /// Encodes this record, producing a filled-in copy carrying both
    /// derived strings.
    ///
    /// Fails only when the amount is zero or negative; every record with a
    /// positive amount encodes exactly one way.
    pub fn encode(&self) -> Result<EncodedRecord> {
        if !self.amount.is_positive() {
            return Err(CodecError::NonPositiveAmount {
                amount: self.amount,
            });
        }

        Ok(EncodedRecord {
            slip_code: slip::encode_slip_code(self),
            pix_payload: pix::encode_pix_payload(self),
            record: self.clone(),
        })
    }
}

/// A payment record together with its derived encodings.
///
/// Read-only for all downstream consumers; renderers take the two strings
/// and never touch the record again.
#[derive(Debug, Clone)]
pub struct EncodedRecord {
    /// The source record
    pub record: PaymentRecord,

    /// 44-digit barcode digit string
    pub slip_code: String,

    /// EMV TLV payload terminated by the CRC16 trailer
    pub pix_payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_crc, validate_slip_checksum};

    fn sample_row() -> RecordRow {
        RecordRow {
            owner_name: "JOAO SILVA".to_string(),
            owner_document: "123.456.789-01".to_string(),
            address: "Rua Teste, 123 - Centro - Campo Grande/MS".to_string(),
            pix_key: "12345678901".to_string(),
            amount: "100.50".to_string(),
            description: "Taxa".to_string(),
            due_date: "2024-01-15".to_string(),
            slip_number: "1234567890".to_string(),
        }
    }

    #[test]
    fn test_parse_valid_row() {
        let record = sample_row().parse().unwrap();
        assert_eq!(record.owner_name, "JOAO SILVA");
        assert_eq!(record.amount.to_string(), "100.50");
        assert_eq!(record.due_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_rejects_blank_owner_name() {
        let mut row = sample_row();
        row.owner_name = "   ".to_string();
        assert!(row.parse().is_none());
    }

    #[test]
    fn test_parse_rejects_non_positive_amount() {
        let mut row = sample_row();
        row.amount = "0.00".to_string();
        assert!(row.parse().is_none());

        row.amount = "-5.00".to_string();
        assert!(row.parse().is_none());
    }

    #[test]
    fn test_parse_rejects_bad_amount_text() {
        let mut row = sample_row();
        row.amount = "cem reais".to_string();
        assert!(row.parse().is_none());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let mut row = sample_row();
        row.due_date = "15/01/2024".to_string();
        assert!(row.parse().is_none());
    }

    #[test]
    fn test_encode_fills_both_outputs() {
        let encoded = sample_row().parse().unwrap().encode().unwrap();
        assert_eq!(encoded.slip_code.len(), 44);
        assert!(validate_slip_checksum(&encoded.slip_code));
        assert!(validate_crc(&encoded.pix_payload));
    }

    #[test]
    fn test_encode_rejects_non_positive_amount() {
        let mut record = sample_row().parse().unwrap();
        record.amount = Money2::ZERO;

        match record.encode() {
            Err(CodecError::NonPositiveAmount { .. }) => {}
            other => panic!("Expected NonPositiveAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_is_deterministic() {
        let record = sample_row().parse().unwrap();
        let first = record.encode().unwrap();
        let second = record.encode().unwrap();

        assert_eq!(first.slip_code, second.slip_code);
        assert_eq!(first.pix_payload, second.pix_payload);
    }
}
