//! # Slip Codec
//!
//! Encoders and validators for Brazilian payment-slip artifacts: the
//! 44-digit FEBRABAN barcode digit string with its weighted modulo-11 check
//! digit, and the EMV TLV PIX payload with its CRC16 trailer.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts carry exactly 2 decimal places via `rust_decimal`
//! - **Pure encoders**: both derived strings are deterministic functions of the record
//! - **Total validators**: malformed input yields `false`, never a panic
//! - **Streaming batch surface**: memory-efficient CSV processing
//!
//! ## Example
//!
//! ```no_run
//! use slip_codec::SlipEngine;
//! use std::io::Cursor;
//!
//! let csv = "owner_name,owner_document,address,pix_key,amount,description,due_date,slip_number\n\
//!            JOAO SILVA,12345678901,Rua A - Campo Grande/MS,12345678901,100.50,Taxa,2024-01-15,1234567890\n";
//! let mut engine = SlipEngine::new();
//! engine.process_csv(Cursor::new(csv)).unwrap();
//! engine.write_output(std::io::stdout()).unwrap();
//! ```

pub mod checksum;
pub mod engine;
pub mod error;
pub mod money;
pub mod pix;
pub mod record;
pub mod slip;
pub mod validate;

pub use engine::SlipEngine;
pub use error::{CodecError, Result};
pub use money::Money2;
pub use pix::{classify_key, encode_pix_payload, PixKeyKind};
pub use record::{EncodedRecord, PaymentRecord, RecordRow};
pub use slip::{encode_slip_code, format_for_display};
pub use validate::{validate_crc, validate_slip_checksum};
