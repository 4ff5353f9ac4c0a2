//! Streaming batch encoder over CSV input.
//!
//! Reads payment records row by row, encodes each valid record, and writes
//! the derived strings back out as CSV. Rows that fail input validation are
//! logged at warn level and skipped; they never reach the codec.

use crate::error::Result;
use crate::record::{EncodedRecord, RecordRow};
use crate::{pix, slip};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// The batch encoding engine.
///
/// Collects encoded records in input order. Each instance owns its output;
/// the codec functions underneath it are pure and shareable.
pub struct SlipEngine {
    /// Encoded records in input order.
    encoded: Vec<EncodedRecord>,
}

impl SlipEngine {
    /// Creates a new empty engine.
    pub fn new() -> Self {
        SlipEngine {
            encoded: Vec::new(),
        }
    }

    /// Processes records from a CSV reader in streaming fashion.
    ///
    /// Records are read one at a time to minimize memory usage.
    /// Invalid records are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<RecordRow>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(row) => match row.parse() {
                    Some(record) => match record.encode() {
                        Ok(encoded) => {
                            debug!(
                                "Row {}: encoded slip {} (pix key: {:?})",
                                row_num,
                                encoded.slip_code,
                                pix::classify_key(&encoded.record.pix_key)
                            );
                            self.encoded.push(encoded);
                        }
                        Err(e) => warn!("Row {}: {}", row_num, e),
                    },
                    None => warn!("Row {}: Failed to parse payment record", row_num),
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Writes the derived strings to CSV, one row per encoded record, in
    /// input order.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["slip_number", "slip_code", "slip_code_display", "pix_payload"])?;

        for encoded in &self.encoded {
            let display = slip::format_for_display(&encoded.slip_code);
            csv_writer.write_record([
                encoded.record.slip_number.as_str(),
                encoded.slip_code.as_str(),
                display.as_str(),
                encoded.pix_payload.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Returns the encoded records (for testing).
    #[cfg(test)]
    pub fn encoded_records(&self) -> &[EncodedRecord] {
        &self.encoded
    }
}

impl Default for SlipEngine {
    fn default() -> Self {
        Self::new()
    }
}
