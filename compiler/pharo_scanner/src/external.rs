//! Host invocation protocol for external scanners.
//!
//! A grammar-driven parser calls an external scanner through five entry
//! points: create, destroy, serialize, deserialize, and scan. The parser
//! decides when to call `scan` and what to do with its answer; the
//! scanner only reports whether one of its tokens starts at the cursor.
//!
//! Serialization exists so the parser can snapshot scanner state between
//! tokens (for incremental reparsing). [`KeywordScanner`] keeps no state
//! between scans, so its snapshot is always empty.

use pharo_lexer_core::Cursor;

use crate::{KeywordScanner, ScanError, ScanResult, ValidSymbols};

/// Largest snapshot a host buffer is required to hold.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Entry points a host parser uses to drive an external scanner.
pub trait ExternalScanner: Sized {
    /// Create the scanner's state.
    fn create() -> Self;

    /// Release the scanner's state.
    fn destroy(self) {}

    /// Write a state snapshot into `buffer`, returning the bytes written.
    ///
    /// Never writes more than [`SERIALIZATION_BUFFER_SIZE`] bytes.
    fn serialize(&self, buffer: &mut [u8]) -> usize;

    /// Restore state from a snapshot produced by [`serialize`](Self::serialize).
    fn deserialize(&mut self, snapshot: &[u8]);

    /// Try to recognize one external token at the cursor.
    fn scan(&mut self, cursor: &mut Cursor<'_>, valid: ValidSymbols) -> ScanResult;

    /// [`scan`](Self::scan) with the host's raw boolean valid-symbol table.
    fn scan_raw(
        &mut self,
        cursor: &mut Cursor<'_>,
        valid_symbols: &[bool],
    ) -> Result<ScanResult, ScanError> {
        let valid = ValidSymbols::from_flags(valid_symbols)?;
        Ok(self.scan(cursor, valid))
    }
}

impl ExternalScanner for KeywordScanner {
    fn create() -> Self {
        KeywordScanner::default()
    }

    fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    fn deserialize(&mut self, snapshot: &[u8]) {
        if !snapshot.is_empty() {
            tracing::trace!(
                len = snapshot.len(),
                "ignoring non-empty keyword scanner snapshot",
            );
        }
    }

    #[inline]
    fn scan(&mut self, cursor: &mut Cursor<'_>, valid: ValidSymbols) -> ScanResult {
        self.scan_keyword(cursor, valid)
    }
}
