//! Line and column lookup for byte offsets.
//!
//! For repeated lookups on the same source, use [`LineOffsetTable`], which
//! pre-computes line starts for O(log L) lookup instead of O(n) scanning.

/// Pre-computed line offset table for efficient line/column lookup.
///
/// # Example
///
/// ```
/// use we_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start. `offsets[0] == 0`.
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    /// Build a line offset table from source text.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(i + 1);
            }
        }
        LineOffsetTable { offsets }
    }

    /// Get the 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: usize) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        saturating_u32(line_idx) + 1
    }

    /// Get 1-based (line, column) from a byte offset.
    ///
    /// The column counts characters (not bytes) from the start of the line.
    /// Offsets past the end of the source clamp to the end.
    pub fn offset_to_line_col(&self, source: &str, offset: usize) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0);

        let end = offset.min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(end - line_start, |text| text.chars().count());

        (line, saturating_u32(col) + 1)
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX - 1)
}
