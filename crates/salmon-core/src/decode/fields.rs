use crate::catalog::{CatalogKind, Catalogs, Code};

use super::DecodeReport;

/// Convert a hazard percentage to the tenths scale used by [`crate::Shift`].
///
/// Rounds half away from zero; negative and non-finite inputs give 0.
pub fn hazard_tenths(percent: f64) -> u32 {
    if !percent.is_finite() || percent <= 0.0 {
        return 0;
    }
    // `as` saturates for values beyond u32::MAX
    (percent * 10.0).round() as u32
}

/// One row split into its comma-separated columns.
///
/// The split happens once; every accessor reads from the same token list.
pub(crate) struct RowFields<'r, 'c> {
    tokens: Vec<&'r str>,
    catalogs: &'c Catalogs,
    report: &'c mut DecodeReport,
}

impl<'r, 'c> RowFields<'r, 'c> {
    pub(crate) fn new(row: &'r str, catalogs: &'c Catalogs, report: &'c mut DecodeReport) -> Self {
        let row = row.trim_end_matches(['\r', '\n']);
        Self {
            tokens: row.split(',').collect(),
            catalogs,
            report,
        }
    }

    /// Text of a 1-based column, empty when the row is shorter
    pub(crate) fn text(&self, column: usize) -> &'r str {
        column
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .copied()
            .map(str::trim)
            .unwrap_or("")
    }

    pub(crate) fn string(&self, column: usize) -> String {
        self.text(column).to_string()
    }

    pub(crate) fn int(&mut self, column: usize) -> i32 {
        let value = self.long(column);
        i32::try_from(value).unwrap_or_else(|_| {
            self.report.parse_fallbacks += 1;
            0
        })
    }

    pub(crate) fn long(&mut self, column: usize) -> i64 {
        let text = self.text(column);
        if text.is_empty() {
            return 0;
        }
        if let Ok(value) = text.parse::<i64>() {
            return value;
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => value.trunc() as i64,
            _ => {
                self.report.parse_fallbacks += 1;
                0
            }
        }
    }

    pub(crate) fn clear_wave(&mut self, column: usize, max: u8) -> u8 {
        let value = self.int(column);
        if !(0..=i32::from(max)).contains(&value) {
            self.report.parse_fallbacks += 1;
        }
        value.clamp(0, i32::from(max)) as u8
    }

    pub(crate) fn hazard(&mut self, column: usize) -> u32 {
        let text = self.text(column);
        if text.is_empty() {
            return 0;
        }
        match text.parse::<f64>() {
            Ok(percent) if percent.is_finite() && percent >= 0.0 => hazard_tenths(percent),
            _ => {
                self.report.parse_fallbacks += 1;
                0
            }
        }
    }

    pub(crate) fn label(&mut self, column: usize, kind: CatalogKind) -> Option<Code> {
        let text = self.text(column);
        let code = self.catalogs.index_of(kind, text);
        if code.is_none() && !text.is_empty() {
            self.report.lookup_misses += 1;
        }
        code
    }
}
