use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::Catalogs;
use crate::decode::{DecodeReport, RowDecoder};
use crate::error::{Error, Result};
use crate::shift::Shift;

/// All shifts of one export, in file order
#[derive(Debug, Clone, Default)]
pub struct ShiftStore {
    shifts: Vec<Shift>,
    report: DecodeReport,
}

impl ShiftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the export at `path`.
    ///
    /// The first line is a header and is always discarded. Every following
    /// non-empty line becomes one shift. Failing to open or read the file
    /// aborts the load.
    pub fn load<P: AsRef<Path>>(path: P, catalogs: &Catalogs) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::file_open(path, e))?;
        let store = Self::from_reader(BufReader::new(file), catalogs)?;
        info!("Loaded {} shifts from {:?}", store.len(), path);
        Ok(store)
    }

    /// Decode rows from `reader`.
    ///
    /// Lines are read as raw bytes. A row that is not valid UTF-8 is decoded
    /// lossily and counted as a parse fallback; only read failures are errors.
    pub fn from_reader<R: BufRead>(mut reader: R, catalogs: &Catalogs) -> Result<Self> {
        let decoder = RowDecoder::new(catalogs);
        let mut store = Self::new();
        let mut buf = Vec::new();

        // Header
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(store);
        }

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }
            if let Cow::Owned(_) = line {
                debug!("Row {} is not valid UTF-8", store.report.rows + 1);
                store.report.parse_fallbacks += 1;
            }
            let shift = decoder.decode_with_report(&line, &mut store.report);
            store.shifts.push(shift);
        }

        if !store.report.is_clean() {
            warn!(
                "Decoded {} rows with {} unparsable fields and {} unknown labels",
                store.report.rows, store.report.parse_fallbacks, store.report.lookup_misses
            );
        }

        Ok(store)
    }

    pub fn from_shifts(shifts: Vec<Shift>) -> Self {
        Self {
            shifts,
            report: DecodeReport::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shift> {
        self.shifts.get(index)
    }

    pub fn find_by_statink_id(&self, statink_id: i32) -> Option<&Shift> {
        self.shifts.iter().find(|s| s.statink_id == statink_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shift> {
        self.shifts.iter()
    }

    pub fn as_slice(&self) -> &[Shift] {
        &self.shifts
    }

    /// Problems recovered from while decoding
    pub fn report(&self) -> &DecodeReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_header_is_skipped() {
        let catalogs = Catalogs::new();
        let csv = "statink_id,period,start\n1,10,100\n2,10,200\n";
        let store = ShiftStore::from_reader(Cursor::new(csv), &catalogs).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().statink_id, 1);
        assert_eq!(store.get(1).unwrap().shift_start, 200);
        assert_eq!(store.report().rows, 2);
    }

    #[test]
    fn test_header_skipped_even_if_numeric() {
        let catalogs = Catalogs::new();
        let store = ShiftStore::from_reader(Cursor::new("1,2,3\n4,5,6"), &catalogs).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().statink_id, 4);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let catalogs = Catalogs::new();
        let csv = "header\r\n\r\n5\r\n\n6\r\n";
        let store = ShiftStore::from_reader(Cursor::new(csv), &catalogs).unwrap();
        let ids: Vec<i32> = store.iter().map(|s| s.statink_id).collect();
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn test_empty_input() {
        let catalogs = Catalogs::new();
        assert!(ShiftStore::from_reader(Cursor::new(""), &catalogs).unwrap().is_empty());
        assert!(ShiftStore::from_reader(Cursor::new("header\n"), &catalogs).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_statink_id() {
        let catalogs = Catalogs::new();
        let store = ShiftStore::from_reader(Cursor::new("h\n10\n20\n30\n"), &catalogs).unwrap();
        assert_eq!(store.find_by_statink_id(20).map(|s| s.statink_id), Some(20));
        assert!(store.find_by_statink_id(40).is_none());
    }

    #[test]
    fn test_invalid_utf8_row_is_recovered() {
        let catalogs = Catalogs::new();
        let csv: &[u8] = b"header\n1,10,100\n2,10,200\n3,10,300,x\xff\xfe\n4,10,400\n";
        let store = ShiftStore::from_reader(Cursor::new(csv), &catalogs).unwrap();
        let ids: Vec<i32> = store.iter().map(|s| s.statink_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(store.get(2).unwrap().shift_start, 300);
        assert_eq!(store.report().parse_fallbacks, 1);
        assert_eq!(store.report().rows, 4);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let catalogs = Catalogs::new();
        let err = ShiftStore::load("/nonexistent/salmon.csv", &catalogs).unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }
}
