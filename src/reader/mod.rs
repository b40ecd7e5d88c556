//! Module for reading `Record` elements from a health export XML file.
//!
//! Exports are routinely hundreds of megabytes, so the reader streams
//! events off a buffered file handle instead of building a document tree.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::models::HealthRecord;

/// Streaming reader over the `Record` elements of a health export
///
/// Yields one [`HealthRecord`] per `Record` element, in document order.
/// All other elements are skipped.
pub struct ExportReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl ExportReader<BufReader<File>> {
    /// Open an export file for reading
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = safe_open_file(path, "reading health export")?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> ExportReader<R> {
    /// Create a reader over any buffered source, mainly useful in tests
    pub fn from_reader(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Read the next `Record` element, or `None` at end of document
    ///
    /// Both the self-closing form `<Record .../>` and the expanded form
    /// `<Record ...></Record>` occur in real exports; both are handled.
    pub fn next_record(&mut self) -> Result<Option<HealthRecord>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Empty(ref element) | Event::Start(ref element)
                    if element.name().as_ref() == b"Record" =>
                {
                    return Ok(Some(record_from_element(element)?));
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for ExportReader<R> {
    type Item = Result<HealthRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Collect the attributes of a `Record` element into a raw record
///
/// Unknown attributes are ignored.
fn record_from_element(element: &BytesStart<'_>) -> Result<HealthRecord> {
    let mut record = HealthRecord::default();

    for attribute in element.attributes() {
        let attribute = attribute?;
        let value = attribute
            .unescape_value()
            .map_err(quick_xml::Error::from)?
            .into_owned();

        match attribute.key.as_ref() {
            b"type" => record.record_type = Some(value),
            b"value" => record.value = Some(value),
            b"unit" => record.unit = Some(value),
            b"endDate" => record.end_date = Some(value),
            b"sourceName" => record.source_name = Some(value),
            _ => {}
        }
    }

    Ok(record)
}
