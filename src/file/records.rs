// src/file/records.rs
use csv::Writer;

use crate::config::SalesRecord;
use crate::error::ExportError;

pub trait RecordExporter {
    fn extension(&self) -> &'static str;
    fn render(&self, records: &[SalesRecord]) -> Result<String, ExportError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl RecordExporter for CsvExporter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    // Header row comes from the field names: period,sales,revenue
    fn render(&self, records: &[SalesRecord]) -> Result<String, ExportError> {
        if records.is_empty() {
            return Err(ExportError::NoRecords);
        }

        let mut writer = Writer::from_writer(Vec::new());
        for record in records {
            writer.serialize(record)?;
        }
        let bytes = writer.into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl RecordExporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, records: &[SalesRecord]) -> Result<String, ExportError> {
        if records.is_empty() {
            return Err(ExportError::NoRecords);
        }
        Ok(serde_json::to_string_pretty(records)?)
    }
}

#[cfg(test)]
pub fn parse_csv(text: &str) -> Result<Vec<SalesRecord>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let records = reader.deserialize().collect::<Result<Vec<SalesRecord>, _>>()?;
    Ok(records)
}
