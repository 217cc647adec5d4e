use crate::imports::*;

/*
    Field Extractor:
    * extract_valid - Trimmed non-empty text of a field, one per record that has it
    * extract_numeric - Finite numeric values of a field, unparseable values dropped
    * extract_speeds - SPEED values that are numeric and not negative
    * extract_coordinates - LAT/LON pairs where both are numeric and in range

    Records that do not qualify are skipped, never reported. Only the debug log sees how many.
*/
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

pub fn extract_valid(records: &[Record], field: &impl FieldKey) -> Vec<String> {
    let values: Vec<String> = records
        .iter()
        .filter_map(|record| record.valid_text(field))
        .collect();
    log_extraction(field.field_key(), records.len(), values.len());
    values
}

pub fn extract_numeric(records: &[Record], field: &impl FieldKey) -> Vec<f64> {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|record| record.numeric(field))
        .collect();
    log_extraction(field.field_key(), records.len(), values.len());
    values
}

pub fn extract_speeds(records: &[Record]) -> Vec<f64> {
    extract_numeric(records, &ShipField::Speed)
        .into_iter()
        .filter(|speed| *speed >= 0.0)
        .collect()
}

pub fn extract_coordinates(records: &[Record]) -> Vec<GeoPoint> {
    let points: Vec<GeoPoint> = records
        .iter()
        .filter_map(|record| {
            let lat = record.numeric(&ShipField::Lat)?;
            let lon = record.numeric(&ShipField::Lon)?;
            (LATITUDE_RANGE.contains(&lat) && LONGITUDE_RANGE.contains(&lon))
                .then_some(GeoPoint { lat, lon })
        })
        .collect();
    log_extraction("LAT/LON", records.len(), points.len());
    points
}

fn log_extraction(field: &str, total: usize, kept: usize) {
    tracing::debug!(
        field = %field,
        kept,
        skipped = total - kept,
        "Extracted field values"
    );
}
