use crate::imports::*;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

// Builds a store from (field, value) rows; `None` leaves the field out of the record.
pub fn store_of(rows: &[&[(&str, Option<&str>)]]) -> RecordStore {
    let records = rows
        .iter()
        .map(|row| {
            row.iter()
                .fold(RecordBuilder::new(), |builder, (field, value)| match value {
                    Some(v) => builder.insert(*field, *v),
                    None => builder,
                })
                .build()
        })
        .collect();
    RecordStore::new(records)
}

pub fn country_store() -> RecordStore {
    store_of(&[
        &[("COUNTRY", Some("US"))],
        &[("COUNTRY", Some("US"))],
        &[("COUNTRY", Some("UK"))],
        &[("COUNTRY", Some(""))],
    ])
}
