pub mod helpers;
pub mod record;
pub mod store;

/*
    Types:
    * ScalarValue - A single field value, re-export of Tera Value which is a re-export of serde_json::Value
    * Record - One vessel, a schema-free map of field name to ScalarValue (see record.rs)
    * RecordStore - The immutable, session-wide sequence of records (see store.rs)
*/
pub type ScalarValue = tera::Value;
