use crate::imports::*;

/*
    Types:
    * Record - Schema-free map of field name to ScalarValue, any field may be missing
    * ShipField - The fields the built-in commands read, named once so typos are compile errors
    * FieldKey - Anything that names a field: a ShipField or a plain string
    * RecordBuilder - Builder for records, used by the loader and in tests

    Extension Traits:
    * RecordExt - Typed optional accessors. Absent, null, blank and non-scalar values all read as None.
*/
pub type Record = tera::Map<String, ScalarValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipField {
    ShipName,
    Country,
    TypeSummary,
    Speed,
    Lat,
    Lon,
}

impl ShipField {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::ShipName => "SHIPNAME",
            Self::Country => "COUNTRY",
            Self::TypeSummary => "TYPE_SUMMARY",
            Self::Speed => "SPEED",
            Self::Lat => "LAT",
            Self::Lon => "LON",
        }
    }
}

impl std::fmt::Display for ShipField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

pub trait FieldKey {
    fn field_key(&self) -> &str;
}

impl FieldKey for ShipField {
    fn field_key(&self) -> &str {
        self.key()
    }
}

impl FieldKey for &str {
    fn field_key(&self) -> &str {
        self
    }
}

impl FieldKey for String {
    fn field_key(&self) -> &str {
        self.as_str()
    }
}

pub trait RecordExt {
    fn field(&self, key: &str) -> Option<&ScalarValue>;

    /// Trimmed text of a field, `None` unless present and non-empty.
    fn valid_text(&self, field: &impl FieldKey) -> Option<String> {
        self.field(field.field_key()).and_then(scalar_text)
    }

    /// Numeric value of a field. Strings are parsed after trimming; anything that does
    /// not convert to a finite number is `None`.
    fn numeric(&self, field: &impl FieldKey) -> Option<f64> {
        self.field(field.field_key()).and_then(scalar_number)
    }

    fn has_valid(&self, field: &impl FieldKey) -> bool {
        self.valid_text(field).is_some()
    }
}

impl RecordExt for Record {
    fn field(&self, key: &str) -> Option<&ScalarValue> {
        tera::Map::get(self, key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    map: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, key: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn field(self, field: ShipField, value: impl Into<ScalarValue>) -> Self {
        self.insert(field.key(), value)
    }

    pub fn build(self) -> Record {
        self.map
    }
}
