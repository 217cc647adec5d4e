use crate::imports::*;
use polars::prelude::{CsvReadOptions, DataFrame, ParquetReader, SerReader};

/*
    Loader - reads a dataset file into a RecordStore before the session starts.
    * DataFormat - json, csv or parquet, picked explicitly or from the file extension
    * load_records - async entry point, the parse itself runs on the blocking pool

    JSON may be an object with a "data" array or a bare array; every element must be an object.
    Tabular formats go through polars, null cells become absent fields.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Csv,
    Parquet,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .with_context(|| {
                format!(
                    "Cannot infer dataset format for '{}': no file extension",
                    path.display()
                )
            })?;
        extension.parse()
    }
}

impl std::str::FromStr for DataFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "parquet" | "pq" => Ok(Self::Parquet),
            other => anyhow::bail!("Unsupported file format: '{}'", other),
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        };
        write!(f, "{name}")
    }
}

#[tracing::instrument(skip(path), err, fields(path = %path.display()))]
pub async fn load_records(path: &Path, format: Option<DataFormat>) -> Result<RecordStore> {
    let format = match format {
        Some(format) => format,
        None => DataFormat::from_path(path)?,
    };

    if !path.exists() {
        tracing::warn!(missing_file = %path.display(), "File does not exist");
        anyhow::bail!("File does not exist: {}", path.display());
    }
    if path.is_dir() {
        tracing::warn!(directory_path = %path.display(), "Path is a directory, not a file");
        anyhow::bail!("Path is a directory, not a file: {}", path.display());
    }

    let metadata = tokio::fs::metadata(path).await?;
    let owned_path = path.to_path_buf();
    let records = tokio::task::spawn_blocking(move || -> Result<Vec<Record>> {
        match format {
            DataFormat::Json => {
                let content = std::fs::read_to_string(&owned_path)
                    .with_context(|| format!("Failed to read {}", owned_path.display()))?;
                records_from_json(&content).with_context(|| {
                    format!("Failed to read JSON file {}", owned_path.display())
                })
            }
            DataFormat::Csv => {
                let df = CsvReadOptions::default()
                    .with_has_header(true)
                    .try_into_reader_with_file_path(Some(owned_path.clone()))?
                    .finish()
                    .map_err(|e| {
                        anyhow::anyhow!("Failed to read CSV file {}: {}", owned_path.display(), e)
                    })?;
                records_from_frame(&df)
            }
            DataFormat::Parquet => {
                let file = std::fs::File::open(&owned_path)?;
                let df = ParquetReader::new(file).finish().map_err(|e| {
                    anyhow::anyhow!("Failed to read Parquet file {}: {}", owned_path.display(), e)
                })?;
                records_from_frame(&df)
            }
        }
    })
    .await
    .map_err(|e| anyhow::anyhow!("Task join error: {}", e))??;

    tracing::info!(
        format = %format,
        records = records.len(),
        size = metadata.len(),
        "Dataset loaded"
    );
    Ok(RecordStore::new(records))
}

pub fn records_from_json(content: &str) -> Result<Vec<Record>> {
    let root: ScalarValue = serde_json::from_str(content)?;
    let items = match root {
        ScalarValue::Array(items) => items,
        ScalarValue::Object(mut map) => match map.remove("data") {
            Some(ScalarValue::Array(items)) => items,
            Some(_) => anyhow::bail!("'data' must be an array of records"),
            None => anyhow::bail!("expected an array of records or an object with a 'data' array"),
        },
        _ => anyhow::bail!("expected an array of records or an object with a 'data' array"),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            ScalarValue::Object(record) => Ok(record),
            _ => Err(anyhow::anyhow!("data[{}] is not an object", i)),
        })
        .collect()
}

pub fn records_from_frame(df: &DataFrame) -> Result<Vec<Record>> {
    let columns = df.get_columns();
    let mut records = Vec::with_capacity(df.height());

    for row in 0..df.height() {
        let mut record = Record::new();
        for column in columns {
            let series = column.as_materialized_series();
            let value = series.get(row).map_err(|e| {
                anyhow::anyhow!("Failed to read row {} of column '{}': {}", row, column.name(), e)
            })?;
            if let Some(scalar) = anyvalue_to_scalar(&value) {
                record.insert(column.name().to_string(), scalar);
            }
        }
        records.push(record);
    }
    Ok(records)
}
