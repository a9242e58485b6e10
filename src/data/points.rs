//! Point set and the record table behind it.
//!
//! Each [`DataPoint`] carries its plot coordinates, the row key used to look
//! it up and the full row as a JSON object. The order of the set is the order
//! used for keyboard navigation.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Column names used to interpret a table of rows as points.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub x: String,
    pub y: String,
    /// Row key column. `None` uses the row position as key.
    pub key: Option<String>,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            x: "x".to_string(),
            y: "y".to_string(),
            key: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PointsError {
    #[error("Failed to parse points JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON array of row objects")]
    NotAnArray,
    #[error("Row {row} is not a JSON object")]
    NotAnObject { row: usize },
    #[error("Row {row} has no numeric column '{column}'")]
    MissingColumn { row: usize, column: String },
    #[error("Duplicate row key '{0}'")]
    DuplicateKey(String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A single plotted row.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub fields: Map<String, Value>,
}

impl DataPoint {
    pub fn new(key: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            key: key.into(),
            x,
            y,
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn xy(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Numeric array columns of the row, e.g. a per-point time series.
    pub fn series_fields(&self) -> impl Iterator<Item = (&str, Vec<f64>)> + '_ {
        self.fields.iter().filter_map(|(name, value)| {
            let arr = value.as_array()?;
            let series: Vec<f64> = arr.iter().filter_map(Value::as_f64).collect();
            (!series.is_empty() && series.len() == arr.len()).then_some((name.as_str(), series))
        })
    }
}

/// Ordered, key-indexed collection of points.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<DataPoint>,
    by_key: HashMap<String, usize>,
}

impl PointSet {
    pub fn new(points: Vec<DataPoint>) -> Result<Self, PointsError> {
        let mut by_key = HashMap::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            if by_key.insert(p.key.clone(), i).is_some() {
                return Err(PointsError::DuplicateKey(p.key.clone()));
            }
        }
        Ok(Self { points, by_key })
    }

    /// Build a point set from a JSON array of row objects.
    pub fn from_json_str(s: &str, columns: &ColumnConfig) -> Result<Self, PointsError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json_value(value, columns)
    }

    pub fn from_json_value(value: Value, columns: &ColumnConfig) -> Result<Self, PointsError> {
        let Value::Array(rows) = value else {
            return Err(PointsError::NotAnArray);
        };
        let mut points = Vec::with_capacity(rows.len());
        for (row, item) in rows.into_iter().enumerate() {
            let Value::Object(fields) = item else {
                return Err(PointsError::NotAnObject { row });
            };
            let number = |column: &str| {
                fields
                    .get(column)
                    .and_then(Value::as_f64)
                    .ok_or_else(|| PointsError::MissingColumn {
                        row,
                        column: column.to_string(),
                    })
            };
            let x = number(&columns.x)?;
            let y = number(&columns.y)?;
            let key = match &columns.key {
                Some(col) => match fields.get(col) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    _ => {
                        return Err(PointsError::MissingColumn {
                            row,
                            column: col.clone(),
                        })
                    }
                },
                None => row.to_string(),
            };
            points.push(DataPoint { key, x, y, fields });
        }
        Self::new(points)
    }

    pub fn load_json_file(path: &std::path::Path, columns: &ColumnConfig) -> Result<Self, PointsError> {
        let s = std::fs::read_to_string(path).map_err(|source| PointsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&s, columns)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    pub fn by_key(&self, key: &str) -> Option<&DataPoint> {
        self.by_key.get(key).map(|&i| &self.points[i])
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.key.as_str())
    }

    pub fn xys(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(DataPoint::xy).collect()
    }

    /// Rows at `indices` as a JSON array (coordinates and key included).
    pub fn rows_to_json(&self, indices: &[usize]) -> Value {
        let rows = indices
            .iter()
            .filter_map(|&i| self.points.get(i))
            .map(|p| {
                let mut row = p.fields.clone();
                row.entry("key").or_insert_with(|| Value::String(p.key.clone()));
                Value::Object(row)
            })
            .collect();
        Value::Array(rows)
    }
}
