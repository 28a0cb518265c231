use serde::{Deserialize, Serialize};

/// Tokens read as a missing cell when loading delimited text.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Missing,
}

impl Value {
    /// Returns true for `Missing` and for a `Float` holding NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Returns true for non-missing `Int` and `Float` cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_)) || matches!(self, Value::Float(f) if !f.is_nan())
    }

    /// Numeric view of the cell. Text is not parsed here; see [`Value::to_numeric`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    /// Integer view of the cell; floats qualify only when they carry no fraction.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    /// Coerce the cell to a number.
    ///
    /// Total over every variant: numbers and missing cells pass through, text is
    /// parsed as an integer and then as a float, and anything unparsable becomes
    /// `Missing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nba_stats_analyzer::models::Value;
    ///
    /// assert_eq!(Value::from("2832").to_numeric(), Value::Int(2832));
    /// assert_eq!(Value::from("27.5").to_numeric(), Value::Float(27.5));
    /// assert_eq!(Value::from("DNP").to_numeric(), Value::Missing);
    /// ```
    pub fn to_numeric(&self) -> Value {
        match self {
            Value::Text(s) => parse_number(s.trim()).unwrap_or(Value::Missing),
            Value::Float(f) if f.is_nan() => Value::Missing,
            other => other.clone(),
        }
    }

    /// Classify a raw token from a delimited file without type context.
    pub fn from_token(token: &str) -> Value {
        if is_na_token(token) {
            return Value::Missing;
        }
        parse_number(token).unwrap_or_else(|| Value::Text(token.to_string()))
    }
}

pub(crate) fn is_na_token(token: &str) -> bool {
    NA_TOKENS.contains(&token)
}

pub(crate) fn parse_number(s: &str) -> Option<Value> {
    if s.is_empty() {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Int(i));
    }
    s.parse::<f64>()
        .ok()
        .map(|v| if v.is_nan() { Value::Missing } else { Value::Float(v) })
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Missing => write!(f, "NaN"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Missing)
    }
}

/// Inferred type of a whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl ColumnType {
    /// Infer the type of a column from its cells.
    ///
    /// All-integer with no gaps is `Integer`; numeric with gaps (or entirely
    /// missing) is `Float`; any text cell makes it `Text`.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a Value>) -> ColumnType {
        let mut saw_float = false;
        let mut saw_missing = false;
        for value in values {
            match value {
                Value::Text(_) => return ColumnType::Text,
                Value::Int(_) => {}
                Value::Float(f) if f.is_nan() => saw_missing = true,
                Value::Float(_) => saw_float = true,
                Value::Missing => saw_missing = true,
            }
        }
        if saw_float || saw_missing {
            ColumnType::Float
        } else {
            ColumnType::Integer
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnType::Text)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}
