//! Property scalars and field formatting
//!
//! Every field line in a history document reads `<label> = <value>`. Values
//! are either numeric (fixed-precision decimals or scientific notation) or
//! free text / enumerated tokens. Output formatting is data-driven: each
//! known field or template placeholder carries a [`FieldFormat`] describing
//! exactly how its number is rendered, so rewritten lines match what the
//! simulation tool itself writes.

use std::fmt;

/// A scalar property value parsed from a field line
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Float(f64),
    Text(String),
}

impl PropValue {
    /// Parse the text after the `=` of a field line.
    ///
    /// Numeric if the trimmed text parses as a decimal or scientific
    /// literal (`5000.00`, `1.60e-003`), otherwise the trimmed text itself.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(v) => PropValue::Float(v),
            Err(_) => PropValue::Text(trimmed.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Float(v) => Some(*v),
            PropValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Float(_) => None,
            PropValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        PropValue::Float(v)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Float(v) => write!(f, "{v}"),
            PropValue::Text(s) => f.write_str(s),
        }
    }
}

/// How a numeric field is rendered on output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldFormat {
    /// Fixed precision, no padding: `Fixed(1)` renders `5000.0`
    Fixed(usize),
    /// Right-aligned in a field width: `Padded(7, 2)` renders `  50.00`
    Padded(usize, usize),
    /// Six-decimal scientific notation with signed two-digit exponent:
    /// `4.000000e+00`
    Scientific,
    /// Shortest `f64` display, used where the format is not pinned
    Plain,
}

impl FieldFormat {
    /// Render a numeric value with this format.
    pub fn render_f64(self, v: f64) -> String {
        match self {
            FieldFormat::Fixed(prec) => format!("{v:.prec$}"),
            FieldFormat::Padded(width, prec) => format!("{v:width$.prec$}"),
            FieldFormat::Scientific => format_scientific(v, 6),
            FieldFormat::Plain => format!("{v}"),
        }
    }

    /// Render a property value; text passes through unformatted.
    pub fn render(self, value: &PropValue) -> String {
        match value {
            PropValue::Float(v) => self.render_f64(*v),
            PropValue::Text(s) => s.clone(),
        }
    }
}

/// Scientific notation with a mantissa of `precision` decimals and a
/// signed exponent of at least two digits (`1.600000e-03`).
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return format!("{:.precision$}e+00", 0.0);
    }
    let exp = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exp);
    let mut exp = exp;
    // Rounding the mantissa can push it to 10.0; renormalize.
    let rounded = format!("{mantissa:.precision$}");
    if rounded.parse::<f64>().map(f64::abs).unwrap_or(0.0) >= 10.0 {
        mantissa /= 10.0;
        exp += 1;
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa:.precision$}e{sign}{:02}", exp.abs())
}
