//! Event builder
//!
//! Builds new typed events from a parameter mapping and the per-type text
//! templates, then hands the generated lines to the codec so the returned
//! record is indistinguishable from one loaded off disk. Each type carries
//! a schema of required keys and defaulted optionals; the formatting of
//! every placeholder is data-driven through [`FieldFormat`].

use std::collections::HashMap;

use terrane_core::{EventType, FieldFormat, TerraneError, TerraneResult};

use crate::event::DEFAULT_LAYER_DENSITY;
use crate::template;

/// Vertical placement of an event's reference point
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZPlacement {
    At(f64),
    /// The document's current upper z-extent, resolved at build time
    Top,
}

/// Reference position of an event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: ZPlacement,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Position {
            x,
            y,
            z: ZPlacement::At(z),
        }
    }

    pub fn at_top(x: f64, y: f64) -> Self {
        Position {
            x,
            y,
            z: ZPlacement::Top,
        }
    }
}

/// One builder parameter value
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Float(f64),
    Text(String),
    Floats(Vec<f64>),
    Texts(Vec<String>),
    Pos(Position),
}

/// Parameter mapping for [`Document::add_event`](crate::Document::add_event)
#[derive(Clone, Debug, Default)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Params::default()
    }

    /// Chainable insert.
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn float(&self, key: &str) -> Option<f64> {
        match self.values.get(key) {
            Some(ParamValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ParamValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn floats(&self, key: &str) -> Option<&[f64]> {
        match self.values.get(key) {
            Some(ParamValue::Floats(v)) => Some(v),
            _ => None,
        }
    }

    pub fn texts(&self, key: &str) -> Option<&[String]> {
        match self.values.get(key) {
            Some(ParamValue::Texts(v)) => Some(v),
            _ => None,
        }
    }

    pub fn pos(&self, key: &str) -> Option<Position> {
        match self.values.get(key) {
            Some(ParamValue::Pos(p)) => Some(*p),
            _ => None,
        }
    }

    fn require_float(&self, key: &'static str) -> TerraneResult<f64> {
        self.float(key).ok_or(TerraneError::MissingParameter(key))
    }

    fn require_text(&self, key: &'static str) -> TerraneResult<&str> {
        self.text(key).ok_or(TerraneError::MissingParameter(key))
    }

    fn require_floats(&self, key: &'static str) -> TerraneResult<&[f64]> {
        self.floats(key).ok_or(TerraneError::MissingParameter(key))
    }

    fn require_texts(&self, key: &'static str) -> TerraneResult<&[String]> {
        self.texts(key).ok_or(TerraneError::MissingParameter(key))
    }

    fn require_pos(&self, key: &'static str) -> TerraneResult<Position> {
        self.pos(key).ok_or(TerraneError::MissingParameter(key))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(v: Vec<f64>) -> Self {
        ParamValue::Floats(v)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::Texts(v)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(v: Vec<&str>) -> Self {
        ParamValue::Texts(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Position> for ParamValue {
    fn from(p: Position) -> Self {
        ParamValue::Pos(p)
    }
}

const F1: FieldFormat = FieldFormat::Fixed(1);

/// Defaulted numeric placeholders of the fault template.
const FAULT_OPTIONALS: [(&str, &str, f64); 6] = [
    ("$ROTATION$", "rotation", 30.0),
    ("$AMPLITUDE$", "amplitude", 2000.0),
    ("$RADIUS$", "radius", 1000.0),
    ("$XAXIS$", "xaxis", 2000.0),
    ("$YAXIS$", "yaxis", 2000.0),
    ("$ZAXIS$", "zaxis", 2000.0),
];

/// Build the raw lines of a new event.
///
/// The first line is a placeholder for the `Event #` header, which the
/// document writes once it has assigned an order number. `top_z` is the
/// document's current upper z-extent, used to resolve [`ZPlacement::Top`].
pub(crate) fn build_event(
    event_type: EventType,
    params: &Params,
    top_z: Option<f64>,
) -> TerraneResult<Vec<String>> {
    match event_type {
        EventType::Stratigraphy => build_stratigraphy(params),
        EventType::Fault => build_fault(params, top_z),
        EventType::Fold => build_fold(params, top_z),
        EventType::Tilt => build_tilt(params, top_z),
        EventType::Unconformity => build_unconformity(params, top_z),
        other => Err(TerraneError::UnsupportedEventType(other.as_tag().to_string())),
    }
}

fn resolve_z(pos: Position, top_z: Option<f64>) -> TerraneResult<f64> {
    match pos.z {
        ZPlacement::At(z) => Ok(z),
        ZPlacement::Top => top_z.ok_or_else(|| {
            TerraneError::MalformedDocument(
                "no extent available to resolve z placement `top`".to_string(),
            )
        }),
    }
}

fn push_template(lines: &mut Vec<String>, text: &str) {
    lines.extend(text.split('\n').map(str::to_string));
}

/// Render one stratigraphy layer block: name and cumulative height in,
/// tabs for indentation, density in scientific notation.
fn layer_block(name: &str, cumulative_height: f64, density: f64) -> String {
    let text = template::substitute(
        template::STRATI_LAYER,
        &[
            ("$NAME$", name.to_string()),
            ("$HEIGHT$", F1.render_f64(cumulative_height)),
        ],
    );
    let text = template::spaces_to_tabs(&text);
    template::substitute(
        &text,
        &[("$DENSITY$", FieldFormat::Scientific.render_f64(density))],
    )
}

/// Cumulative heights as the running sum of per-layer thicknesses, in the
/// order the thicknesses were supplied.
fn cumulative_heights(thicknesses: &[f64]) -> Vec<f64> {
    thicknesses
        .iter()
        .scan(0.0, |sum, t| {
            *sum += t;
            Some(*sum)
        })
        .collect()
}

fn layer_schema<'a>(params: &'a Params) -> TerraneResult<(&'a [String], Vec<f64>, Option<&'a [f64]>)> {
    let names = params.require_texts("layer_names")?;
    let thicknesses = params.require_floats("layer_thickness")?;
    if thicknesses.len() < names.len() {
        return Err(TerraneError::MissingParameter("layer_thickness"));
    }
    Ok((names, cumulative_heights(thicknesses), params.floats("density")))
}

fn build_stratigraphy(params: &Params) -> TerraneResult<Vec<String>> {
    let (names, heights, densities) = layer_schema(params)?;

    let mut lines = vec![String::new(), format!("\tNum Layers\t= {}", names.len())];
    for (i, name) in names.iter().enumerate() {
        let density = densities
            .and_then(|d| d.get(i).copied())
            .unwrap_or(DEFAULT_LAYER_DENSITY);
        push_template(&mut lines, &layer_block(name, heights[i], density));
    }
    lines.push("\tName\t= Strat".to_string());
    Ok(lines)
}

fn build_fault(params: &Params, top_z: Option<f64>) -> TerraneResult<Vec<String>> {
    let pos = params.require_pos("pos")?;
    let z = resolve_z(pos, top_z)?;

    let mut values = vec![
        ("$NAME$", params.require_text("name")?.to_string()),
        ("$POS_X$", F1.render_f64(pos.x)),
        ("$POS_Y$", F1.render_f64(pos.y)),
        ("$POS_Z$", F1.render_f64(z)),
        ("$DIP_DIR$", F1.render_f64(params.require_float("dip_dir")?)),
        ("$DIP$", F1.render_f64(params.require_float("dip")?)),
        ("$SLIP$", F1.render_f64(params.require_float("slip")?)),
        (
            "$MOVEMENT$",
            params.text("movement").unwrap_or("Hanging Wall").to_string(),
        ),
        (
            "$GEOMETRY$",
            params.text("geometry").unwrap_or("Translation").to_string(),
        ),
    ];
    for (token, key, default) in FAULT_OPTIONALS {
        values.push((token, F1.render_f64(params.float(key).unwrap_or(default))));
    }

    let mut lines = vec![String::new()];
    push_template(&mut lines, &template::substitute(template::FAULT, &values));
    Ok(lines)
}

fn build_fold(params: &Params, top_z: Option<f64>) -> TerraneResult<Vec<String>> {
    let pos = params.require_pos("pos")?;
    let z = resolve_z(pos, top_z)?;

    let values = [
        ("$NAME$", params.require_text("name")?.to_string()),
        ("$POS_X$", F1.render_f64(pos.x)),
        ("$POS_Y$", F1.render_f64(pos.y)),
        ("$POS_Z$", F1.render_f64(z)),
        (
            "$WAVELENGTH$",
            F1.render_f64(params.require_float("wavelength")?),
        ),
        (
            "$AMPLITUDE$",
            F1.render_f64(params.require_float("amplitude")?),
        ),
        (
            "$DIP_DIR$",
            F1.render_f64(params.float("dip_dir").unwrap_or(90.0)),
        ),
        ("$DIP$", F1.render_f64(params.float("dip").unwrap_or(90.0))),
    ];

    let mut lines = vec![String::new()];
    push_template(&mut lines, &template::substitute(template::FOLD, &values));
    Ok(lines)
}

fn build_tilt(params: &Params, top_z: Option<f64>) -> TerraneResult<Vec<String>> {
    let pos = params.require_pos("pos")?;
    let z = resolve_z(pos, top_z)?;

    let values = [
        ("$NAME$", params.require_text("name")?.to_string()),
        ("$POS_X$", F1.render_f64(pos.x)),
        ("$POS_Y$", F1.render_f64(pos.y)),
        ("$POS_Z$", F1.render_f64(z)),
        (
            "$ROTATION$",
            F1.render_f64(params.require_float("rotation")?),
        ),
        (
            "$PLUNGE_DIRECTION$",
            F1.render_f64(params.require_float("plunge_direction")?),
        ),
        ("$PLUNGE$", F1.render_f64(params.require_float("plunge")?)),
    ];

    let mut lines = vec![String::new()];
    push_template(&mut lines, &template::substitute(template::TILT, &values));
    Ok(lines)
}

fn build_unconformity(params: &Params, top_z: Option<f64>) -> TerraneResult<Vec<String>> {
    let name = params.require_text("name")?;
    let pos = params.require_pos("pos")?;
    let z = resolve_z(pos, top_z)?;

    let values = [
        ("$POS_X$", F1.render_f64(pos.x)),
        ("$POS_Y$", F1.render_f64(pos.y)),
        ("$POS_Z$", F1.render_f64(z)),
        (
            "$DIP_DIRECTION$",
            F1.render_f64(params.require_float("dip_direction")?),
        ),
        ("$DIP$", F1.render_f64(params.require_float("dip")?)),
    ];

    let mut lines = vec![String::new()];
    push_template(
        &mut lines,
        &template::substitute(template::UNCONFORMITY, &values),
    );

    // The eroded surface carries its own stratigraphy block.
    let (names, heights, densities) = layer_schema(params)?;
    lines.push(format!("\tNum Layers\t= {}", names.len()));
    for (i, layer_name) in names.iter().enumerate() {
        let density = densities
            .and_then(|d| d.get(i).copied())
            .unwrap_or(DEFAULT_LAYER_DENSITY);
        push_template(&mut lines, &layer_block(layer_name, heights[i], density));
    }
    lines.push(format!("\tName\t= {name}"));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fault_params() -> Params {
        Params::new()
            .with("name", "main_fault")
            .with("pos", Position::new(1000.0, 2000.0, 3000.0))
            .with("dip_dir", 45.0)
            .with("dip", 60.0)
            .with("slip", 500.0)
    }

    #[test]
    fn test_missing_parameter() {
        let err = build_event(EventType::Fault, &Params::new(), None);
        assert!(matches!(err, Err(TerraneError::MissingParameter("pos"))));
    }

    #[test]
    fn test_unsupported_builder_type() {
        let err = build_event(EventType::Dyke, &Params::new(), None);
        assert!(matches!(err, Err(TerraneError::UnsupportedEventType(_))));
    }

    #[test]
    fn test_fault_substitution() {
        let lines = build_event(EventType::Fault, &fault_params(), None).unwrap();
        assert_eq!(lines[0], "");
        assert!(lines.iter().any(|l| l == "    Dip Direction    =  45.0"));
        assert!(lines.iter().any(|l| l == "    Slip    = 500.0"));
        assert!(lines.iter().any(|l| l == "    Movement    = Hanging Wall"));
        assert!(lines.iter().any(|l| l == "    Rotation    = 30.0"));
        assert!(!lines.iter().any(|l| l.contains('$')));
    }

    #[test]
    fn test_fault_top_resolution() {
        let params = fault_params().with("pos", Position::at_top(0.0, 0.0));
        let lines = build_event(EventType::Fault, &params, Some(5000.0)).unwrap();
        assert!(lines.iter().any(|l| l == "    Z    =   5000.0"));
    }

    #[test]
    fn test_fault_top_without_extent() {
        let params = fault_params().with("pos", Position::at_top(0.0, 0.0));
        let err = build_event(EventType::Fault, &params, None);
        assert!(matches!(err, Err(TerraneError::MalformedDocument(_))));
    }

    #[test]
    fn test_stratigraphy_cumulative_heights() {
        let params = Params::new()
            .with("layer_names", vec!["base", "mid", "top"])
            .with("layer_thickness", vec![100.0, 200.0, 150.0]);
        let lines = build_event(EventType::Stratigraphy, &params, None).unwrap();

        let heights: Vec<&String> = lines.iter().filter(|l| l.contains("Height")).collect();
        assert_eq!(heights.len(), 3);
        assert_eq!(heights[0], "\tHeight\t= 100.0");
        assert_eq!(heights[1], "\tHeight\t= 300.0");
        assert_eq!(heights[2], "\tHeight\t= 450.0");
    }

    #[test]
    fn test_stratigraphy_density_defaulted() {
        let params = Params::new()
            .with("layer_names", vec!["only"])
            .with("layer_thickness", vec![100.0]);
        let lines = build_event(EventType::Stratigraphy, &params, None).unwrap();
        assert!(lines.iter().any(|l| l == "\tDensity\t= 4.000000e+00"));
    }

    #[test]
    fn test_unconformity_has_layers_and_name() {
        let params = Params::new()
            .with("name", "uc1")
            .with("pos", Position::new(0.0, 0.0, 4000.0))
            .with("dip_direction", 90.0)
            .with("dip", 10.0)
            .with("layer_names", vec!["a", "b"])
            .with("layer_thickness", vec![500.0, 500.0]);
        let lines = build_event(EventType::Unconformity, &params, None).unwrap();
        assert!(lines.iter().any(|l| l == "\tNum Layers\t= 2"));
        assert_eq!(lines.last().map(String::as_str), Some("\tName\t= uc1"));
        assert!(!lines.iter().any(|l| l.contains("$DENSITY$")));
    }
}
