//! Bulk fault-set writer
//!
//! Renders a complete history document from a batch of pre-processed
//! fault parameter records plus a stratigraphy description, straight to
//! text without an in-memory [`Document`](crate::Document). This is the
//! fast path for models with many faults; it shares the header renderer
//! and the per-type templates with the event builder so the two writers
//! cannot drift apart.

use std::path::Path;

use rand::Rng;
use terrane_core::{FaultParams, FieldFormat, TerraneResult};

use crate::template;

const F5: FieldFormat = FieldFormat::Fixed(5);

/// How fault trace points are interpolated by the simulation tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinType {
    #[default]
    Lines,
    Curves,
    Square,
}

impl JoinType {
    fn as_token(self) -> &'static str {
        match self {
            JoinType::Lines => "LINES",
            JoinType::Curves => "CURVES",
            JoinType::Square => "SQUARE",
        }
    }
}

/// Stratigraphy of a bulk-generated model, bottom layer first
#[derive(Clone, Debug)]
pub struct StratSpec {
    pub names: Vec<String>,
    /// Absolute layer top heights (already cumulative)
    pub heights: Vec<f64>,
    pub densities: Vec<f64>,
    pub mag_sus: Vec<f64>,
}

/// Global settings of a bulk-generated model
#[derive(Clone, Debug)]
pub struct BulkOptions {
    pub filename: String,
    pub join_type: JoinType,
    pub cube_size: f64,
    /// Model origin; only the z component is written into the footer
    pub origin: [f64; 3],
    pub extent: [f64; 3],
}

impl Default for BulkOptions {
    fn default() -> Self {
        BulkOptions {
            filename: "faultmodel.his".to_string(),
            join_type: JoinType::Lines,
            cube_size: 150.0,
            origin: [0.0, 0.0, 4000.0],
            extent: [9000.0, 9400.0, 4000.0],
        }
    }
}

/// Fault template fields filled from a [`FaultParams`] record.
fn fault_values(fault: &FaultParams) -> [(&'static str, String); 12] {
    [
        ("$X$", F5.render_f64(fault.x)),
        ("$Y$", F5.render_f64(fault.y)),
        ("$Z$", F5.render_f64(fault.z)),
        ("$Dip Direction$", F5.render_f64(fault.dip_direction)),
        ("$Dip$", F5.render_f64(fault.dip)),
        ("$Slip$", F5.render_f64(fault.slip)),
        ("$Amplitude$", F5.render_f64(fault.amplitude)),
        ("$XAxis$", F5.render_f64(fault.x_axis)),
        ("$YAxis$", F5.render_f64(fault.y_axis)),
        ("$ZAxis$", F5.render_f64(fault.z_axis)),
        ("$Profile Pitch$", F5.render_f64(fault.profile_pitch)),
        ("$Pitch$", F5.render_f64(fault.pitch)),
    ]
}

/// Render a fault model document, stamping the current time.
pub fn render_fault_model(
    faults: &[FaultParams],
    strat: &StratSpec,
    options: &BulkOptions,
) -> String {
    render_fault_model_dated(faults, strat, options, &template::current_timestamp())
}

/// Render a fault model document with a caller-supplied save timestamp.
pub fn render_fault_model_dated(
    faults: &[FaultParams],
    strat: &StratSpec,
    options: &BulkOptions,
    date_saved: &str,
) -> String {
    let mut rng = rand::thread_rng();
    let mut out = template::render_header(&options.filename, date_saved);
    out.push(format!("No of Events\t= {}", faults.len() + 1));

    // Leading stratigraphy event
    out.push("Event #1\t= STRATIGRAPHY".to_string());
    out.push(format!("\tNum Layers = {}", strat.names.len()));
    for (i, name) in strat.names.iter().enumerate() {
        let mag_sus = strat.mag_sus.get(i).copied().unwrap_or(0.0);
        let block = template::substitute(
            template::STRATI_LAYER_EXPANDED,
            &[
                ("$NAME$", name.clone()),
                ("$RED$", rng.gen_range(0..255).to_string()),
                ("$GREEN$", rng.gen_range(0..255).to_string()),
                ("$BLUE$", rng.gen_range(0..255).to_string()),
                (
                    "$Height$",
                    F5.render_f64(strat.heights.get(i).copied().unwrap_or(0.0)),
                ),
                (
                    "$Density$",
                    F5.render_f64(strat.densities.get(i).copied().unwrap_or(0.0)),
                ),
                ("$MagSus$", F5.render_f64(mag_sus)),
            ],
        );
        out.extend(block.split('\n').map(str::to_string));
    }
    out.push("\tName\t= Strat".to_string());

    // One fault event per record
    for (i, fault) in faults.iter().enumerate() {
        out.push(format!("Event #{}\t= FAULT", i + 2));

        let mut values: Vec<(&str, String)> = fault_values(fault).to_vec();
        values.push(("$Join Type$", options.join_type.as_token().to_string()));
        let start = template::substitute(template::FAULT_START, &values);
        out.extend(start.split('\n').map(str::to_string));

        out.push(format!("    Num Points    = {}", fault.trace.len()));
        for point in &fault.trace {
            out.push(format!(" \t\tPoint X = {}", F5.render_f64(point.x)));
            out.push(format!(" \t\tPoint Y = {}", F5.render_f64(point.y)));
        }

        let end = template::substitute(
            template::FAULT_END,
            &[("$NAME$", format!("Fault{i}"))],
        );
        out.extend(end.split('\n').map(str::to_string));
    }

    // Expanded footer with the model frame substituted in
    let footer = template::substitute(
        template::FOOTER_EXPANDED,
        &[
            ("$origin_z$", plain(options.origin[2])),
            ("$extent_x$", plain(options.extent[0])),
            ("$extent_y$", plain(options.extent[1])),
            ("$extent_z$", plain(options.extent[2])),
            ("$cube_size$", plain(options.cube_size)),
        ],
    );
    out.extend(footer.split('\n').map(str::to_string));

    let mut text = out.join("\n");
    text.push('\n');
    text
}

/// Render and write a fault model document to disk.
pub fn write_fault_model(
    path: impl AsRef<Path>,
    faults: &[FaultParams],
    strat: &StratSpec,
    options: &BulkOptions,
) -> TerraneResult<()> {
    let text = render_fault_model(faults, strat, options);
    std::fs::write(path, text)?;
    Ok(())
}

fn plain(v: f64) -> String {
    FieldFormat::Plain.render_f64(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CubeKind, Document};
    use terrane_core::{EventType, TracePoint};

    fn sample_fault() -> FaultParams {
        FaultParams {
            x: 4500.0,
            y: 2300.0,
            z: 4000.0,
            x_axis: 1200.0,
            y_axis: 1200.0,
            z_axis: 1200.0,
            dip: 70.0,
            dip_direction: 95.0,
            slip: 96.0,
            amplitude: 40.0,
            pitch: 90.0,
            profile_pitch: 0.0,
            trace: vec![
                TracePoint { x: 0.0, y: -12.0 },
                TracePoint { x: 314.0, y: 3.0 },
                TracePoint { x: 628.0, y: 11.0 },
            ],
        }
    }

    fn sample_strat() -> StratSpec {
        StratSpec {
            names: vec!["Intrusive".into(), "Felsic".into(), "Mafic".into()],
            heights: vec![2000.0, 2500.0, 3000.0],
            densities: vec![2.65, 2.5, 2.4],
            mag_sus: vec![0.0015, 0.0012, 0.0018],
        }
    }

    #[test]
    fn test_bulk_document_structure() {
        let faults = vec![sample_fault(), sample_fault()];
        let text = render_fault_model_dated(
            &faults,
            &sample_strat(),
            &BulkOptions::default(),
            "6/8/2026 12:0:0",
        );

        assert!(text.contains("No of Events\t= 3"));
        assert!(text.contains("Event #1\t= STRATIGRAPHY"));
        assert!(text.contains("Event #2\t= FAULT"));
        assert!(text.contains("Event #3\t= FAULT"));
        assert!(text.contains("    Num Points    = 3"));
        assert!(text.contains(" \t\tPoint X = 314.00000"));
        assert!(text.contains("    Slip    = 96.00000"));
        assert!(text.contains("    Join Type     = LINES"));
        assert!(text.contains("Geology Cube Size    =  150"));
        assert!(text.contains("Origin Z    = 4000"));
        assert!(!text.contains('$'));
    }

    #[test]
    fn test_bulk_output_parses_back() {
        let faults = vec![sample_fault()];
        let text = render_fault_model_dated(
            &faults,
            &sample_strat(),
            &BulkOptions::default(),
            "6/8/2026 12:0:0",
        );

        let doc = Document::parse(&text).unwrap();
        assert_eq!(doc.n_events(), 2);
        assert_eq!(doc.event(1).unwrap().event_type(), EventType::Stratigraphy);
        assert_eq!(doc.event(1).unwrap().layers().len(), 3);
        assert_eq!(doc.event(2).unwrap().event_type(), EventType::Fault);
        assert_eq!(
            doc.event(2).unwrap().properties().get_f64("Dip"),
            Some(70.0)
        );
        assert_eq!(doc.cube_size(CubeKind::Geophysics).unwrap(), 150.0);
        assert_eq!(doc.extent().unwrap(), (9000.0, 9400.0, 4000.0));
    }
}
