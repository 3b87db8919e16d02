//! Event codec
//!
//! Decoding turns an event's raw line span into a typed [`Event`]: every
//! `label = value` line feeds the property map, and for layer-bearing
//! variants the repeated `Unit Name` blocks become [`Layer`] records
//! checked against the declared `Num Layers` count. Encoding is the
//! inverse: only dirty slots are rewritten, each preserving the label
//! segment of its line, so untouched text survives byte-for-byte.

use terrane_core::{EventType, PropValue, TerraneError, TerraneResult};

use crate::event::{Event, Layer, Properties, Slot};
use crate::template;

/// How layer-count mismatches are treated during decode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Mismatch fails the event with a `LayerCount` error
    Strict,
    /// Mismatch is logged and the layers found are kept
    #[default]
    Lenient,
}

/// Decode a raw line span into a typed event.
pub(crate) fn decode(
    event_type: EventType,
    order: u32,
    lines: Vec<String>,
    mode: DecodeMode,
) -> TerraneResult<Event> {
    let mut properties = Properties::new();
    for (i, line) in lines.iter().enumerate() {
        // The order header is structural, owned by the renumbering logic.
        if line.trim_start().starts_with("Event #") {
            continue;
        }
        if let Some((label, value)) = split_field(line) {
            properties.insert_decoded(label, i, value);
        }
    }

    let layers = if event_type.has_layers() {
        decode_layers(&lines, &properties, order, mode)?
    } else {
        Vec::new()
    };

    Ok(Event::new(order, event_type, lines, properties, layers))
}

/// Split a `label = value` line at its first `=`, trimming tabs and spaces
/// around the label. Lines without `=` or with an empty label are not
/// fields.
fn split_field(line: &str) -> Option<(&str, PropValue)> {
    let (label, value) = line.split_once('=')?;
    let label = label.trim();
    if label.is_empty() {
        return None;
    }
    Some((label, PropValue::parse(value)))
}

fn decode_layers(
    lines: &[String],
    properties: &Properties,
    order: u32,
    mode: DecodeMode,
) -> TerraneResult<Vec<Layer>> {
    let declared = properties.get_f64("Num Layers").map(|v| v as usize);

    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| {
            split_field(line).is_some_and(|(label, _)| label == "Unit Name")
        })
        .map(|(i, _)| i)
        .collect();

    if let Some(declared) = declared {
        if declared != starts.len() {
            match mode {
                DecodeMode::Strict => {
                    return Err(TerraneError::LayerCount {
                        order,
                        declared,
                        found: starts.len(),
                    })
                }
                DecodeMode::Lenient => tracing::warn!(
                    order,
                    declared,
                    found = starts.len(),
                    "layer count mismatch, keeping the layers found"
                ),
            }
        }
    }

    let mut layers = Vec::with_capacity(starts.len());
    for (idx, &start) in starts.iter().enumerate() {
        let end = starts.get(idx + 1).copied().unwrap_or(lines.len());
        let mut props = Properties::new();
        for (i, line) in lines[start..end].iter().enumerate() {
            if let Some((label, value)) = split_field(line) {
                props.insert_decoded(label, start + i, value);
            }
        }
        layers.push(Layer::from_properties(props));
    }
    Ok(layers)
}

/// Re-encode an event in place: rewrite every dirty slot's line, leaving
/// all other bytes of the span untouched, and clear the dirty flags.
///
/// Boilerplate sections (profile curves, Fourier terms, graph metadata)
/// have no slots pointing at them and ride along verbatim; nothing is
/// fabricated or dropped.
pub(crate) fn encode(event: &mut Event) {
    if event.properties.any_dirty() || event.layers.iter().any(|l| l.properties().any_dirty()) {
        let mut lines = std::mem::take(&mut event.lines);
        rewrite_dirty(&mut lines, &event.properties);
        for layer in &event.layers {
            rewrite_dirty(&mut lines, layer.properties());
        }
        event.lines = lines;

        event.properties.clear_dirty();
        for layer in event.layers_mut() {
            layer.properties_mut().clear_dirty();
        }
    }
}

fn rewrite_dirty(lines: &mut [String], properties: &Properties) {
    for (label, slot) in properties.dirty_slots() {
        let Some(index) = slot.line else { continue };
        if let Some(line) = lines.get_mut(index) {
            *line = rewrite_line(line, label, slot);
        }
    }
}

/// Rebuild a field line around its preserved label segment.
fn rewrite_line(line: &str, label: &str, slot: &Slot) -> String {
    match line.split_once('=') {
        Some((prefix, _)) => {
            let rendered = template::field_format(label).render(&slot.value);
            format!("{prefix}= {rendered}")
        }
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    fn fault_span() -> Vec<String> {
        lines(&[
            "Event #2\t= FAULT",
            "\tGeometry\t= Translation",
            "\tX\t=   1000.0",
            "\tDip\t=  60.0",
            "\tSlip\t= 500.0",
            "\tName\t= Fault Plane",
            "\tName\t= my_fault",
        ])
    }

    fn strat_span(declared: usize) -> Vec<String> {
        let mut span = lines(&[
            "Event #1\t= STRATIGRAPHY",
            &format!("\tNum Layers\t= {declared}"),
        ]);
        for (name, height) in [("base", 100.0), ("cover", 300.0)] {
            span.push(format!("\tUnit Name\t= {name}"));
            span.push(format!("\tHeight\t= {height:.1}"));
            span.push("\tDensity\t= 4.000000e+00".to_string());
        }
        span.push("\tName\t= Strat".to_string());
        span
    }

    #[test]
    fn test_decode_extracts_properties() {
        let event = decode(EventType::Fault, 2, fault_span(), DecodeMode::Lenient).unwrap();
        assert_eq!(event.properties().get_f64("X"), Some(1000.0));
        assert_eq!(event.properties().get_f64("Dip"), Some(60.0));
        assert_eq!(
            event.properties().get_text("Geometry"),
            Some("Translation")
        );
    }

    #[test]
    fn test_decode_skips_order_header() {
        let event = decode(EventType::Fault, 2, fault_span(), DecodeMode::Lenient).unwrap();
        assert!(!event.properties().contains("Event #2"));
    }

    #[test]
    fn test_duplicate_labels_first_occurrence_only() {
        let event = decode(EventType::Fault, 2, fault_span(), DecodeMode::Lenient).unwrap();
        assert_eq!(event.properties().get_text("Name"), Some("Fault Plane"));
    }

    #[test]
    fn test_decode_groups_layers() {
        let event = decode(EventType::Stratigraphy, 1, strat_span(2), DecodeMode::Lenient).unwrap();
        assert_eq!(event.layers().len(), 2);
        assert_eq!(event.layers()[0].name(), Some("base"));
        assert_eq!(event.layers()[1].cumulative_height(), Some(300.0));
    }

    #[test]
    fn test_layer_mismatch_strict_fails() {
        let err = decode(EventType::Stratigraphy, 1, strat_span(3), DecodeMode::Strict);
        assert!(matches!(
            err,
            Err(TerraneError::LayerCount {
                order: 1,
                declared: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_layer_mismatch_lenient_keeps_found() {
        let event = decode(EventType::Stratigraphy, 1, strat_span(3), DecodeMode::Lenient).unwrap();
        assert_eq!(event.layers().len(), 2);
    }

    #[test]
    fn test_encode_without_mutation_is_verbatim() {
        let span = fault_span();
        let mut event = decode(EventType::Fault, 2, span.clone(), DecodeMode::Lenient).unwrap();
        encode(&mut event);
        assert_eq!(event.raw_lines(), span.as_slice());
    }

    #[test]
    fn test_encode_rewrites_only_dirty_lines() {
        let span = fault_span();
        let mut event = decode(EventType::Fault, 2, span.clone(), DecodeMode::Lenient).unwrap();
        event.properties_mut().set("Dip", 45.0);
        encode(&mut event);

        assert_eq!(event.raw_lines()[3], "\tDip\t= 45.0");
        // everything else untouched, including the duplicate Name line
        assert_eq!(event.raw_lines()[2], span[2]);
        assert_eq!(event.raw_lines()[6], span[6]);
    }

    #[test]
    fn test_encode_layer_mutation() {
        let mut event =
            decode(EventType::Stratigraphy, 1, strat_span(2), DecodeMode::Lenient).unwrap();
        event.layers_mut()[1].properties_mut().set("Height", 350.0);
        encode(&mut event);
        assert_eq!(event.raw_lines()[6], "\tHeight\t= 350.0");
        assert_eq!(event.raw_lines()[3], "\tHeight\t= 100.0");
    }

    #[test]
    fn test_scientific_field_rewrite() {
        let mut event =
            decode(EventType::Stratigraphy, 1, strat_span(2), DecodeMode::Lenient).unwrap();
        event.layers_mut()[0]
            .properties_mut()
            .set("Density", 2.65);
        encode(&mut event);
        assert_eq!(event.raw_lines()[4], "\tDensity\t= 2.650000e+00");
    }
}
