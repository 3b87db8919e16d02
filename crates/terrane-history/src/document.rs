//! The document aggregate
//!
//! A [`Document`] owns the ordered event collection, the header metadata,
//! and the verbatim footer of one history file. Parsing goes through the
//! anchor scanner and the event codec; serialization regenerates the
//! header, recomputes the event count from the live collection, re-encodes
//! every event in ascending order, and appends the footer.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use terrane_core::{EventType, PropValue, TerraneError, TerraneResult};

use crate::build::{self, Params};
use crate::codec::{self, DecodeMode};
use crate::event::Event;
use crate::footer::{CubeKind, Footer};
use crate::scan;
use crate::template;

/// Options for [`Document::parse_with`]
#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    pub decode_mode: DecodeMode,
}

/// Addresses one value inside an event for batched parameter updates
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParamKey {
    /// An event-level property by label
    Event(String),
    /// A property of the i-th stratigraphic layer
    Layer(usize, String),
}

impl ParamKey {
    pub fn event(name: &str) -> Self {
        ParamKey::Event(name.to_string())
    }

    pub fn layer(index: usize, name: &str) -> Self {
        ParamKey::Layer(index, name.to_string())
    }
}

/// Nested update batch: order number → assignments
pub type ParamUpdates<V> = BTreeMap<u32, Vec<(ParamKey, V)>>;

/// Options for deriving a 1-D drill-hole variant
#[derive(Clone, Copy, Debug)]
pub struct DrillholeOptions {
    /// Cell size along the profile, in meters
    pub resolution: f64,
    /// Minimum depth; the model origin depth when absent
    pub z_min: Option<f64>,
    /// Maximum depth; the model z-extent when absent
    pub z_max: Option<f64>,
}

impl Default for DrillholeOptions {
    fn default() -> Self {
        DrillholeOptions {
            resolution: 1.0,
            z_min: None,
            z_max: None,
        }
    }
}

/// One history document
#[derive(Clone, Debug)]
pub struct Document {
    filename: String,
    date_saved: String,
    events: BTreeMap<u32, Event>,
    footer: Footer,
    /// Monotonic order source for `add_event`; never reused after deletion.
    next_order: u32,
}

impl Document {
    /// A fresh document with no events and the canonical default footer.
    pub fn new(filename: &str) -> Self {
        Document {
            filename: filename.to_string(),
            date_saved: String::new(),
            events: BTreeMap::new(),
            footer: Footer::from_template(),
            next_order: 0,
        }
    }

    /// Parse a document with lenient layer handling.
    pub fn parse(text: &str) -> TerraneResult<Self> {
        Self::parse_with(text, ParseOptions::default())
    }

    /// Parse a document.
    ///
    /// Structural failures (no event-count line) abort the load. Per-event
    /// failures degrade: events of types with no registered decoder are
    /// dropped with a warning, as are events that fail strict layer checks.
    /// A missing footer is replaced by the canonical template.
    pub fn parse_with(text: &str, options: ParseOptions) -> TerraneResult<Self> {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let layout = scan::scan(&lines)?;
        tracing::debug!(
            count_line = layout.count_line,
            declared = layout.declared_count,
            headers = layout.events.len(),
            "scanned document layout"
        );

        let filename = header_value(&lines, 0);
        let date_saved = header_value(&lines, 1);

        let footer = match layout.footer_start {
            Some(i) => Footer::from_lines(lines[i..].to_vec()),
            None => {
                tracing::warn!("document has no settings block, using the default footer");
                Footer::from_template()
            }
        };

        let mut events = BTreeMap::new();
        for raw in &layout.events {
            let Some(event_type) = EventType::from_tag(&raw.raw_type) else {
                tracing::warn!(
                    order = raw.order,
                    raw_type = raw.raw_type.trim(),
                    "event type has no registered decoder, dropping event"
                );
                continue;
            };
            let span = lines[raw.start..=raw.end].to_vec();
            match codec::decode(event_type, raw.order, span, options.decode_mode) {
                Ok(event) => {
                    if events.insert(raw.order, event).is_some() {
                        tracing::warn!(order = raw.order, "duplicate order number, keeping the later event");
                    }
                }
                Err(e) => tracing::warn!(order = raw.order, error = %e, "dropping undecodable event"),
            }
        }

        if layout.declared_count != events.len() {
            tracing::debug!(
                declared = layout.declared_count,
                loaded = events.len(),
                "declared event count differs from loaded events"
            );
        }

        let next_order = events.keys().next_back().copied().unwrap_or(0);
        Ok(Document {
            filename,
            date_saved,
            events,
            footer,
            next_order,
        })
    }

    /// Read and parse a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> TerraneResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Serialize and write to disk, stamping the current time.
    pub fn write_to(&mut self, path: impl AsRef<Path>) -> TerraneResult<()> {
        let text = self.serialize();
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Save timestamp of the source document, or of the last serialization.
    pub fn date_saved(&self) -> &str {
        &self.date_saved
    }

    pub fn n_events(&self) -> usize {
        self.events.len()
    }

    pub fn events(&self) -> impl Iterator<Item = (u32, &Event)> {
        self.events.iter().map(|(order, event)| (*order, event))
    }

    pub fn event(&self, order: u32) -> Option<&Event> {
        self.events.get(&order)
    }

    pub fn event_mut(&mut self, order: u32) -> Option<&mut Event> {
        self.events.get_mut(&order)
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    // --- global settings, delegated to the footer editor ---

    pub fn origin(&self) -> TerraneResult<(f64, f64, f64)> {
        self.footer.origin()
    }

    pub fn set_origin(&mut self, x: f64, y: f64, z: f64) -> TerraneResult<()> {
        self.footer.set_origin(x, y, z)
    }

    pub fn extent(&self) -> TerraneResult<(f64, f64, f64)> {
        self.footer.extent()
    }

    pub fn set_extent(&mut self, x: f64, y: f64, z: f64) -> TerraneResult<()> {
        self.footer.set_extent(x, y, z)
    }

    pub fn cube_size(&self, kind: CubeKind) -> TerraneResult<f64> {
        self.footer.cube_size(kind)
    }

    /// Set the isotropic cell size; the geology and geophysics cube sizes
    /// are always kept identical.
    pub fn change_cube_size(&mut self, size: f64) {
        self.footer.set_cube_size(size);
    }

    // --- event collection operations ---

    /// Exchange the events at two order numbers and renumber their
    /// embedded headers. Properties and layers travel with the records;
    /// only positional identity changes.
    pub fn swap_events(&mut self, a: u32, b: u32) -> TerraneResult<()> {
        if a == b {
            return Ok(());
        }
        let Some(mut event_a) = self.events.remove(&a) else {
            return Err(TerraneError::UnknownReference(a));
        };
        let Some(mut event_b) = self.events.remove(&b) else {
            self.events.insert(a, event_a);
            return Err(TerraneError::UnknownReference(b));
        };
        event_a.set_order(b);
        event_b.set_order(a);
        self.events.insert(b, event_a);
        self.events.insert(a, event_b);
        Ok(())
    }

    /// Apply a caller-supplied permutation `{old_order → new_order}`.
    ///
    /// Old orders absent from the event set are reported and skipped;
    /// every moved event is renumbered afterwards.
    pub fn reorder_events(&mut self, mapping: &BTreeMap<u32, u32>) {
        let mut reordered = self.events.clone();
        for (&old, &new) in mapping {
            match self.events.get(&old) {
                Some(event) => {
                    reordered.insert(new, event.clone());
                }
                None => {
                    tracing::warn!(order = old, "reorder references an unknown event, skipping");
                }
            }
        }
        self.events = reordered;
        self.renumber_events();
    }

    fn renumber_events(&mut self) {
        for (&order, event) in &mut self.events {
            event.set_order(order);
        }
    }

    /// Absolute batched parameter assignment.
    ///
    /// Unknown order numbers, layer indices, or non-numeric relative
    /// targets are reported and skipped; the rest of the batch proceeds.
    pub fn set_event_params(&mut self, updates: &ParamUpdates<PropValue>) {
        self.apply_params(updates, |props, name, value| {
            props.set(name, value.clone());
            true
        });
    }

    /// Relative batched parameter update: each value is added to the
    /// current numeric value of its target.
    pub fn change_event_params(&mut self, changes: &ParamUpdates<f64>) {
        self.apply_params(changes, |props, name, delta| props.nudge(name, *delta));
    }

    fn apply_params<V>(
        &mut self,
        updates: &ParamUpdates<V>,
        mut apply: impl FnMut(&mut crate::event::Properties, &str, &V) -> bool,
    ) {
        for (&order, assignments) in updates {
            let Some(event) = self.events.get_mut(&order) else {
                tracing::warn!(order, "parameter update references an unknown event, skipping");
                continue;
            };
            for (key, value) in assignments {
                let applied = match key {
                    ParamKey::Event(name) => apply(event.properties_mut(), name, value),
                    ParamKey::Layer(index, name) => match event.layers_mut().get_mut(*index) {
                        Some(layer) => apply(layer.properties_mut(), name, value),
                        None => {
                            tracing::warn!(order, index, "no such layer, skipping");
                            continue;
                        }
                    },
                };
                if !applied {
                    tracing::warn!(order, key = ?key, "parameter not applicable, skipping");
                }
            }
        }
    }

    /// Remove an event from the timeline.
    ///
    /// The order source is not rewound: later additions never reuse the
    /// freed order number.
    pub fn remove_event(&mut self, order: u32) -> TerraneResult<Event> {
        self.events
            .remove(&order)
            .ok_or(TerraneError::UnknownReference(order))
    }

    /// All properties of one event, when it exists.
    pub fn get_event_params(&self, order: u32) -> Option<&crate::event::Properties> {
        let props = self.events.get(&order).map(Event::properties);
        if props.is_none() {
            tracing::warn!(order, "no event with this order number");
        }
        props
    }

    /// One property of one event; `None` for unknown orders or labels.
    pub fn get_event_param(&self, order: u32, name: &str) -> Option<&PropValue> {
        self.get_event_params(order)?.get(name)
    }

    /// Build a new event from a parameter mapping and insert it at the
    /// next implicit order number, which is returned.
    ///
    /// The order source is monotonic and independent of gaps left by
    /// earlier deletions. Builder failures leave the document unchanged.
    pub fn add_event(&mut self, event_type: EventType, params: &Params) -> TerraneResult<u32> {
        let top_z = self.extent().ok().map(|(_, _, z)| z);
        let mut lines = build::build_event(event_type, params, top_z)?;
        let order = self.next_order + 1;
        lines[0] = template::event_header_line(order, event_type.as_tag());
        let event = codec::decode(event_type, order, lines, DecodeMode::Lenient)?;
        self.events.insert(order, event);
        self.next_order = order;
        Ok(order)
    }

    /// Serialize, stamping the current local time as the save timestamp.
    pub fn serialize(&mut self) -> String {
        self.serialize_dated(&template::current_timestamp())
    }

    /// Serialize with a caller-supplied save timestamp.
    ///
    /// The header is regenerated, the event-count line is recomputed from
    /// the live collection, events are re-encoded in ascending order, and
    /// a blank separator line is inserted before the footer marker when
    /// one is not already present.
    pub fn serialize_dated(&mut self, date_saved: &str) -> String {
        self.date_saved = date_saved.to_string();

        let mut out = template::render_header(&self.filename, date_saved);
        out.push(format!("No of Events\t= {}", self.events.len()));
        for event in self.events.values_mut() {
            codec::encode(event);
            out.extend(event.raw_lines().iter().cloned());
        }
        for line in self.footer.lines() {
            if line.contains("BlockOptions") && out.last().map(String::as_str) != Some("") {
                out.push(String::new());
            }
            out.push(line.clone());
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }

    /// Deep-copied variant prepared for a 1-D drill-hole run at `(x, y)`:
    /// a one-cell column from `z_min` to `z_max` at the requested
    /// resolution.
    pub fn derive_drillhole(
        &self,
        x: f64,
        y: f64,
        options: &DrillholeOptions,
    ) -> TerraneResult<Document> {
        let (_, _, origin_z) = self.origin()?;
        let (_, _, extent_z) = self.extent()?;
        let z_min = options.z_min.unwrap_or(origin_z);
        let z_max = options.z_max.unwrap_or(extent_z);
        let resolution = options.resolution;

        let mut variant = self.clone();
        variant.set_origin(x, y, z_min)?;
        variant.set_extent(resolution, resolution, z_max)?;
        variant.change_cube_size(resolution);
        Ok(variant)
    }

    /// Human-readable model summary.
    pub fn info_string(&self) -> String {
        let mut out = String::new();
        let rule = "*".repeat(60);
        let _ = writeln!(out, "{rule}\n\t\t\tModel Information\n{rule}\n");

        if self.events.is_empty() {
            out.push_str("The model does not yet contain any events\n");
        } else {
            let _ = writeln!(out, "This model consists of {} events:", self.events.len());
            for (order, event) in &self.events {
                let _ = writeln!(out, "\t({order}) - {}", event.event_type());
            }
        }

        if let (Ok((ox, oy, oz)), Ok((ex, ey, ez)), Ok(cube)) = (
            self.origin(),
            self.extent(),
            self.cube_size(CubeKind::Geophysics),
        ) {
            let _ = writeln!(out, "The model extent is:");
            let _ = writeln!(out, "\tx - {ex:.1} m");
            let _ = writeln!(out, "\ty - {ey:.1} m");
            let _ = writeln!(out, "\tz - {ez:.1} m");
            let _ = writeln!(out, "Number of cells in each direction:");
            let _ = writeln!(out, "\tnx = {}", (ex / cube) as i64);
            let _ = writeln!(out, "\tny = {}", (ey / cube) as i64);
            let _ = writeln!(out, "\tnz = {}", (ez / cube) as i64);
            let _ = writeln!(out, "The model origin is located at: \n\t({ox:.1}, {oy:.1}, {oz:.1})");
            let _ = writeln!(out, "The cubesize for model export is: \n\t{cube} m");
        }

        let _ = writeln!(out, "\n\n{rule}\n\t\t\tMeta Data\n{rule}\n");
        let _ = writeln!(out, "The filename of the model is:\n\t{}", self.filename);
        let _ = writeln!(
            out,
            "It was last saved (if origin was a history file!) at:\n\t{}",
            self.date_saved
        );
        out
    }
}

fn header_value(lines: &[String], index: usize) -> String {
    lines
        .get(index)
        .and_then(|line| scan::value_after_eq(line))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::Position;

    const DATE: &str = "6/8/2026 12:0:0";

    fn strat_params() -> Params {
        Params::new()
            .with("layer_names", vec!["base", "mid", "top"])
            .with("layer_thickness", vec![100.0, 200.0, 150.0])
    }

    fn fault_params(name: &str) -> Params {
        Params::new()
            .with("name", name)
            .with("pos", Position::new(1000.0, 2000.0, 3000.0))
            .with("dip_dir", 45.0)
            .with("dip", 60.0)
            .with("slip", 500.0)
    }

    fn two_event_document() -> Document {
        let mut doc = Document::new("two_events.his");
        doc.add_event(EventType::Stratigraphy, &strat_params()).unwrap();
        doc.add_event(EventType::Fault, &fault_params("f1")).unwrap();
        doc
    }

    #[test]
    fn test_roundtrip_byte_for_byte() {
        let mut doc = two_event_document();
        let text = doc.serialize_dated(DATE);

        let mut reparsed = Document::parse(&text).unwrap();
        assert_eq!(reparsed.n_events(), 2);
        assert_eq!(reparsed.serialize_dated(DATE), text);
    }

    #[test]
    fn test_serialize_idempotent() {
        let mut doc = two_event_document();
        let once = doc.serialize_dated(DATE);
        let twice = Document::parse(&once).unwrap().serialize_dated(DATE);
        let thrice = Document::parse(&twice).unwrap().serialize_dated(DATE);
        assert_eq!(twice, thrice);
    }

    #[test]
    fn test_missing_separator_is_inserted() {
        let mut doc = two_event_document();
        let text = doc.serialize_dated(DATE);
        // strip the blank separator; parse + serialize restores it
        let stripped = text.replace("\n\n#BlockOptions", "\n#BlockOptions");
        assert_ne!(stripped, text);
        let roundtripped = Document::parse(&stripped).unwrap().serialize_dated(DATE);
        assert_eq!(roundtripped, text);
    }

    #[test]
    fn test_event_count_recomputed() {
        let mut doc = two_event_document();
        let text = doc.serialize_dated(DATE);
        assert!(text.contains("No of Events\t= 2"));

        // a stale declared count is corrected on the next write
        let stale = text.replace("No of Events\t= 2", "No of Events\t= 9");
        let rewritten = Document::parse(&stale).unwrap().serialize_dated(DATE);
        assert!(rewritten.contains("No of Events\t= 2"));
    }

    #[test]
    fn test_unsupported_event_type_dropped() {
        // a third event of an unregistered type sits before the footer
        let mut doc = two_event_document();
        let text = doc
            .serialize_dated(DATE)
            .replace("No of Events\t= 2", "No of Events\t= 3")
            .replace(
                "\n\n#BlockOptions",
                "\nEvent #3\t= IMPORT\n\tFile\t= grid.dat\n\n#BlockOptions",
            );

        let doc = Document::parse(&text).unwrap();
        assert_eq!(doc.n_events(), 2);
        assert!(doc.event(3).is_none());
    }

    #[test]
    fn test_swap_involution() {
        let mut doc = two_event_document();
        let dip_before = doc.get_event_param(2, "Dip").cloned();

        doc.swap_events(1, 2).unwrap();
        assert_eq!(doc.event(1).unwrap().event_type(), EventType::Fault);
        assert_eq!(doc.event(2).unwrap().event_type(), EventType::Stratigraphy);
        assert_eq!(
            doc.event(1).unwrap().raw_lines()[0],
            "Event #1\t= FAULT"
        );

        doc.swap_events(1, 2).unwrap();
        assert_eq!(doc.event(2).unwrap().event_type(), EventType::Fault);
        assert_eq!(doc.get_event_param(2, "Dip").cloned(), dip_before);
        assert_eq!(
            doc.event(2).unwrap().raw_lines()[0],
            "Event #2\t= FAULT"
        );
    }

    #[test]
    fn test_swap_unknown_reference() {
        let mut doc = two_event_document();
        assert!(matches!(
            doc.swap_events(1, 9),
            Err(TerraneError::UnknownReference(9))
        ));
        assert_eq!(doc.n_events(), 2);
    }

    #[test]
    fn test_reorder_events() {
        let mut doc = Document::new("r.his");
        doc.add_event(EventType::Stratigraphy, &strat_params()).unwrap();
        doc.add_event(EventType::Fault, &fault_params("f1")).unwrap();
        doc.add_event(EventType::Fault, &fault_params("f2")).unwrap();

        let mapping = BTreeMap::from([(1, 2), (2, 3), (3, 1)]);
        doc.reorder_events(&mapping);

        assert_eq!(doc.event(2).unwrap().event_type(), EventType::Stratigraphy);
        assert_eq!(doc.event(1).unwrap().event_type(), EventType::Fault);
        assert_eq!(doc.event(1).unwrap().raw_lines()[0], "Event #1\t= FAULT");
    }

    #[test]
    fn test_reorder_skips_unknown_keys() {
        let mut doc = two_event_document();
        let mapping = BTreeMap::from([(7, 1)]);
        doc.reorder_events(&mapping);
        assert_eq!(doc.n_events(), 2);
        assert_eq!(doc.event(1).unwrap().event_type(), EventType::Stratigraphy);
    }

    #[test]
    fn test_cube_size_consistency() {
        let mut doc = two_event_document();
        doc.change_cube_size(150.0);
        assert_eq!(doc.cube_size(CubeKind::Geology).unwrap(), 150.0);
        assert_eq!(doc.cube_size(CubeKind::Geophysics).unwrap(), 150.0);
    }

    #[test]
    fn test_fault_at_top_uses_extent() {
        let mut doc = Document::new("top.his");
        // template footer: Length Z = 5000.00
        let params = fault_params("surface_fault").with("pos", Position::at_top(0.0, 0.0));
        let order = doc.add_event(EventType::Fault, &params).unwrap();

        let event = doc.event(order).unwrap();
        assert_eq!(event.properties().get_f64("Z"), Some(5000.0));
        assert_eq!(event.properties().get_f64("Dip Direction"), Some(45.0));
    }

    #[test]
    fn test_add_event_counter_ignores_gaps() {
        let mut doc = Document::new("c.his");
        doc.add_event(EventType::Stratigraphy, &strat_params()).unwrap();
        let f = doc.add_event(EventType::Fault, &fault_params("f1")).unwrap();
        assert_eq!(f, 2);

        // a freed order number is never reused
        doc.remove_event(2).unwrap();
        let next = doc.add_event(EventType::Fault, &fault_params("f2")).unwrap();
        assert_eq!(next, 3);

        // parse-resume: the counter continues from the highest order
        let text = doc.serialize_dated(DATE);
        let mut reloaded = Document::parse(&text).unwrap();
        let next = reloaded
            .add_event(EventType::Fault, &fault_params("f3"))
            .unwrap();
        assert_eq!(next, 4);
    }

    #[test]
    fn test_add_event_failure_leaves_document_unchanged(){
        let mut doc = two_event_document();
        let err = doc.add_event(EventType::Fault, &Params::new());
        assert!(matches!(err, Err(TerraneError::MissingParameter(_))));
        assert_eq!(doc.n_events(), 2);

        let order = doc.add_event(EventType::Fault, &fault_params("ok")).unwrap();
        assert_eq!(order, 3);
    }

    #[test]
    fn test_layer_height_monotonicity() {
        let mut doc = Document::new("m.his");
        doc.add_event(EventType::Stratigraphy, &strat_params()).unwrap();

        let heights: Vec<f64> = doc
            .event(1)
            .unwrap()
            .layers()
            .iter()
            .filter_map(|l| l.cumulative_height())
            .collect();
        assert_eq!(heights, vec![100.0, 300.0, 450.0]);
    }

    #[test]
    fn test_set_and_change_event_params() {
        let mut doc = two_event_document();

        let set: ParamUpdates<PropValue> = BTreeMap::from([(
            2,
            vec![(ParamKey::event("Radius"), PropValue::Float(2000.0))],
        )]);
        doc.set_event_params(&set);
        assert_eq!(doc.get_event_param(2, "Radius"), Some(&PropValue::Float(2000.0)));

        let change: ParamUpdates<f64> = BTreeMap::from([
            (2, vec![(ParamKey::event("Radius"), -500.0)]),
            (1, vec![(ParamKey::layer(1, "Height"), 50.0)]),
            (9, vec![(ParamKey::event("Dip"), 1.0)]), // unknown, skipped
        ]);
        doc.change_event_params(&change);
        assert_eq!(doc.get_event_param(2, "Radius"), Some(&PropValue::Float(1500.0)));
        assert_eq!(
            doc.event(1).unwrap().layers()[1].cumulative_height(),
            Some(350.0)
        );
    }

    #[test]
    fn test_mutated_param_survives_roundtrip() {
        let mut doc = two_event_document();
        doc.event_mut(2)
            .unwrap()
            .properties_mut()
            .set("Radius", 2000.0);
        let text = doc.serialize_dated(DATE);

        let reparsed = Document::parse(&text).unwrap();
        assert_eq!(reparsed.get_event_param(2, "Radius"), Some(&PropValue::Float(2000.0)));
    }

    #[test]
    fn test_missing_count_line_is_fatal() {
        assert!(matches!(
            Document::parse("#Filename = x.his\nEvent #1\t= TILT\n\n#BlockOptions\n"),
            Err(TerraneError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_missing_footer_falls_back_to_template() {
        let mut doc = two_event_document();
        let text = doc.serialize_dated(DATE);
        let truncated = text.split("#BlockOptions").next().unwrap();

        let reparsed = Document::parse(truncated).unwrap();
        assert_eq!(reparsed.n_events(), 2);
        assert_eq!(reparsed.extent().unwrap(), (10000.0, 7000.0, 5000.0));
    }

    #[test]
    fn test_deep_copy_isolation() {
        let mut doc = two_event_document();
        let mut copy = doc.clone();
        copy.event_mut(2).unwrap().properties_mut().set("Dip", 10.0);
        copy.change_cube_size(25.0);

        assert_eq!(doc.get_event_param(2, "Dip"), Some(&PropValue::Float(60.0)));
        assert_eq!(doc.cube_size(CubeKind::Geology).unwrap(), 50.0);
        assert_eq!(copy.get_event_param(2, "Dip"), Some(&PropValue::Float(10.0)));
    }

    #[test]
    fn test_derive_drillhole() {
        let doc = two_event_document();
        let variant = doc
            .derive_drillhole(2500.0, 3500.0, &DrillholeOptions::default())
            .unwrap();

        assert_eq!(variant.origin().unwrap(), (2500.0, 3500.0, 5000.0));
        assert_eq!(variant.extent().unwrap(), (1.0, 1.0, 5000.0));
        assert_eq!(variant.cube_size(CubeKind::Geophysics).unwrap(), 1.0);
        // the source document is untouched
        assert_eq!(doc.origin().unwrap(), (0.0, 0.0, 5000.0));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.his");

        let mut doc = two_event_document();
        let text = doc.serialize_dated(DATE);
        doc.write_to(&path).unwrap();

        let mut reloaded = Document::from_path(&path).unwrap();
        assert_eq!(reloaded.n_events(), 2);
        // identical up to the regenerated save timestamp
        assert_eq!(reloaded.serialize_dated(DATE), text);
    }

    #[test]
    fn test_info_string_lists_events() {
        let doc = two_event_document();
        let info = doc.info_string();
        assert!(info.contains("This model consists of 2 events:"));
        assert!(info.contains("(1) - STRATIGRAPHY"));
        assert!(info.contains("(2) - FAULT"));
        assert!(info.contains("two_events.his"));
    }
}
