//! Typed event records
//!
//! An [`Event`] owns the raw line span it was decoded from plus a property
//! map of every recognized `label = value` line. Mutation goes through the
//! map and marks the touched slot dirty; the raw lines stay untouched until
//! the codec re-encodes, so an unmutated event reproduces its source bytes
//! exactly.

use std::collections::HashMap;

use terrane_core::{EventType, PropValue};

use crate::template;

/// One recognized field line: where it lives and what it currently holds.
#[derive(Clone, Debug)]
pub(crate) struct Slot {
    /// Line index within the owning span; `None` for properties assigned by
    /// a caller that have no anchor line and therefore never serialize.
    pub line: Option<usize>,
    pub value: PropValue,
    pub dirty: bool,
}

/// First-occurrence property map over a raw line span
///
/// Duplicate labels after the first (boilerplate profile blocks repeat
/// `Name`, `Type`, `Point X`, …) are literal passthrough: they stay in the
/// raw lines and are not indexed here.
#[derive(Clone, Debug, Default)]
pub struct Properties {
    slots: HashMap<String, Slot>,
}

impl Properties {
    pub(crate) fn new() -> Self {
        Properties::default()
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.slots.get(name).map(|slot| &slot.value)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(PropValue::as_f64)
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropValue::as_text)
    }

    /// Assign a property value, marking it for rewrite on the next encode.
    ///
    /// Assigning a label with no anchor line is allowed but inert: the value
    /// is visible through the map yet has nowhere to serialize.
    pub fn set(&mut self, name: &str, value: impl Into<PropValue>) {
        let value = value.into();
        match self.slots.get_mut(name) {
            Some(slot) => {
                slot.value = value;
                slot.dirty = true;
            }
            None => {
                tracing::debug!(property = name, "assigning property with no anchor line");
                self.slots.insert(
                    name.to_string(),
                    Slot {
                        line: None,
                        value,
                        dirty: true,
                    },
                );
            }
        }
    }

    /// Add a delta to a numeric property. Returns false (and changes
    /// nothing) when the property is absent or non-numeric.
    pub fn nudge(&mut self, name: &str, delta: f64) -> bool {
        match self.slots.get_mut(name) {
            Some(slot) => match slot.value {
                PropValue::Float(v) => {
                    slot.value = PropValue::Float(v + delta);
                    slot.dirty = true;
                    true
                }
                PropValue::Text(_) => false,
            },
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Record a decoded field line. First occurrence wins.
    pub(crate) fn insert_decoded(&mut self, name: &str, line: usize, value: PropValue) {
        self.slots.entry(name.to_string()).or_insert(Slot {
            line: Some(line),
            value,
            dirty: false,
        });
    }

    pub(crate) fn dirty_slots(&self) -> impl Iterator<Item = (&str, &Slot)> {
        self.slots
            .iter()
            .filter(|(_, slot)| slot.dirty)
            .map(|(name, slot)| (name.as_str(), slot))
    }

    pub(crate) fn any_dirty(&self) -> bool {
        self.slots.values().any(|slot| slot.dirty)
    }

    pub(crate) fn clear_dirty(&mut self) {
        for slot in self.slots.values_mut() {
            slot.dirty = false;
        }
    }
}

/// Fallback density for layers that do not carry one
pub const DEFAULT_LAYER_DENSITY: f64 = 4.0;

/// One stratigraphic unit of a Stratigraphy or Unconformity event
///
/// A layer is a property map scoped to one `Unit Name` block; its line
/// anchors are relative to the owning event's span.
#[derive(Clone, Debug, Default)]
pub struct Layer {
    properties: Properties,
}

impl Layer {
    pub(crate) fn from_properties(properties: Properties) -> Self {
        Layer { properties }
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    pub fn name(&self) -> Option<&str> {
        self.properties.get_text("Unit Name")
    }

    /// Running-sum height of this unit's top within the event's column.
    pub fn cumulative_height(&self) -> Option<f64> {
        self.properties.get_f64("Height")
    }

    pub fn density(&self) -> f64 {
        self.properties
            .get_f64("Density")
            .unwrap_or(DEFAULT_LAYER_DENSITY)
    }

    pub fn magnetic_susceptibility(&self) -> f64 {
        self.properties.get_f64("MagSusX").unwrap_or(0.0)
    }

    /// Display color, defaulted to the template color when absent.
    pub fn color(&self) -> (u8, u8, u8) {
        let channel = |name: &str, default: u8| {
            self.properties
                .get_f64(name)
                .map(|v| v.clamp(0.0, 255.0) as u8)
                .unwrap_or(default)
        };
        (channel("Red", 0), channel("Green", 153), channel("Blue", 48))
    }
}

/// One geological event in the modeled timeline
#[derive(Clone, Debug)]
pub struct Event {
    order: u32,
    event_type: EventType,
    /// Raw span, `lines[0]` being the embedded `Event #N = TYPE` header.
    pub(crate) lines: Vec<String>,
    pub(crate) properties: Properties,
    pub(crate) layers: Vec<Layer>,
}

impl Event {
    pub(crate) fn new(
        order: u32,
        event_type: EventType,
        lines: Vec<String>,
        properties: Properties,
        layers: Vec<Layer>,
    ) -> Self {
        Event {
            order,
            event_type,
            lines,
            properties,
            layers,
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    /// The last-encoded textual form of this event.
    pub fn raw_lines(&self) -> &[String] {
        &self.lines
    }

    /// Renumber this event, rewriting the embedded header line.
    ///
    /// A no-op when the order is unchanged, so untouched events keep their
    /// source header bytes.
    pub(crate) fn set_order(&mut self, order: u32) {
        if self.order == order {
            return;
        }
        self.order = order;
        self.write_header_line();
    }

    pub(crate) fn write_header_line(&mut self) {
        let header = template::event_header_line(self.order, self.event_type.as_tag());
        if self.lines.is_empty() {
            self.lines.push(header);
        } else {
            self.lines[0] = header;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_properties() -> Properties {
        let mut props = Properties::new();
        props.insert_decoded("Dip", 3, PropValue::Float(60.0));
        props.insert_decoded("Movement", 4, PropValue::Text("Hanging Wall".into()));
        props
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut props = sample_properties();
        props.insert_decoded("Dip", 9, PropValue::Float(45.0));
        assert_eq!(props.get_f64("Dip"), Some(60.0));
    }

    #[test]
    fn test_set_marks_dirty() {
        let mut props = sample_properties();
        assert!(!props.any_dirty());
        props.set("Dip", 75.0);
        assert!(props.any_dirty());
        assert_eq!(props.get_f64("Dip"), Some(75.0));
    }

    #[test]
    fn test_nudge_numeric_only() {
        let mut props = sample_properties();
        assert!(props.nudge("Dip", -10.0));
        assert_eq!(props.get_f64("Dip"), Some(50.0));
        assert!(!props.nudge("Movement", 1.0));
        assert!(!props.nudge("Slip", 1.0));
    }

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::default();
        assert_eq!(layer.density(), DEFAULT_LAYER_DENSITY);
        assert_eq!(layer.color(), (0, 153, 48));
        assert!(layer.name().is_none());
    }

    #[test]
    fn test_set_order_rewrites_header() {
        let mut event = Event::new(
            2,
            EventType::Fault,
            vec!["Event #2\t= FAULT".to_string(), "\tDip\t= 60.0".to_string()],
            Properties::new(),
            Vec::new(),
        );
        event.set_order(5);
        assert_eq!(event.raw_lines()[0], "Event #5\t= FAULT");
        assert_eq!(event.order(), 5);
    }

    #[test]
    fn test_set_order_noop_preserves_bytes() {
        let original = "Event  #2 =  FAULT".to_string();
        let mut event = Event::new(
            2,
            EventType::Fault,
            vec![original.clone()],
            Properties::new(),
            Vec::new(),
        );
        event.set_order(2);
        assert_eq!(event.raw_lines()[0], original);
    }
}
