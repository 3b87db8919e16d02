//! Event type tags
//!
//! A history document is an ordered sequence of geological events. Each
//! event header line declares a type tag; the tag selects the decoder and
//! the builder template for that event.

use std::fmt;

/// Geological event type classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Stratigraphy,
    Fault,
    Fold,
    Unconformity,
    Tilt,
    Dyke,
    Plug,
    Strain,
    Shear,
}

/// All event types, in tag-matching precedence order.
///
/// `SHEAR_ZONE` must be tested before plain substring matches that could
/// shadow it; the order here is the one the header matcher applies.
const TAG_ORDER: [(EventType, &str); 9] = [
    (EventType::Fault, "FAULT"),
    (EventType::Shear, "SHEAR_ZONE"),
    (EventType::Fold, "FOLD"),
    (EventType::Unconformity, "UNCONFORMITY"),
    (EventType::Stratigraphy, "STRATIGRAPHY"),
    (EventType::Tilt, "TILT"),
    (EventType::Dyke, "DYKE"),
    (EventType::Plug, "PLUG"),
    (EventType::Strain, "STRAIN"),
];

impl EventType {
    /// Match a raw type string from an `Event #N = TYPE` header line.
    ///
    /// Matching is by substring, tolerant of surrounding whitespace and
    /// version suffixes some writers append to the tag.
    pub fn from_tag(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        TAG_ORDER
            .iter()
            .find(|(_, tag)| raw.contains(tag))
            .map(|(ty, _)| *ty)
    }

    /// The canonical tag written into the event header line.
    pub fn as_tag(self) -> &'static str {
        match self {
            EventType::Stratigraphy => "STRATIGRAPHY",
            EventType::Fault => "FAULT",
            EventType::Fold => "FOLD",
            EventType::Unconformity => "UNCONFORMITY",
            EventType::Tilt => "TILT",
            EventType::Dyke => "DYKE",
            EventType::Plug => "PLUG",
            EventType::Strain => "STRAIN",
            EventType::Shear => "SHEAR_ZONE",
        }
    }

    /// Does this variant carry a stratigraphic layer list?
    pub fn has_layers(self) -> bool {
        matches!(self, EventType::Stratigraphy | EventType::Unconformity)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
