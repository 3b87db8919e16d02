//! Anchor scanner
//!
//! Locates the structural anchors of a raw document in a single forward
//! pass: the event-count declaration, each `Event #N = TYPE` header with
//! its span, and the footer start marker. Event contents are not
//! interpreted here.

use terrane_core::{TerraneError, TerraneResult};

/// One event span found in the raw line sequence
#[derive(Clone, Debug)]
pub(crate) struct RawEventSpan {
    /// Index of the `Event #` header line
    pub start: usize,
    /// Index of the last line belonging to this event (inclusive)
    pub end: usize,
    /// Declared order number `N`
    pub order: u32,
    /// Declared type string, untrimmed interpretation left to the codec
    pub raw_type: String,
}

/// Structural layout of a raw document
#[derive(Clone, Debug)]
pub(crate) struct Layout {
    /// Index of the `No of Events` line
    pub count_line: usize,
    /// The count that line declares
    pub declared_count: usize,
    pub events: Vec<RawEventSpan>,
    /// Index of the footer marker line; absent in documents that were
    /// generated without a settings block
    pub footer_start: Option<usize>,
}

/// Scan the raw line sequence for structural anchors.
///
/// Fails with `MalformedDocument` when the event-count declaration is
/// missing or unparseable, or when an event header declares no readable
/// order number. A missing footer marker is reported through the layout
/// (`footer_start: None`); the document model decides how to degrade.
pub(crate) fn scan(lines: &[String]) -> TerraneResult<Layout> {
    let mut count_line = None;
    let mut declared_count = None;
    let mut events: Vec<RawEventSpan> = Vec::new();
    let mut footer_start = None;

    for (i, line) in lines.iter().enumerate() {
        if line.contains("No of Events") {
            let declared = value_after_eq(line)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .ok_or_else(|| {
                    TerraneError::MalformedDocument(format!(
                        "unreadable event count in line {}: {line:?}",
                        i + 1
                    ))
                })?;
            count_line = Some(i);
            declared_count = Some(declared);
        } else if line.contains("Event #") {
            events.push(parse_event_header(i, line)?);
        } else if line.contains("BlockOptions") {
            footer_start = Some(i);
            break;
        }
    }

    let (count_line, declared_count) = match (count_line, declared_count) {
        (Some(i), Some(n)) => (i, n),
        _ => {
            return Err(TerraneError::MalformedDocument(
                "no event-count declaration found".to_string(),
            ))
        }
    };

    // Close the spans: each event ends where the next begins. The last one
    // ends at the last non-blank line before the footer marker, which in
    // the standard format sits two lines up (the blank separator between
    // events and footer is not part of any event). Without a footer the
    // last non-blank line of the document closes the final event.
    let starts: Vec<usize> = events.iter().map(|e| e.start).collect();
    for (idx, event) in events.iter_mut().enumerate() {
        event.end = match starts.get(idx + 1) {
            Some(&next_start) => next_start - 1,
            None => match footer_start {
                Some(footer) => last_non_blank(&lines[..footer]).max(event.start),
                None => last_non_blank(lines).max(event.start),
            },
        };
    }

    Ok(Layout {
        count_line,
        declared_count,
        events,
        footer_start,
    })
}

fn parse_event_header(index: usize, line: &str) -> TerraneResult<RawEventSpan> {
    let malformed = |what: &str| {
        TerraneError::MalformedDocument(format!("{what} in event header line {}: {line:?}", index + 1))
    };

    let after_hash = line
        .split_once('#')
        .map(|(_, rest)| rest)
        .ok_or_else(|| malformed("no order number"))?;
    let digits: String = after_hash.chars().take_while(char::is_ascii_digit).collect();
    let order = digits.parse::<u32>().map_err(|_| malformed("no order number"))?;
    let raw_type = value_after_eq(line)
        .ok_or_else(|| malformed("no type tag"))?
        .to_string();

    Ok(RawEventSpan {
        start: index,
        end: index,
        order,
        raw_type,
    })
}

pub(crate) fn value_after_eq(line: &str) -> Option<&str> {
    line.split_once('=').map(|(_, value)| value)
}

fn last_non_blank(lines: &[String]) -> usize {
    lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_scan_two_events() {
        let lines = doc(&[
            "#Filename = test.his",
            "#Date Saved = 1/2/2026 10:0:0",
            "FileType = 111",
            "Version = 7.11",
            "",
            "",
            "No of Events\t= 2",
            "Event #1\t= STRATIGRAPHY",
            "\tNum Layers\t= 0",
            "Event #2\t= FAULT",
            "\tDip\t= 60.0",
            "",
            "#BlockOptions",
            "\tOrigin X\t= 0.00",
        ]);

        let layout = scan(&lines).unwrap();
        assert_eq!(layout.count_line, 6);
        assert_eq!(layout.declared_count, 2);
        assert_eq!(layout.footer_start, Some(12));
        assert_eq!(layout.events.len(), 2);
        assert_eq!(layout.events[0].order, 1);
        assert_eq!(layout.events[0].start, 7);
        assert_eq!(layout.events[0].end, 8);
        assert_eq!(layout.events[1].order, 2);
        assert_eq!(layout.events[1].end, 10);
        assert_eq!(layout.events[1].raw_type.trim(), "FAULT");
    }

    #[test]
    fn test_missing_count_is_fatal() {
        let lines = doc(&["Event #1\t= TILT", "", "#BlockOptions"]);
        assert!(matches!(
            scan(&lines),
            Err(TerraneError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_missing_footer_is_reported_not_fatal() {
        let lines = doc(&[
            "No of Events\t= 1",
            "Event #1\t= TILT",
            "\tRotation \t=  10.0",
            "",
        ]);
        let layout = scan(&lines).unwrap();
        assert_eq!(layout.footer_start, None);
        assert_eq!(layout.events[0].end, 2);
    }

    #[test]
    fn test_no_separator_keeps_last_event_line() {
        let lines = doc(&[
            "No of Events\t= 1",
            "Event #1\t= TILT",
            "\tRotation \t=  10.0",
            "#BlockOptions",
        ]);
        let layout = scan(&lines).unwrap();
        assert_eq!(layout.events[0].end, 2);
    }

    #[test]
    fn test_unreadable_order_is_fatal() {
        let lines = doc(&["No of Events\t= 1", "Event #x\t= TILT", "", "#BlockOptions"]);
        assert!(matches!(
            scan(&lines),
            Err(TerraneError::MalformedDocument(_))
        ));
    }
}
