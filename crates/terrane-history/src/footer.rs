//! Footer settings block
//!
//! Everything below the events (the `#BlockOptions` marker onward) is an
//! opaque sequence of setting lines owned verbatim. Only three field
//! groups are ever edited programmatically: origin, extent, and the two
//! cube-size lines. Edits replace exactly the matched lines; every other
//! byte of the footer survives untouched.

use terrane_core::{FieldFormat, TerraneError, TerraneResult};

use crate::scan::value_after_eq;
use crate::template;

/// Which cube-size setting to read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeKind {
    Geology,
    Geophysics,
}

impl CubeKind {
    fn anchor(self) -> &'static str {
        match self {
            CubeKind::Geology => "Geology Cube Size",
            CubeKind::Geophysics => "Geophysics Cube Size",
        }
    }
}

/// The verbatim footer block of a document
#[derive(Clone, Debug)]
pub struct Footer {
    lines: Vec<String>,
}

impl Footer {
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Footer { lines }
    }

    /// The canonical default footer, synthesized for documents that were
    /// generated without a settings block.
    pub fn from_template() -> Self {
        Footer {
            lines: template::FOOTER
                .split('\n')
                .map(template::spaces_to_tabs)
                .collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn find(&self, anchor: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(anchor))
    }

    fn read_f64(&self, index: usize) -> Option<f64> {
        value_after_eq(self.lines.get(index)?)?.trim().parse().ok()
    }

    /// Read a three-line X/Y/Z group anchored at `anchor`.
    fn read_triple(&self, anchor: &str) -> TerraneResult<(f64, f64, f64)> {
        let i = self
            .find(anchor)
            .ok_or_else(|| missing_anchor(anchor))?;
        match (self.read_f64(i), self.read_f64(i + 1), self.read_f64(i + 2)) {
            (Some(x), Some(y), Some(z)) => Ok((x, y, z)),
            _ => Err(missing_anchor(anchor)),
        }
    }

    /// Rewrite a three-line X/Y/Z group in place. The group is always
    /// written together so the three axes stay adjacent.
    fn write_triple(&mut self, anchor: &str, label: &str, values: (f64, f64, f64)) -> TerraneResult<()> {
        let i = self
            .find(anchor)
            .ok_or_else(|| missing_anchor(anchor))?;
        if i + 2 >= self.lines.len() {
            return Err(missing_anchor(anchor));
        }
        let fmt = FieldFormat::Fixed(2);
        for (offset, (axis, value)) in [("X", values.0), ("Y", values.1), ("Z", values.2)]
            .into_iter()
            .enumerate()
        {
            self.lines[i + offset] =
                format!("    {label} {axis}    =   {}", fmt.render_f64(value));
        }
        Ok(())
    }

    pub fn origin(&self) -> TerraneResult<(f64, f64, f64)> {
        self.read_triple("Origin X")
    }

    pub fn set_origin(&mut self, x: f64, y: f64, z: f64) -> TerraneResult<()> {
        self.write_triple("Origin X", "Origin", (x, y, z))
    }

    pub fn extent(&self) -> TerraneResult<(f64, f64, f64)> {
        self.read_triple("Length X")
    }

    pub fn set_extent(&mut self, x: f64, y: f64, z: f64) -> TerraneResult<()> {
        self.write_triple("Length X", "Length", (x, y, z))
    }

    pub fn cube_size(&self, kind: CubeKind) -> TerraneResult<f64> {
        let i = self
            .find(kind.anchor())
            .ok_or_else(|| missing_anchor(kind.anchor()))?;
        self.read_f64(i).ok_or_else(|| missing_anchor(kind.anchor()))
    }

    /// Rewrite both cube-size lines to the same isotropic cell size,
    /// preserving each line's label segment.
    pub fn set_cube_size(&mut self, size: f64) {
        let rendered = FieldFormat::Padded(7, 2).render_f64(size);
        for line in &mut self.lines {
            if line.contains("Geology Cube Size") || line.contains("Geophysics Cube Size") {
                if let Some((prefix, _)) = line.split_once('=') {
                    *line = format!("{prefix}={rendered}");
                }
            }
        }
    }
}

fn missing_anchor(anchor: &str) -> TerraneError {
    TerraneError::MalformedDocument(format!("footer anchor `{anchor}` not found"))
}
