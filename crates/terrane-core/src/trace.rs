//! Exchange records for the fault-trace pre-processing collaborator
//!
//! An external utility turns surveyed fault-trace point clouds into
//! solver-ready fault parameters (principal-axis alignment, coordinate
//! rescaling, trace resampling). That geometry lives outside this
//! workspace; these records are the contract on both sides of it. The
//! output side feeds the bulk fault-set writer directly.

use serde::{Deserialize, Serialize};

/// Dip direction classification of a surveyed fault
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DipDirectionClass {
    East,
    West,
    /// Strike-slip faults, vertical to sub-vertical movement
    StrikeSlip,
}

/// One surveyed vertex of a fault trace (pre-processor input)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceVertex {
    /// Identifier of the fault this vertex belongs to
    pub fault_id: u32,
    pub dip_direction: DipDirectionClass,
    pub x: f64,
    pub y: f64,
}

/// A resampled point on a normalized fault trace
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TracePoint {
    pub x: f64,
    pub y: f64,
}

/// Solver-ready parameters for one fault (pre-processor output)
///
/// Geometrically normalized: the trace is rescaled onto the profile axes
/// the simulation tool expects, and axis lengths / slip are derived from
/// the fault's extent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaultParams {
    /// Center of the fault plane
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Ellipsoid axis lengths
    pub x_axis: f64,
    pub y_axis: f64,
    pub z_axis: f64,
    pub dip: f64,
    pub dip_direction: f64,
    pub slip: f64,
    pub amplitude: f64,
    pub pitch: f64,
    pub profile_pitch: f64,
    /// Resampled trace, normalized onto the profile coordinate range
    pub trace: Vec<TracePoint>,
}
