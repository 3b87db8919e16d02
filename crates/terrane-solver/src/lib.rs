//! Terrane Solver - Invocation contract for the external solver
//!
//! The forward-modeling solver is a separate executable: it takes a
//! history document path and an output base name, and writes companion
//! grid files this crate does not parse (a dedicated output reader does).
//! Each invocation is a blocking, short-lived child-process call over one
//! document. Batch workflows parallelize by running independent
//! invocations over independent temporary files; nothing here is shared.

use std::path::{Path, PathBuf};
use std::process::Command;

use terrane_core::TerraneError;
use terrane_history::{Document, DrillholeOptions};
use thiserror::Error;

/// What the solver is asked to compute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationMode {
    /// Lithology block model
    #[default]
    Block,
    /// Gravity and magnetics grids
    Geophysics,
    /// Topology codes
    Topology,
}

impl SimulationMode {
    fn as_arg(self) -> &'static str {
        match self {
            SimulationMode::Block => "BLOCK",
            SimulationMode::Geophysics => "GEOPHYSICS",
            SimulationMode::Topology => "TOPOLOGY",
        }
    }

    /// Extension of the primary output artifact for this mode.
    fn output_extension(self) -> &'static str {
        match self {
            SimulationMode::Block => "g12",
            SimulationMode::Geophysics => "mag",
            SimulationMode::Topology => "g23",
        }
    }
}

/// Solver-side failures, distinct from the document-model taxonomy
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("failed to launch solver `{program}`: {source}")]
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("solver exited with status {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("solver produced no output file at {0}")]
    MissingOutput(PathBuf),

    /// Document preparation failed before the solver was ever invoked.
    #[error(transparent)]
    Document(#[from] TerraneError),
}

pub type SolverResult<T> = Result<T, SolverError>;

/// Handle on the solver executable
#[derive(Clone, Debug)]
pub struct Solver {
    program: PathBuf,
}

impl Solver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Solver {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the solver over one history document.
    ///
    /// Blocks until the child process exits. Returns the path of the
    /// primary output artifact; a non-zero exit or a missing artifact is
    /// a solver-side failure.
    pub fn compute(
        &self,
        history: &Path,
        output_base: &Path,
        mode: SimulationMode,
    ) -> SolverResult<PathBuf> {
        tracing::debug!(
            program = %self.program.display(),
            history = %history.display(),
            mode = mode.as_arg(),
            "invoking solver"
        );

        let output = Command::new(&self.program)
            .arg(history)
            .arg(output_base)
            .arg(mode.as_arg())
            .output()
            .map_err(|source| SolverError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SolverError::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let artifact = output_base.with_extension(mode.output_extension());
        if !artifact.exists() {
            return Err(SolverError::MissingOutput(artifact));
        }

        tracing::debug!(artifact = %artifact.display(), "solver run complete");
        Ok(artifact)
    }
}

/// Evaluate a 1-D drill-hole profile at `(x, y)`.
///
/// Derives a one-cell-column variant of the document, writes it into
/// `workdir`, and runs a block-model computation over it. The returned
/// path points at the block output for the separate output reader; the
/// source document is untouched.
pub fn run_drillhole(
    solver: &Solver,
    document: &Document,
    x: f64,
    y: f64,
    options: &DrillholeOptions,
    workdir: &Path,
) -> SolverResult<PathBuf> {
    let mut variant = document.derive_drillhole(x, y, options)?;
    let history = workdir.join("drillhole_1d.his");
    variant.write_to(&history)?;
    solver.compute(&history, &workdir.join("drillhole_1d_out"), SimulationMode::Block)
}
