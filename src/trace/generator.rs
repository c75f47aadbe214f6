//! Trace generator contract and the JSON trace-file loader
//!
//! A generator turns named inputs into a [`StepTrace`]. It must be pure: the
//! same inputs always produce the same trace. How a trace is computed is none
//! of the player's business; this crate ships a loader for precomputed JSON
//! trace files ([`JsonTraceGenerator`]) and accepts any closure with the right
//! signature.
//!
//! # Trace file format
//!
//! ```text
//! {
//!   "title": "Binary search",
//!   "code": "def search(nums, target):\n    ...",
//!   "steps": [ { "lineNumber": 1, "elements": [...] }, ... ]
//! }
//! ```
//!
//! A file may instead hold `"cases": { "<name>": [steps...] }`; the `case`
//! input picks one (default: the first name in sorted order).

use super::value::Value;
use super::StepTrace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Named generator inputs
pub type Inputs = BTreeMap<String, Value>;

/// Input name that selects a case in a multi-case trace file
pub const CASE_INPUT: &str = "case";

/// Errors a generator can report.
///
/// Callers do not propagate these into playback: a failed generation is shown
/// as an empty trace (see [`Session`](crate::playback::session::Session)).
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read trace file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid trace file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown case '{name}' (available: {available})")]
    UnknownCase { name: String, available: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Produces a trace from inputs
pub trait TraceGenerator {
    fn generate(&self, inputs: &Inputs) -> Result<StepTrace, GenerateError>;
}

impl<F> TraceGenerator for F
where
    F: Fn(&Inputs) -> Result<StepTrace, GenerateError>,
{
    fn generate(&self, inputs: &Inputs) -> Result<StepTrace, GenerateError> {
        self(inputs)
    }
}

/// A parsed trace file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceFile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub steps: Option<StepTrace>,
    #[serde(default)]
    pub cases: BTreeMap<String, StepTrace>,
}

impl TraceFile {
    /// Read and parse a trace file from disk
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let text = fs::read_to_string(path).map_err(|source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| GenerateError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Names of the cases in this file, sorted
    pub fn case_names(&self) -> Vec<&str> {
        self.cases.keys().map(String::as_str).collect()
    }

    /// Pick the trace for `inputs`.
    ///
    /// Top-level `steps` win over `cases`. A file with neither yields an empty
    /// trace.
    pub fn select(&self, inputs: &Inputs) -> Result<StepTrace, GenerateError> {
        if let Some(steps) = &self.steps {
            return Ok(steps.clone());
        }

        match inputs.get(CASE_INPUT) {
            Some(requested) => {
                let name = match requested {
                    Value::Str(s) => s.clone(),
                    other => other.to_string(),
                };
                self.cases
                    .get(&name)
                    .cloned()
                    .ok_or_else(|| GenerateError::UnknownCase {
                        name,
                        available: self.case_names().join(", "),
                    })
            }
            None => Ok(self.cases.values().next().cloned().unwrap_or_default()),
        }
    }
}

/// Generator backed by a JSON trace file.
///
/// The file is re-read on every call, so regenerating picks up edits made
/// while the player is running.
#[derive(Debug, Clone)]
pub struct JsonTraceGenerator {
    path: PathBuf,
}

impl JsonTraceGenerator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonTraceGenerator { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole document (title, code, steps)
    pub fn document(&self) -> Result<TraceFile, GenerateError> {
        TraceFile::load(&self.path)
    }
}

impl TraceGenerator for JsonTraceGenerator {
    fn generate(&self, inputs: &Inputs) -> Result<StepTrace, GenerateError> {
        let trace = self.document()?.select(inputs)?;
        log::info!(
            "Loaded {} steps from {}",
            trace.len(),
            self.path.display()
        );
        for warning in trace.validate() {
            log::warn!("{}: {}", self.path.display(), warning);
        }
        Ok(trace)
    }
}

/// A `name=value` pair from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct InputArg {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Error, PartialEq)]
#[error("expected NAME=VALUE, got '{0}'")]
pub struct ParseInputError(pub String);

impl FromStr for InputArg {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw) = s.split_once('=').ok_or_else(|| ParseInputError(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseInputError(s.to_string()));
        }
        Ok(InputArg {
            name: name.to_string(),
            value: Value::parse_lenient(raw.trim()),
        })
    }
}

/// Collect parsed `name=value` pairs; later pairs override earlier ones
pub fn inputs_from_args(args: &[InputArg]) -> Inputs {
    args.iter()
        .map(|arg| (arg.name.clone(), arg.value.clone()))
        .collect()
}
