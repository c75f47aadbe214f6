//! Step-trace data model
//!
//! A trace is the full, precomputed execution history of one algorithm run:
//! an ordered list of [`Step`] snapshots. Traces are produced once per input
//! configuration by a [`generator::TraceGenerator`] and never change afterwards;
//! new inputs produce a brand-new [`StepTrace`].
//!
//! - [`value`]: display values ([`value::Value`])
//! - [`element`]: the closed set of renderable structures ([`element::Element`])
//! - [`generator`]: the generator contract and the JSON trace-file loader

pub mod element;
pub mod generator;
pub mod value;

use element::Element;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use value::Value;

/// One immutable execution snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based source line executing at this step, 0 for none
    #[serde(default)]
    pub line_number: usize,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub is_complete: bool,
}

impl Step {
    /// Source line of this step, None when no line is highlighted
    pub fn line(&self) -> Option<usize> {
        (self.line_number > 0).then_some(self.line_number)
    }
}

/// Ordered, immutable sequence of steps
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    pub fn new(steps: Vec<Step>) -> Self {
        StepTrace { steps }
    }

    pub fn empty() -> Self {
        StepTrace { steps: Vec::new() }
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the terminal step, None for an empty trace
    pub fn last_index(&self) -> Option<usize> {
        self.steps.len().checked_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Distinct source lines touched by the steps strictly before `position`.
    ///
    /// Line numbers may repeat in any order (loops revisit lines), so this is
    /// a set collected by walking the steps, not a range. Line 0 is never
    /// included.
    pub fn executed_lines(&self, position: usize) -> FxHashSet<usize> {
        self.steps
            .iter()
            .take(position)
            .filter_map(Step::line)
            .collect()
    }

    /// Consistency warnings for this trace.
    ///
    /// These never prevent playback; the loader only logs them.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let last = self.last_index();

        for (idx, step) in self.steps.iter().enumerate() {
            if step.is_complete && Some(idx) != last {
                warnings.push(format!(
                    "step {} is marked complete but is not the last step",
                    idx
                ));
            }
        }

        if let Some(last) = last {
            if !self.steps[last].is_complete {
                warnings.push("last step is not marked complete".to_string());
            }
        }

        warnings
    }
}

impl From<Vec<Step>> for StepTrace {
    fn from(steps: Vec<Step>) -> Self {
        StepTrace::new(steps)
    }
}

impl<'a> IntoIterator for &'a StepTrace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
