//! Renderable structures attached to a step
//!
//! Every [`Step`](super::Step) carries an ordered list of [`Element`]s. The set
//! of element kinds is closed: renderers match on the enum exhaustively, so a
//! new kind is a compile error everywhere it is not yet drawn.
//!
//! In JSON each element is an object with a `type` discriminant:
//!
//! ```text
//! { "type": "array", "values": [1, 3, 5], "highlights": [{ "index": 1, "style": "active" }] }
//! { "type": "tree", "nodes": [{ "value": 8 }, null, { "value": 9, "style": "found" }] }
//! ```

use super::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highlight category of a cell, node or list item.
///
/// Each category maps to exactly one display color (see [`Highlight::color_hex`]).
/// The mapping is shared with every renderer so `found` always reads as a
/// successful search, `comparing` as a pending comparison, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    #[default]
    Default,
    Active,
    Comparing,
    Found,
    Visited,
    Swapped,
    Inactive,
}

impl Highlight {
    pub const ALL: [Highlight; 7] = [
        Highlight::Default,
        Highlight::Active,
        Highlight::Comparing,
        Highlight::Found,
        Highlight::Visited,
        Highlight::Swapped,
        Highlight::Inactive,
    ];

    /// The fixed display color for this category
    pub fn color_hex(self) -> &'static str {
        match self {
            Highlight::Default => "#94a3b8",
            Highlight::Active => "#3b82f6",
            Highlight::Comparing => "#eab308",
            Highlight::Found => "#22c55e",
            Highlight::Visited => "#a855f7",
            Highlight::Swapped => "#f97316",
            Highlight::Inactive => "#475569",
        }
    }

    /// The color as an `(r, g, b)` triple
    pub fn color_rgb(self) -> (u8, u8, u8) {
        // The table above is always "#rrggbb"
        let hex = &self.color_hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    pub fn name(self) -> &'static str {
        match self {
            Highlight::Default => "default",
            Highlight::Active => "active",
            Highlight::Comparing => "comparing",
            Highlight::Found => "found",
            Highlight::Visited => "visited",
            Highlight::Swapped => "swapped",
            Highlight::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Highlight applied to one index of a sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexHighlight {
    pub index: usize,
    #[serde(default)]
    pub style: Highlight,
}

/// Highlight of `index` in a highlight list; the last matching entry wins
fn highlight_for(highlights: &[IndexHighlight], index: usize) -> Highlight {
    highlights
        .iter()
        .rev()
        .find(|h| h.index == index)
        .map(|h| h.style)
        .unwrap_or_default()
}

/// A named marker under one index of a sequence (`lo`, `mid`, `hi`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerLabel {
    pub index: usize,
    pub label: String,
}

/// One-dimensional array, optionally drawn as magnitude bars
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayElement {
    #[serde(default)]
    pub name: Option<String>,
    pub values: Vec<Value>,
    #[serde(default)]
    pub highlights: Vec<IndexHighlight>,
    #[serde(default)]
    pub pointers: Vec<PointerLabel>,
    #[serde(default)]
    pub as_bars: bool,
}

impl ArrayElement {
    pub fn highlight_at(&self, index: usize) -> Highlight {
        highlight_for(&self.highlights, index)
    }

    /// All pointer labels attached to `index`, in declaration order
    pub fn pointers_at(&self, index: usize) -> impl Iterator<Item = &str> {
        self.pointers
            .iter()
            .filter(move |p| p.index == index)
            .map(|p| p.label.as_str())
    }
}

/// A standalone marker attached to an index of some array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerElement {
    pub label: String,
    pub index: usize,
    #[serde(default = "default_pointer_color")]
    pub color: String,
}

fn default_pointer_color() -> String {
    Highlight::Active.color_hex().to_string()
}

/// Visual span `[left, right]`, e.g. a sliding window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketElement {
    pub left: usize,
    pub right: usize,
    #[serde(default)]
    pub value: Option<Value>,
}

impl BracketElement {
    /// Number of indices covered, zero for an inverted span
    pub fn width(&self) -> usize {
        if self.right < self.left {
            0
        } else {
            (self.right - self.left).saturating_add(1)
        }
    }
}

/// Draw order of a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StackDirection {
    /// Last value drawn first (top of the stack at the top of the pane)
    #[default]
    TopToBottom,
    BottomToTop,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackElement {
    #[serde(default)]
    pub name: Option<String>,
    pub values: Vec<Value>,
    #[serde(default)]
    pub highlights: Vec<IndexHighlight>,
    #[serde(default)]
    pub direction: StackDirection,
}

impl StackElement {
    /// `(index, value)` pairs in the order they should be drawn
    pub fn draw_order(&self) -> Vec<(usize, &Value)> {
        let mut items: Vec<(usize, &Value)> = self.values.iter().enumerate().collect();
        if self.direction == StackDirection::TopToBottom {
            items.reverse();
        }
        items
    }

    pub fn highlight_at(&self, index: usize) -> Highlight {
        highlight_for(&self.highlights, index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    pub value: Value,
    #[serde(default)]
    pub style: Highlight,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkedListElement {
    pub nodes: Vec<ListNode>,
    #[serde(default)]
    pub pointers: Vec<PointerLabel>,
}

/// Highlight applied to one matrix cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellHighlight {
    pub row: usize,
    pub col: usize,
    #[serde(default)]
    pub style: Highlight,
}

/// `rows × cols` grid stored row-major
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatrixElement {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<Value>,
    #[serde(default)]
    pub highlights: Vec<CellHighlight>,
}

impl MatrixElement {
    /// Value at `(row, col)`, None outside the grid or past the stored values
    pub fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let offset = row.checked_mul(self.cols)?.checked_add(col)?;
        self.values.get(offset)
    }

    pub fn highlight_at(&self, row: usize, col: usize) -> Highlight {
        self.highlights
            .iter()
            .rev()
            .find(|h| h.row == row && h.col == col)
            .map(|h| h.style)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub style: Highlight,
}

/// Binary tree stored as a sparse array with heap indexing.
///
/// The children of slot `i` live at `2i + 1` and `2i + 2`. A slot is empty when
/// it is `null` or its node carries a `null` value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreeElement {
    pub nodes: Vec<Option<TreeNode>>,
}

impl TreeElement {
    pub fn node(&self, index: usize) -> Option<&TreeNode> {
        self.nodes
            .get(index)
            .and_then(Option::as_ref)
            .filter(|n| !n.value.is_null())
    }

    pub fn is_present(&self, index: usize) -> bool {
        self.node(index).is_some()
    }
}

/// One renderable structure at a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Element {
    Array(ArrayElement),
    Pointer(PointerElement),
    Bracket(BracketElement),
    Stack(StackElement),
    LinkedList(LinkedListElement),
    Matrix(MatrixElement),
    Tree(TreeElement),
}

impl Element {
    /// The JSON discriminant of this element
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Array(_) => "array",
            Element::Pointer(_) => "pointer",
            Element::Bracket(_) => "bracket",
            Element::Stack(_) => "stack",
            Element::LinkedList(_) => "linkedList",
            Element::Matrix(_) => "matrix",
            Element::Tree(_) => "tree",
        }
    }
}
