//! Layout of heap-indexed binary trees
//!
//! A tree arrives as a sparse slice where the children of slot `i` are at
//! `2i + 1` and `2i + 2`. [`layout_tree`] assigns every present node a center
//! point and connects each parent to its children with a [`CubicCurve`].
//!
//! # Algorithm
//!
//! Two recursive passes over the implicit tree:
//!
//! 1. **Width claim**: an absent slot claims nothing, a present node claims
//!    `max(NODE_SIZE + MIN_SPACING, left + right + MIN_SPACING)`.
//! 2. **Placement**: the root sits at half its claim; children go one level
//!    down, the left child `right_claim / 2` to the left of its parent and the
//!    right child `left_claim / 2` to the right.
//!
//! A parent always claims at least the sum of its children's claims, so
//! sibling subtrees occupy disjoint horizontal intervals and no two nodes can
//! overlap.

pub mod curve;

use crate::trace::element::TreeElement;
pub use curve::{CubicCurve, Point};
use rustc_hash::FxHashMap;

/// Diameter of a node circle
pub const NODE_SIZE: f64 = 40.0;
/// Horizontal gap added to every width claim
pub const MIN_SPACING: f64 = 20.0;
/// Vertical distance between levels
pub const LEVEL_HEIGHT: f64 = 70.0;
/// Margin around the drawing
pub const PADDING: f64 = 20.0;

const NODE_RADIUS: f64 = NODE_SIZE / 2.0;

/// Curve from the bottom of `parent` to the top of `child`
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub parent: usize,
    pub child: usize,
    pub path: CubicCurve,
}

/// Size of the drawing and the shift that moves its left edge to `x = 0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
}

/// Positions and edges of a laid-out tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TreeLayout {
    pub positions: FxHashMap<usize, Point>,
    pub edges: Vec<Edge>,
    pub bounds: CanvasBounds,
}

impl TreeLayout {
    pub fn position(&self, index: usize) -> Option<Point> {
        self.positions.get(&index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Copy with `bounds.offset_x` applied to every point and edge
    pub fn translated(&self) -> TreeLayout {
        let dx = self.bounds.offset_x;
        TreeLayout {
            positions: self
                .positions
                .iter()
                .map(|(&i, p)| (i, p.offset(dx, 0.0)))
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| Edge {
                    parent: e.parent,
                    child: e.child,
                    path: e.path.translated(dx, 0.0),
                })
                .collect(),
            bounds: CanvasBounds {
                offset_x: 0.0,
                ..self.bounds
            },
        }
    }
}

/// Anything that can answer "is there a node in slot `i`"
pub trait SparseTree {
    /// Number of slots, present or not
    fn slot_count(&self) -> usize;
    fn is_present(&self, index: usize) -> bool;
}

impl SparseTree for TreeElement {
    fn slot_count(&self) -> usize {
        self.nodes.len()
    }

    fn is_present(&self, index: usize) -> bool {
        TreeElement::is_present(self, index)
    }
}

impl<T> SparseTree for [Option<T>] {
    fn slot_count(&self) -> usize {
        self.len()
    }

    fn is_present(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Some(_)))
    }
}

fn left(index: usize) -> usize {
    2 * index + 1
}

fn right(index: usize) -> usize {
    2 * index + 2
}

struct LayoutPass<'a, T: SparseTree + ?Sized> {
    tree: &'a T,
    widths: FxHashMap<usize, f64>,
    positions: FxHashMap<usize, Point>,
}

impl<'a, T: SparseTree + ?Sized> LayoutPass<'a, T> {
    fn subtree_width(&mut self, index: usize) -> f64 {
        if index >= self.tree.slot_count() || !self.tree.is_present(index) {
            return 0.0;
        }
        if let Some(&width) = self.widths.get(&index) {
            return width;
        }

        let children = self.subtree_width(left(index)) + self.subtree_width(right(index));
        let width = (NODE_SIZE + MIN_SPACING).max(children + MIN_SPACING);
        self.widths.insert(index, width);
        width
    }

    fn position_node(&mut self, index: usize, x: f64, y: f64) {
        self.positions.insert(index, Point::new(x, y));

        let left_width = self.subtree_width(left(index));
        let right_width = self.subtree_width(right(index));
        let child_y = y + LEVEL_HEIGHT;

        if left_width > 0.0 {
            self.position_node(left(index), x - right_width / 2.0, child_y);
        }
        if right_width > 0.0 {
            self.position_node(right(index), x + left_width / 2.0, child_y);
        }
    }
}

/// Lay out a heap-indexed tree.
///
/// An empty tree (or one whose root slot is absent) yields an empty layout
/// with zero bounds.
pub fn layout_tree<T: SparseTree + ?Sized>(tree: &T) -> TreeLayout {
    let mut pass = LayoutPass {
        tree,
        widths: FxHashMap::default(),
        positions: FxHashMap::default(),
    };

    let root_width = pass.subtree_width(0);
    if root_width == 0.0 {
        return TreeLayout::default();
    }
    pass.position_node(0, root_width / 2.0, NODE_SIZE / 2.0 + PADDING);

    let positions = pass.positions;
    let edges = collect_edges(&positions);
    let bounds = compute_bounds(&positions);

    TreeLayout {
        positions,
        edges,
        bounds,
    }
}

fn collect_edges(positions: &FxHashMap<usize, Point>) -> Vec<Edge> {
    let mut parents: Vec<usize> = positions.keys().copied().collect();
    parents.sort_unstable();

    let mut edges = Vec::new();
    for parent in parents {
        let from = positions[&parent];
        for child in [left(parent), right(parent)] {
            if let Some(&to) = positions.get(&child) {
                edges.push(Edge {
                    parent,
                    child,
                    path: CubicCurve::vertical(
                        from.offset(0.0, NODE_RADIUS),
                        to.offset(0.0, -NODE_RADIUS),
                    ),
                });
            }
        }
    }
    edges
}

fn compute_bounds(positions: &FxHashMap<usize, Point>) -> CanvasBounds {
    if positions.is_empty() {
        return CanvasBounds::default();
    }

    let (mut min_x, mut max_x, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in positions.values() {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let left_edge = min_x - NODE_RADIUS - PADDING;
    let right_edge = max_x + NODE_RADIUS + PADDING;
    CanvasBounds {
        width: right_edge - left_edge,
        height: max_y + NODE_RADIUS + PADDING,
        offset_x: -left_edge,
    }
}
