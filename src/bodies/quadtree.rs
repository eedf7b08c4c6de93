use crate::bodies::Body;
use crate::utils::SimConstants;

/// Represents a square region in 2D space.
///
/// Each `Quad` has a center position (cx, cy) and a half-size, which is half
/// the length of one side of the square.
///
/// # Examples
///
/// ```
/// use rs_nbody::bodies::Quad;
///
/// // Create a square with center at origin and side length of 2.0
/// let quad = Quad { cx: 0.0, cy: 0.0, half_size: 1.0 };
///
/// assert!(quad.contains(0.5, 0.5));
/// assert!(!quad.contains(1.5, 0.5)); // Outside the square
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    pub cx: f64,        // center x-coordinate
    pub cy: f64,        // center y-coordinate
    pub half_size: f64, // half the length of one side
}

impl Quad {
    /// Returns true if the point (x, y) is inside this quad.
    ///
    /// All four edges are inclusive. A point on a boundary shared by sibling
    /// quads is therefore contained by more than one of them; insertion
    /// resolves the ambiguity by always testing children in a fixed order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::bodies::Quad;
    ///
    /// let quad = Quad { cx: 0.0, cy: 0.0, half_size: 1.0 };
    ///
    /// assert!(quad.contains(0.0, 0.0));   // Center
    /// assert!(quad.contains(1.0, -1.0));  // Corner (edges are inclusive)
    /// assert!(!quad.contains(-2.0, 0.0)); // Far left
    /// ```
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.cx - self.half_size
            && x <= self.cx + self.half_size
            && y >= self.cy - self.half_size
            && y <= self.cy + self.half_size
    }

    /// Full side length of the quad.
    pub fn side(&self) -> f64 {
        2.0 * self.half_size
    }

    /// Subdivides the quad into four smaller quads (NW, NE, SW, SE).
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::bodies::Quad;
    ///
    /// let quad = Quad { cx: 0.0, cy: 0.0, half_size: 1.0 };
    /// let (nw, ne, _sw, se) = quad.subdivide();
    ///
    /// assert_eq!(nw.cx, -0.5);
    /// assert_eq!(nw.cy, 0.5);
    /// assert_eq!(nw.half_size, 0.5);
    /// assert_eq!(ne.cx, 0.5);
    ///
    /// assert!(se.contains(0.25, -0.25));
    /// ```
    pub fn subdivide(&self) -> (Quad, Quad, Quad, Quad) {
        let hs = self.half_size / 2.0;
        (
            Quad { cx: self.cx - hs, cy: self.cy + hs, half_size: hs }, // NW
            Quad { cx: self.cx + hs, cy: self.cy + hs, half_size: hs }, // NE
            Quad { cx: self.cx - hs, cy: self.cy - hs, half_size: hs }, // SW
            Quad { cx: self.cx + hs, cy: self.cy - hs, half_size: hs }, // SE
        )
    }
}

/// Occupancy of a single quadrant-tree node.
///
/// - `Empty`: the region holds no body.
/// - `Leaf`: the region holds exactly one body. `source` is the index of the
///   real body in the simulation's body list, or `None` when the leaf is a
///   merged representative created at the tree's depth limit.
/// - `Internal`: the region has been subdivided; `aggregate` is the combined
///   mass and centroid of everything below, and `children` are the node ids
///   of the NW, NE, SW, SE quadrants, in that order.
///
/// An aggregate without children is unrepresentable by construction.
#[derive(Clone, Copy, Debug)]
pub enum NodeState {
    Empty,
    Leaf {
        body: Body,
        source: Option<usize>,
    },
    Internal {
        aggregate: Body,
        children: [usize; 4],
    },
}

/// A single node of the quadrant tree: the square it covers, its depth (root
/// is 0), and its occupancy.
#[derive(Clone, Copy, Debug)]
pub struct QuadNode {
    pub quad: Quad,
    pub depth: u32,
    pub state: NodeState,
}

const ROOT: usize = 0;

/// A Barnes-Hut quadrant tree over a set of bodies.
///
/// Nodes live in a flat `Vec` arena with children referenced by index; every
/// rebuild resets the arena wholesale, so no node outlives one tick and the
/// allocation is reused from tick to tick. The tree stores copies of the body
/// data it indexes, which keeps force evaluation a read-only traversal while
/// the caller mutates the real bodies.
///
/// # Examples
///
/// ```
/// use rs_nbody::bodies::{Body, Quad, QuadTree};
/// use rs_nbody::utils::SimConstants;
///
/// let bodies = vec![
///     Body::new(100.0, 100.0, 0.0, 0.0, 3.0).unwrap(),
///     Body::new(600.0, 500.0, 0.0, 0.0, 3.0).unwrap(),
/// ];
/// let bounds = Quad { cx: 400.0, cy: 400.0, half_size: 400.0 };
/// let tree = QuadTree::build(&bodies, bounds, 50);
///
/// // Pull on a body: pass its index so the tree can skip self-interaction.
/// let constants = SimConstants::default();
/// let mut first = bodies[0];
/// tree.evaluate_force_on(&mut first, Some(0), 0.01, &constants);
/// assert!(first.vx > 0.0); // attracted toward the second body
/// ```
pub struct QuadTree {
    nodes: Vec<QuadNode>,
    max_depth: u32,
}

impl QuadTree {
    /// Creates an empty tree. Nothing is indexed until [`QuadTree::rebuild`]
    /// runs; force evaluation against an unbuilt tree is a no-op.
    pub fn new(max_depth: u32) -> Self {
        QuadTree {
            nodes: Vec::new(),
            max_depth,
        }
    }

    /// Builds a tree over `bodies` in one call.
    pub fn build(bodies: &[Body], bounds: Quad, max_depth: u32) -> Self {
        let mut tree = QuadTree::new(max_depth);
        tree.rebuild(bodies, bounds);
        tree
    }

    /// Discards the previous tree and re-indexes `bodies`.
    ///
    /// The root covers `bounds` at depth 0 and every body is inserted in
    /// body-list order, which keeps tie-breaking on shared boundaries (and
    /// therefore the computed forces) reproducible. `bounds` must contain
    /// every body position.
    pub fn rebuild(&mut self, bodies: &[Body], bounds: Quad) {
        self.nodes.clear();
        self.nodes.push(QuadNode {
            quad: bounds,
            depth: 0,
            state: NodeState::Empty,
        });
        for (index, body) in bodies.iter().enumerate() {
            self.insert(ROOT, *body, Some(index));
        }
    }

    /// Number of nodes in the current tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True until the first rebuild.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root node of the current tree, if one has been built.
    pub fn root(&self) -> Option<&QuadNode> {
        self.nodes.first()
    }

    /// Node lookup by id, as stored in `NodeState::Internal::children`.
    pub fn node(&self, index: usize) -> &QuadNode {
        &self.nodes[index]
    }

    /// Visits every node in preorder (parents before children, children in
    /// NW, NE, SW, SE order). Read-only; useful for drawing quad boundaries
    /// or inspecting the tree in tests.
    pub fn for_each_node<F: FnMut(&QuadNode)>(&self, mut f: F) {
        if !self.nodes.is_empty() {
            self.visit(ROOT, &mut f);
        }
    }

    fn visit<F: FnMut(&QuadNode)>(&self, index: usize, f: &mut F) {
        let node = &self.nodes[index];
        f(node);
        if let NodeState::Internal { children, .. } = node.state {
            for child in children {
                self.visit(child, f);
            }
        }
    }

    fn insert(&mut self, index: usize, body: Body, source: Option<usize>) {
        // Snapshot the node by value so the arena can grow while we recurse.
        let quad = self.nodes[index].quad;
        let depth = self.nodes[index].depth;
        let state = self.nodes[index].state;

        match state {
            // An empty quad takes the body directly.
            NodeState::Empty => {
                self.nodes[index].state = NodeState::Leaf { body, source };
            }

            // A leaf now holds two bodies: subdivide and route both down,
            // unless the depth limit is reached, in which case arbitrarily
            // close or numerous bodies are merged into a single
            // representative point instead of subdividing indefinitely.
            NodeState::Leaf {
                body: existing,
                source: existing_source,
            } => {
                let merged = existing.combine(&body);
                if depth < self.max_depth {
                    let children = self.push_children(quad, depth);
                    self.nodes[index].state = NodeState::Internal {
                        aggregate: merged,
                        children,
                    };
                    self.route(children, existing, existing_source);
                    self.route(children, body, source);
                } else {
                    self.nodes[index].state = NodeState::Leaf {
                        body: merged,
                        source: None,
                    };
                }
            }

            // An internal node folds the body into its aggregate and passes
            // it on to the child quadrant that contains it.
            NodeState::Internal {
                aggregate,
                children,
            } => {
                self.nodes[index].state = NodeState::Internal {
                    aggregate: aggregate.combine(&body),
                    children,
                };
                self.route(children, body, source);
            }
        }
    }

    /// Routes a body into the first child quadrant that contains it, always
    /// testing NW, NE, SW, SE in that order. Bounds are edge-inclusive, so a
    /// body on a shared boundary matches more than one child; the fixed order
    /// makes the choice deterministic.
    fn route(&mut self, children: [usize; 4], body: Body, source: Option<usize>) {
        for child in children {
            if self.nodes[child].quad.contains(body.x, body.y) {
                self.insert(child, body, source);
                return;
            }
        }
        unreachable!(
            "body at ({}, {}) lies outside every child quadrant",
            body.x, body.y
        );
    }

    fn push_children(&mut self, quad: Quad, depth: u32) -> [usize; 4] {
        let (nw, ne, sw, se) = quad.subdivide();
        let first = self.nodes.len();
        for child_quad in [nw, ne, sw, se] {
            self.nodes.push(QuadNode {
                quad: child_quad,
                depth: depth + 1,
                state: NodeState::Empty,
            });
        }
        [first, first + 1, first + 2, first + 3]
    }

    /// Updates `body`'s velocity from everything in the tree.
    ///
    /// `source` is the body's index in the list the tree was built from, and
    /// is how self-interaction is excluded: identity, never position, decides
    /// the skip, so two distinct bodies at identical coordinates still pull
    /// on each other. Pass `None` for a probe body that is not in the tree.
    ///
    /// Leaves act on the body directly. For an internal node, the node is
    /// treated as its single aggregate body when `side / distance < theta`;
    /// otherwise the traversal descends into all four children.
    pub fn evaluate_force_on(
        &self,
        body: &mut Body,
        source: Option<usize>,
        dt: f64,
        constants: &SimConstants,
    ) {
        if !self.nodes.is_empty() {
            self.apply(ROOT, body, source, dt, constants);
        }
    }

    fn apply(
        &self,
        index: usize,
        body: &mut Body,
        source: Option<usize>,
        dt: f64,
        constants: &SimConstants,
    ) {
        let node = &self.nodes[index];
        match node.state {
            NodeState::Empty => {}

            NodeState::Leaf {
                body: occupant,
                source: occupant_source,
            } => {
                if occupant_source.is_some() && occupant_source == source {
                    return;
                }
                body.apply_force_from(dt, &occupant, constants);
            }

            NodeState::Internal {
                aggregate,
                children,
            } => {
                let dx = aggregate.x - body.x;
                let dy = aggregate.y - body.y;
                let d = (dx * dx + dy * dy).sqrt();

                if node.quad.side() / d < constants.theta {
                    body.apply_force_from(dt, &aggregate, constants);
                } else {
                    for child in children {
                        self.apply(child, body, source, dt, constants);
                    }
                }
            }
        }
    }
}
