//! Layout module - graph-based keyboard navigation
//!
//! The board is not a rectangle: the top row has a gap between the waste pile
//! and the foundations, and the tableau row below it is one pile wider. A
//! [`Graph`] describes which position lies up/down/left/right of which, edge by
//! edge, so the cursor logic never has to know the board's shape.
//!
//! Nodes live in an arena and refer to each other by their stable pile index.
//! Edges may be one-way. Navigating along a missing edge returns the starting
//! index (saturating navigation).
//!
//! The game board is wired like this:
//!
//! ```text
//! 0:closed | 1:open  | -      | 2:end0 | 3:end1  | 4:end2  | 5:end3
//! 6:cen0   | 7:cen1  | 8:cen2 | 9:cen3 | 10:cen4 | 11:cen5 | 12:cen6
//! ```
//!
//! with an extra one-way edge taking "up" from pile 8 to the waste pile.

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A position in the graph: its pile index, grid cell, and neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub index: usize,
    pub layout: (usize, usize),
    pub up: Option<usize>,
    pub down: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl Node {
    pub fn new(index: usize, layout: (usize, usize)) -> Self {
        Self {
            index,
            layout,
            up: None,
            down: None,
            left: None,
            right: None,
        }
    }

    pub fn neighbor(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn set_neighbor(&mut self, direction: Direction, to: usize) {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *slot = Some(to);
    }
}

/// Mutable adjacency builder. Turn it into a [`Layout`] once wired.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node with no edges. A node with an existing index is replaced.
    pub fn add_node(&mut self, index: usize, layout: (usize, usize)) {
        match self.slot(index) {
            Some(i) => self.nodes[i] = Node::new(index, layout),
            None => self.nodes.push(Node::new(index, layout)),
        }
    }

    /// Two-way edge: `left` <-> `right`
    pub fn add_hor_edge(&mut self, left: usize, right: usize) {
        self.add_hor_chain(&[left, right]);
    }

    /// Two-way edges between every consecutive pair, left to right
    pub fn add_hor_chain(&mut self, chain: &[usize]) {
        self.apply_chain(chain, Direction::Right, true);
    }

    /// Two-way edge: `top` <-> `bottom`
    pub fn add_ver_edge(&mut self, top: usize, bottom: usize) {
        self.add_ver_chain(&[top, bottom]);
    }

    /// Two-way edges between every consecutive pair, top to bottom
    pub fn add_ver_chain(&mut self, chain: &[usize]) {
        self.apply_chain(chain, Direction::Down, true);
    }

    /// One-way edge: going up from `from` lands on `to`
    pub fn add_up_edge(&mut self, from: usize, to: usize) {
        self.apply_chain(&[from, to], Direction::Up, false);
    }

    pub fn add_down_edge(&mut self, from: usize, to: usize) {
        self.apply_chain(&[from, to], Direction::Down, false);
    }

    pub fn add_left_edge(&mut self, from: usize, to: usize) {
        self.apply_chain(&[from, to], Direction::Left, false);
    }

    pub fn add_right_edge(&mut self, from: usize, to: usize) {
        self.apply_chain(&[from, to], Direction::Right, false);
    }

    /// Find a node by pile index
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.iter().find(|n| n.index == index)
    }

    /// Find a node by grid cell
    pub fn node_at(&self, x: usize, y: usize) -> Option<&Node> {
        self.nodes.iter().find(|n| n.layout == (x, y))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn slot(&self, index: usize) -> Option<usize> {
        self.nodes.iter().position(|n| n.index == index)
    }

    // Pairs referring to unknown nodes are skipped.
    fn apply_chain(&mut self, chain: &[usize], direction: Direction, both_ways: bool) {
        for pair in chain.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let (Some(a), Some(b)) = (self.slot(from), self.slot(to)) else {
                continue;
            };
            self.nodes[a].set_neighbor(direction, to);
            if both_ways {
                self.nodes[b].set_neighbor(direction.opposite(), from);
            }
        }
    }
}

/// Immutable navigation graph plus the index <-> grid mapping used by
/// renderers.
#[derive(Debug, Clone)]
pub struct Layout {
    graph: Graph,
}

impl Layout {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    /// The Klondike board topology
    pub fn game() -> Self {
        let mut graph = Graph::new();

        // Top row skips column 2.
        let top_row = [(0, 0), (1, 1), (2, 3), (3, 4), (4, 5), (5, 6)];
        for (index, x) in top_row {
            graph.add_node(index, (x, 0));
        }
        for x in 0..7 {
            graph.add_node(6 + x, (x, 1));
        }

        graph.add_hor_chain(&[0, 1, 2, 3, 4, 5]);
        graph.add_hor_chain(&[6, 7, 8, 9, 10, 11, 12]);

        graph.add_ver_edge(0, 6);
        graph.add_ver_edge(1, 7);
        graph.add_ver_edge(2, 9);
        graph.add_ver_edge(3, 10);
        graph.add_ver_edge(4, 11);
        graph.add_ver_edge(5, 12);

        // Nothing sits above the third tableau pile; send it to the waste pile.
        graph.add_up_edge(8, 1);

        Self::new(graph)
    }

    /// `count` positions in one column, wrapping from the last back to the first
    pub fn vertical_ring(count: usize) -> Self {
        let mut graph = Graph::new();
        for i in 0..count {
            graph.add_node(i, (0, i));
        }
        if count > 1 {
            let mut chain: Vec<usize> = (0..count).collect();
            chain.push(0);
            graph.add_ver_chain(&chain);
        }
        Self::new(graph)
    }

    pub fn layout_to_index(&self, x: usize, y: usize) -> Option<usize> {
        self.graph.node_at(x, y).map(|n| n.index)
    }

    pub fn index_to_layout(&self, index: usize) -> Option<(usize, usize)> {
        self.graph.node(index).map(|n| n.layout)
    }

    /// Neighbour of `index` in `direction`, or `index` itself if there is none
    pub fn neighbor(&self, index: usize, direction: Direction) -> usize {
        self.graph
            .node(index)
            .and_then(|n| n.neighbor(direction))
            .unwrap_or(index)
    }

    pub fn up(&self, index: usize) -> usize {
        self.neighbor(index, Direction::Up)
    }

    pub fn down(&self, index: usize) -> usize {
        self.neighbor(index, Direction::Down)
    }

    pub fn left(&self, index: usize) -> usize {
        self.neighbor(index, Direction::Left)
    }

    pub fn right(&self, index: usize) -> usize {
        self.neighbor(index, Direction::Right)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_layout_grid_mapping() {
        let layout = Layout::game();
        assert_eq!(layout.index_to_layout(0), Some((0, 0)));
        assert_eq!(layout.index_to_layout(2), Some((3, 0)));
        assert_eq!(layout.index_to_layout(12), Some((6, 1)));
        assert_eq!(layout.layout_to_index(2, 0), None);
        assert_eq!(layout.layout_to_index(2, 1), Some(8));
        assert_eq!(layout.index_to_layout(13), None);
    }

    #[test]
    fn rows_are_chained_both_ways() {
        let layout = Layout::game();
        assert_eq!(layout.right(1), 2);
        assert_eq!(layout.left(2), 1);
        assert_eq!(layout.right(8), 9);
        assert_eq!(layout.left(9), 8);
    }

    #[test]
    fn columns_link_top_row_to_tableau() {
        let layout = Layout::game();
        assert_eq!(layout.down(0), 6);
        assert_eq!(layout.up(6), 0);
        assert_eq!(layout.down(2), 9);
        assert_eq!(layout.up(9), 2);
        assert_eq!(layout.down(5), 12);
    }

    #[test]
    fn one_way_edge_from_gap_column() {
        let layout = Layout::game();
        assert_eq!(layout.up(8), 1);
        // The waste pile still leads down to its own column.
        assert_eq!(layout.down(1), 7);
    }

    #[test]
    fn missing_edges_saturate() {
        let layout = Layout::game();
        assert_eq!(layout.left(0), 0);
        assert_eq!(layout.up(0), 0);
        assert_eq!(layout.right(5), 5);
        assert_eq!(layout.down(12), 12);
        assert_eq!(layout.left(6), 6);
        // Unknown nodes stay put as well.
        assert_eq!(layout.up(42), 42);
    }

    #[test]
    fn vertical_ring_wraps() {
        let layout = Layout::vertical_ring(4);
        assert_eq!(layout.down(0), 1);
        assert_eq!(layout.down(3), 0);
        assert_eq!(layout.up(0), 3);
        assert_eq!(layout.up(2), 1);
        assert_eq!(layout.left(2), 2);
    }

    #[test]
    fn single_entry_ring_stays_put() {
        let layout = Layout::vertical_ring(1);
        assert_eq!(layout.down(0), 0);
        assert_eq!(layout.up(0), 0);
    }

    #[test]
    fn chains_skip_unknown_nodes() {
        let mut graph = Graph::new();
        graph.add_node(0, (0, 0));
        graph.add_hor_edge(0, 7);
        assert_eq!(graph.node(0).unwrap().right, None);
    }
}
