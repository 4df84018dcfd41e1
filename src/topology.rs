use crate::types::{Dir, Nat, Vertex, VertexMap, BOARD_SIZE};

/// Orthogonal neighbor table for every vertex, sentinel included.
///
/// Steps off the edge land on the sentinel, and every step from the sentinel
/// stays on it, so walks never need a bounds check.
pub struct Topology {
    nbr: VertexMap<[Vertex; 4]>,
}

impl Topology {
    fn new() -> Self {
        let off = Vertex::sentinel();
        let nbr = VertexMap::from_fn(|v: Vertex| {
            if v.is_sentinel() {
                return [off; 4];
            }
            let (x, y) = (v.x(), v.y());
            let mut out = [off; 4];
            if y > 0 {
                out[Dir::N as usize] = Vertex::of_coords(x, y - 1);
            }
            if x + 1 < BOARD_SIZE {
                out[Dir::E as usize] = Vertex::of_coords(x + 1, y);
            }
            if y + 1 < BOARD_SIZE {
                out[Dir::S as usize] = Vertex::of_coords(x, y + 1);
            }
            if x > 0 {
                out[Dir::W as usize] = Vertex::of_coords(x - 1, y);
            }
            out
        });
        Topology { nbr }
    }

    /// N, E, S, W in that order.
    #[inline]
    pub fn nbr4(&self, v: Vertex) -> [Vertex; 4] {
        self.nbr[v]
    }

    #[inline]
    pub fn nbr(&self, v: Vertex, dir: Dir) -> Vertex {
        match dir.split() {
            None => self.nbr[v][dir as usize],
            Some((vertical, horizontal)) => {
                self.nbr[self.nbr[v][vertical as usize]][horizontal as usize]
            }
        }
    }

    pub fn is_consistent(&self) -> bool {
        Vertex::all().all(|v| {
            Dir::SIMPLE4.iter().all(|&dir| {
                let n = self.nbr(v, dir);
                n.is_sentinel() || self.nbr(n, dir.opposite()) == v
            })
        })
    }
}

lazy_static::lazy_static! {
    pub static ref TOPOLOGY: Topology = Topology::new();
}

pub fn vertex_nbr(v: Vertex, dir: Dir) -> Vertex {
    TOPOLOGY.nbr(v, dir)
}

// Unrolled walk over the 4 orthogonal neighbors
macro_rules! for_each_4_nbr {
    ($center_v:expr, $nbr_v:ident, $block:block) => {{
        let nbrs = $crate::topology::TOPOLOGY.nbr4($center_v);
        let $nbr_v = nbrs[0];
        $block
        let $nbr_v = nbrs[1];
        $block
        let $nbr_v = nbrs[2];
        $block
        let $nbr_v = nbrs[3];
        $block
    }};
}

pub(crate) use for_each_4_nbr;
