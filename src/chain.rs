//! Group and liberty queries over the chain rings.
//!
//! Every stone points at the next stone of its group through `chain_next`;
//! following the pointers from any member visits the whole group and comes
//! back to the start. All walks below stop on that revisit.

use crate::board::Board;
use crate::topology::for_each_4_nbr;
use crate::types::{color_is_player, Color, Vertex, VertexMap, VertexSet};

/// Members of one chain, starting from the vertex it was created with.
pub struct ChainIter<'a> {
    chain_next: &'a VertexMap<Vertex>,
    start: Vertex,
    current: Option<Vertex>,
}

impl Iterator for ChainIter<'_> {
    type Item = Vertex;

    fn next(&mut self) -> Option<Vertex> {
        let v = self.current?;
        let next = self.chain_next[v];
        self.current = if next == self.start { None } else { Some(next) };
        Some(v)
    }
}

impl Board {
    /// Ring members of the group at `v`. Empty for a vertex without a stone.
    pub fn chain(&self, v: Vertex) -> ChainIter<'_> {
        ChainIter {
            chain_next: &self.chain_next,
            start: v,
            current: color_is_player(self.color_at[v]).then_some(v),
        }
    }

    pub fn chain_len(&self, v: Vertex) -> usize {
        self.chain(v).count()
    }

    pub fn same_chain(&self, a: Vertex, b: Vertex) -> bool {
        let mut current = a;
        loop {
            if current == b {
                return true;
            }
            current = self.chain_next[current];
            if current == a {
                return false;
            }
        }
    }

    /// True as soon as any member touches an empty point.
    pub fn has_liberty(&self, v: Vertex) -> bool {
        let mut current = v;
        loop {
            for_each_4_nbr!(current, nbr_v, {
                if self.color_at[nbr_v] == Color::Empty {
                    return true;
                }
            });
            current = self.chain_next[current];
            if current == v {
                return false;
            }
        }
    }

    /// True as soon as two distinct liberties are found. Stones of one group
    /// often share a liberty, so only a different vertex counts as the second.
    pub fn has_two_liberties(&self, v: Vertex) -> bool {
        let mut first_lib = Vertex::sentinel();
        let mut current = v;
        loop {
            for_each_4_nbr!(current, nbr_v, {
                if self.color_at[nbr_v] == Color::Empty {
                    if first_lib.is_sentinel() {
                        first_lib = nbr_v;
                    } else if first_lib != nbr_v {
                        return true;
                    }
                }
            });
            current = self.chain_next[current];
            if current == v {
                return false;
            }
        }
    }

    /// Distinct liberties of the group at `v`; 0 if `v` holds no stone.
    pub fn exact_liberty_count_at(&self, v: Vertex) -> usize {
        if !color_is_player(self.color_at[v]) {
            return 0;
        }
        let mut seen = VertexSet::new();
        seen.mark(Vertex::sentinel());

        let mut lib_cnt = 0;
        let mut current = v;
        loop {
            for_each_4_nbr!(current, nbr_v, {
                if self.color_at[nbr_v] == Color::Empty && seen.insert(nbr_v) {
                    lib_cnt += 1;
                }
            });
            current = self.chain_next[current];
            if current == v {
                return lib_cnt;
            }
        }
    }

    /// Joins the rings through `v_base` and `v_add`, both stones of one color.
    /// Swapping the two successors turns two disjoint cycles into one.
    pub(crate) fn merge_chains(&mut self, v_base: Vertex, v_add: Vertex) {
        if self.same_chain(v_base, v_add) {
            return;
        }
        let base_next = self.chain_next[v_base];
        let add_next = self.chain_next[v_add];
        self.chain_next[v_base] = add_next;
        self.chain_next[v_add] = base_next;
    }

    /// Empties the whole group at `v`, returning how many stones went.
    pub(crate) fn remove_chain(&mut self, v: Vertex) -> usize {
        let mut removed = 0;
        let mut current = v;
        loop {
            let next = self.chain_next[current];
            self.take_stone(current);
            self.chain_next[current] = current;
            removed += 1;
            current = next;
            if current == v {
                return removed;
            }
        }
    }
}
