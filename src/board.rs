use crate::error::BoardError;
use crate::hash::{Hash, HashHistory, ZOBRIST};
use crate::topology::for_each_4_nbr;
use crate::types::{
    color_to_showboard_char, player_of, Color, Nat, Player, Vertex, VertexMap, BOARD_SIZE,
};
use arrayvec::ArrayVec;
use std::fmt;

/// A move that passed `Board::validate` for one exact position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LegalMove {
    player: Player,
    vertex: Vertex,
    position: Hash,
}

impl LegalMove {
    pub fn player(&self) -> Player {
        self.player
    }

    pub fn vertex(&self) -> Vertex {
        self.vertex
    }
}

/// 19x19 position: stones, chain rings, Zobrist hash and the short
/// repetition history.
///
/// `place` trusts its caller; ask `is_valid` first (or go through
/// `validate` / `play`).
#[derive(Clone)]
pub struct Board {
    pub(crate) color_at: VertexMap<Color>,
    pub(crate) chain_next: VertexMap<Vertex>,
    hash: Hash,
    history: HashHistory,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board {
            color_at: VertexMap::new_with(Color::Empty),
            chain_next: VertexMap::from_fn(|v| v),
            hash: Hash::zero(),
            history: HashHistory::new(),
        };
        board.clear();
        board
    }

    pub fn clear(&mut self) {
        self.color_at.fill(Color::Empty);
        self.color_at[Vertex::sentinel()] = Color::OffBoard;
        for v in Vertex::all() {
            self.chain_next[v] = v;
        }
        self.hash = Hash::zero();
        self.history = HashHistory::new();
    }

    /// Independent deep copy for speculative play.
    pub fn copy(&self) -> Board {
        self.clone()
    }

    pub fn load(&mut self, source: &Board) {
        self.clone_from(source);
    }

    pub fn color_at(&self, v: Vertex) -> Color {
        self.color_at[v]
    }

    pub fn color(&self, x: usize, y: usize) -> Color {
        self.color_at[Vertex::of_coords(x, y)]
    }

    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn history(&self) -> &HashHistory {
        &self.history
    }

    pub fn stone_count(&self, player: Player) -> usize {
        let color = Color::from(player);
        Vertex::on_board()
            .filter(|&v| self.color_at[v] == color)
            .count()
    }

    /// From-scratch hash of the stones on the board. `hash()` must always
    /// agree with it.
    pub fn recalc_hash(&self) -> Hash {
        let mut hash = Hash::zero();
        for v in Vertex::on_board() {
            if let Some(pl) = player_of(self.color_at[v]) {
                hash ^= ZOBRIST.of_player_vertex(pl, v);
            }
        }
        hash
    }

    pub fn is_valid(&self, player: Player, x: usize, y: usize) -> bool {
        self.is_valid_at(player, Vertex::of_coords(x, y))
    }

    pub fn is_valid_at(&self, player: Player, v: Vertex) -> bool {
        self.is_placeable(player, v) && !self.is_ko(player, v)
    }

    /// Occupancy and suicide check, ignoring repetition.
    pub fn is_placeable(&self, player: Player, v: Vertex) -> bool {
        if self.color_at[v] != Color::Empty {
            return false;
        }

        // A direct liberty makes any move legal
        for_each_4_nbr!(v, nbr_v, {
            if self.color_at[nbr_v] == Color::Empty {
                return true;
            }
        });

        let own = Color::from(player);
        let opp = Color::from(player.opponent());
        for_each_4_nbr!(v, nbr_v, {
            let nbr_color = self.color_at[nbr_v];
            if nbr_color == opp {
                // v is its last liberty, so this captures
                if !self.has_two_liberties(nbr_v) {
                    return true;
                }
            } else if nbr_color == own && self.has_two_liberties(nbr_v) {
                return true;
            }
        });

        false
    }

    /// Hash the position would have right after `player` plays at `v`,
    /// captures included. Does not touch the board.
    pub fn hash_after(&self, player: Player, v: Vertex) -> Hash {
        let opp_player = player.opponent();
        let opp = Color::from(opp_player);
        let mut hash = self.hash ^ ZOBRIST.of_player_vertex(player, v);

        let mut captured = ArrayVec::<Vertex, 4>::new();
        for_each_4_nbr!(v, nbr_v, {
            if self.color_at[nbr_v] == opp
                && !self.has_two_liberties(nbr_v)
                && !captured.iter().any(|&c| self.same_chain(c, nbr_v))
            {
                captured.push(nbr_v);
                for stone in self.chain(nbr_v) {
                    hash ^= ZOBRIST.of_player_vertex(opp_player, stone);
                }
            }
        });

        hash
    }

    /// Would this move recreate one of the recently recorded positions?
    pub fn is_ko(&self, player: Player, v: Vertex) -> bool {
        self.history.contains(self.hash_after(player, v))
    }

    /// Checked counterpart of `is_valid_at` that says why a move is refused.
    pub fn validate(&self, player: Player, v: Vertex) -> Result<LegalMove, BoardError> {
        if self.color_at[v] != Color::Empty {
            tracing::trace!(%v, "rejected: occupied");
            return Err(BoardError::Occupied(v));
        }
        if !self.is_placeable(player, v) {
            tracing::trace!(%v, ?player, "rejected: suicide");
            return Err(BoardError::Suicide(v));
        }
        if self.is_ko(player, v) {
            tracing::trace!(%v, ?player, "rejected: repeats a recent position");
            return Err(BoardError::Ko(v));
        }
        Ok(LegalMove {
            player,
            vertex: v,
            position: self.hash,
        })
    }

    /// Applies a validated move, returning the number of captured stones.
    pub fn play(&mut self, mv: LegalMove) -> usize {
        debug_assert_eq!(
            self.hash, mv.position,
            "move at {} was validated against another position",
            mv.vertex
        );
        self.place_at(mv.player, mv.vertex)
    }

    pub fn place(&mut self, player: Player, x: usize, y: usize) -> usize {
        self.place_at(player, Vertex::of_coords(x, y))
    }

    /// Puts the stone down without any legality check and returns the number
    /// of captured stones. Only call with a move `is_valid_at` accepted.
    pub fn place_at(&mut self, player: Player, v: Vertex) -> usize {
        debug_assert!(
            self.color_at[v] == Color::Empty,
            "Trying to place {:?} stone at {} which has color {}",
            player,
            v,
            color_to_showboard_char(self.color_at[v])
        );

        let own = Color::from(player);
        let opp = Color::from(player.opponent());

        self.color_at[v] = own;
        self.chain_next[v] = v;
        self.hash ^= ZOBRIST.of_player_vertex(player, v);

        let mut captured_cnt = 0;
        for_each_4_nbr!(v, nbr_v, {
            let nbr_color = self.color_at[nbr_v];
            if nbr_color == opp {
                if !self.has_liberty(nbr_v) {
                    captured_cnt += self.remove_chain(nbr_v);
                }
            } else if nbr_color == own {
                self.merge_chains(v, nbr_v);
            }
        });

        self.history.push(self.hash);
        captured_cnt
    }

    pub fn exact_liberty_count(&self, x: usize, y: usize) -> usize {
        self.exact_liberty_count_at(Vertex::of_coords(x, y))
    }

    pub(crate) fn take_stone(&mut self, v: Vertex) {
        if let Some(pl) = player_of(self.color_at[v]) {
            self.hash ^= ZOBRIST.of_player_vertex(pl, v);
            self.color_at[v] = Color::Empty;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: String = (0..BOARD_SIZE)
            .map(|x| format!(" {}", Vertex::column_letter(x)))
            .collect();
        writeln!(f, "  {}", header)?;
        for y in 0..BOARD_SIZE {
            write!(f, "{:2}", BOARD_SIZE - y)?;
            for x in 0..BOARD_SIZE {
                write!(f, " {}", color_to_showboard_char(self.color(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board hash={} cursor={}", self.hash, self.history.cursor())?;
        fmt::Display::fmt(self, f)
    }
}
