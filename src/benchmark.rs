use crate::board::Board;
use crate::fast_random::FastRandom;
use crate::perf_counter::PerfCounter;
use crate::types::{Player, Vertex, BOARD_AREA};
use std::fmt;
use std::time::Instant;

/// Knobs of a playout run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub playouts: usize,
    pub seed: u32,
    /// Plies after which a playout is cut off, passes included.
    pub max_moves: usize,
    /// When set, the run asserts this total move count.
    pub expected_moves: Option<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            playouts: 10_000,
            seed: 123,
            max_moves: 3 * BOARD_AREA,
            expected_moves: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkReport {
    pub playouts: usize,
    pub moves: usize,
    pub captured: usize,
    pub seconds: f64,
    pub cycles: Option<u64>,
}

impl BenchmarkReport {
    pub fn kpps(&self) -> f64 {
        self.playouts as f64 / self.seconds / 1000.0
    }

    pub fn avg_moves(&self) -> f64 {
        self.moves as f64 / self.playouts as f64
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cc_per_move = match self.cycles {
            Some(cycles) => format!("{:.1}", cycles as f64 / self.moves as f64),
            None => "N/A".to_string(),
        };
        write!(
            f,
            "\n{} playouts \n\
             in {:.6} seconds => {:.3} kpps\n\
             CC/move (perf counter): {}\n\
             {} stones captured\n\
             AVG moves/playout = {:.6}",
            self.playouts,
            self.seconds,
            self.kpps(),
            cc_per_move,
            self.captured,
            self.avg_moves()
        )
    }
}

/// Uniformly random legal playouts from the empty board.
pub struct Benchmark {
    config: BenchmarkConfig,
    empty_board: Board,
    board: Board,
    random: FastRandom,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        let empty_board = Board::new();
        Benchmark {
            random: FastRandom::new(config.seed),
            board: empty_board.copy(),
            empty_board,
            config,
        }
    }

    /// First legal vertex scanning from a random offset.
    fn pick_move(&mut self, player: Player) -> Option<Vertex> {
        let start = self.random.next_below(BOARD_AREA);
        (0..BOARD_AREA)
            .map(|i| Vertex::from((start + i) % BOARD_AREA))
            .find(|&v| self.board.is_valid_at(player, v))
    }

    /// Returns (plies, captured stones) of one playout.
    fn playout(&mut self) -> (usize, usize) {
        self.board.load(&self.empty_board);

        let mut player = Player::Black;
        let mut passes = 0;
        let mut moves = 0;
        let mut captured = 0;
        while passes < 2 && moves < self.config.max_moves {
            match self.pick_move(player) {
                Some(v) => {
                    captured += self.board.place_at(player, v);
                    passes = 0;
                }
                None => passes += 1,
            }
            moves += 1;
            player = player.opponent();
        }
        (moves, captured)
    }

    pub fn run(&mut self) -> BenchmarkReport {
        self.random = FastRandom::new(self.config.seed);
        tracing::info!(
            playouts = self.config.playouts,
            seed = self.config.seed,
            "starting playouts"
        );

        let mut perf_counter = PerfCounter::new();
        perf_counter.start();
        let start = Instant::now();

        let mut moves = 0;
        let mut captured = 0;
        for i in 0..self.config.playouts {
            let (playout_moves, playout_captured) = self.playout();
            tracing::debug!(
                playout = i,
                moves = playout_moves,
                captured = playout_captured,
                "playout finished"
            );
            moves += playout_moves;
            captured += playout_captured;
        }

        let seconds = start.elapsed().as_secs_f64();
        perf_counter.stop();
        let cycles = perf_counter.read();

        if let Some(expected) = self.config.expected_moves {
            assert_eq!(expected, moves, "playout move count drifted");
        }

        let report = BenchmarkReport {
            playouts: self.config.playouts,
            moves,
            captured,
            seconds,
            cycles,
        };
        tracing::info!(moves, seconds, "playouts done");
        report
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
}
