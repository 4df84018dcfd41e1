use go_board_core::{Board, BoardError, Color, HashHistory, Player, Vertex};

fn put(board: &mut Board, player: Player, x: usize, y: usize) -> usize {
    assert!(
        board.is_valid(player, x, y),
        "{:?} at ({}, {}) should be legal\n{}",
        player,
        x,
        y,
        board
    );
    board.place(player, x, y)
}

fn is_empty(board: &Board, x: usize, y: usize) -> bool {
    board.color(x, y) == Color::Empty
}

/// Black stones on the four sides of (9, 9); when `surrounded`, each of them
/// is closed in by white so (9, 9) is its last liberty.
fn eye_position(surrounded: bool) -> Board {
    let mut board = Board::new();
    for (x, y) in [(9, 8), (10, 9), (9, 10), (8, 9)] {
        put(&mut board, Player::Black, x, y);
    }
    if surrounded {
        for (x, y) in [
            (9, 7),
            (8, 8),
            (10, 8),
            (11, 9),
            (10, 10),
            (9, 11),
            (8, 10),
            (7, 9),
        ] {
            put(&mut board, Player::White, x, y);
        }
    }
    board
}

#[test]
fn filling_the_eye_captures_all_four_stones() {
    let mut board = eye_position(true);
    for (x, y) in [(9, 8), (10, 9), (9, 10), (8, 9)] {
        assert_eq!(board.exact_liberty_count(x, y), 1);
    }

    assert!(board.is_valid(Player::White, 9, 9));
    let predicted = board.hash_after(Player::White, Vertex::of_coords(9, 9));
    assert_eq!(board.place(Player::White, 9, 9), 4);

    assert_eq!(board.stone_count(Player::Black), 0);
    assert_eq!(board.stone_count(Player::White), 9);
    for (x, y) in [(9, 8), (10, 9), (9, 10), (8, 9)] {
        assert!(is_empty(&board, x, y));
    }
    assert_eq!(board.hash(), predicted);
    assert_eq!(board.hash(), board.recalc_hash());
    assert_eq!(board.exact_liberty_count(9, 9), 4);
}

#[test]
fn playing_into_a_living_eye_is_suicide() {
    let board = eye_position(false);
    assert!(!board.is_valid(Player::White, 9, 9));
    assert_eq!(
        board.validate(Player::White, Vertex::of_coords(9, 9)),
        Err(BoardError::Suicide(Vertex::of_coords(9, 9)))
    );
    // The owner may still fill it.
    assert!(board.is_valid(Player::Black, 9, 9));
}

#[test]
fn corner_suicide_is_rejected() {
    let mut board = Board::new();
    put(&mut board, Player::Black, 1, 0);
    put(&mut board, Player::Black, 0, 1);
    assert!(!board.is_valid(Player::White, 0, 0));
    assert!(board.is_valid(Player::Black, 0, 0));
}

#[test]
fn joining_a_group_with_a_spare_liberty_is_legal() {
    let mut board = Board::new();
    for (x, y) in [(8, 9), (10, 9), (9, 10)] {
        put(&mut board, Player::Black, x, y);
    }
    put(&mut board, Player::White, 9, 8);

    assert_eq!(put(&mut board, Player::White, 9, 9), 0);
    assert_eq!(board.chain_len(Vertex::of_coords(9, 9)), 2);
    assert!(board.same_chain(Vertex::of_coords(9, 9), Vertex::of_coords(9, 8)));
    assert_eq!(board.exact_liberty_count(9, 9), 3);
}

#[test]
fn joining_a_group_in_atari_without_capture_is_suicide() {
    let mut board = Board::new();
    for (x, y) in [(8, 9), (10, 9), (9, 10), (9, 7), (8, 8), (10, 8)] {
        put(&mut board, Player::Black, x, y);
    }
    put(&mut board, Player::White, 9, 8);
    assert_eq!(board.exact_liberty_count(9, 8), 1);

    assert!(!board.is_placeable(Player::White, Vertex::of_coords(9, 9)));
    assert!(!board.is_valid(Player::White, 9, 9));
}

#[test]
fn group_touching_the_move_twice_is_captured_once() {
    let mut board = Board::new();
    for (x, y) in [(0, 1), (0, 0), (1, 0)] {
        put(&mut board, Player::Black, x, y);
    }
    put(&mut board, Player::White, 0, 2);
    put(&mut board, Player::White, 2, 0);
    assert_eq!(board.chain_len(Vertex::of_coords(0, 0)), 3);
    assert_eq!(board.exact_liberty_count(0, 0), 1);

    let v = Vertex::of_coords(1, 1);
    let predicted = board.hash_after(Player::White, v);
    assert_eq!(board.place_at(Player::White, v), 3);
    assert_eq!(board.hash(), predicted);
    assert_eq!(board.hash(), board.recalc_hash());
    assert_eq!(board.stone_count(Player::Black), 0);
}

#[test]
fn merging_through_the_new_stone_joins_all_rings() {
    let mut board = Board::new();
    for (x, y) in [(4, 5), (6, 5), (5, 4), (5, 6), (3, 5)] {
        put(&mut board, Player::Black, x, y);
    }
    put(&mut board, Player::Black, 5, 5);

    let center = Vertex::of_coords(5, 5);
    assert_eq!(board.chain_len(center), 6);
    for (x, y) in [(4, 5), (6, 5), (5, 4), (5, 6), (3, 5)] {
        assert!(board.same_chain(center, Vertex::of_coords(x, y)));
    }
}

/// Classic ko around (9, 9) / (10, 9):
///
/// ```text
///   . # O .
///   # O . O
///   . # O .
/// ```
fn ko_position() -> Board {
    let mut board = Board::new();
    for (x, y) in [(9, 8), (8, 9), (9, 10)] {
        put(&mut board, Player::Black, x, y);
    }
    for (x, y) in [(9, 9), (10, 8), (11, 9), (10, 10)] {
        put(&mut board, Player::White, x, y);
    }
    board
}

#[test]
fn immediate_ko_recapture_is_rejected() {
    let mut board = ko_position();
    assert_eq!(put(&mut board, Player::Black, 10, 9), 1);
    assert!(is_empty(&board, 9, 9));

    let ko = Vertex::of_coords(9, 9);
    assert!(board.is_placeable(Player::White, ko));
    assert!(board.is_ko(Player::White, ko));
    assert!(!board.is_valid(Player::White, 9, 9));
    assert_eq!(board.validate(Player::White, ko), Err(BoardError::Ko(ko)));
}

#[test]
fn ko_recapture_after_exchange_elsewhere_is_accepted() {
    let mut board = ko_position();
    put(&mut board, Player::Black, 10, 9);
    put(&mut board, Player::White, 3, 3);
    put(&mut board, Player::Black, 15, 15);

    let mv = board
        .validate(Player::White, Vertex::of_coords(9, 9))
        .expect("ko threat answered, recapture is legal");
    assert_eq!(board.play(mv), 1);
    assert!(is_empty(&board, 10, 9));
    assert_eq!(board.hash(), board.recalc_hash());
}

#[test]
fn history_keeps_one_hash_per_move() {
    let mut board = Board::new();
    assert!(board.history().iter().all(|h| h.raw() == 0));

    let mut hashes = Vec::new();
    for x in 0..(HashHistory::CAPACITY + 2) {
        put(&mut board, Player::Black, x, 0);
        hashes.push(board.hash());
    }
    let kept: Vec<_> = board.history().iter().collect();
    assert_eq!(kept, hashes[2..].to_vec());
    assert!(!board.history().contains(hashes[1]));
    assert_eq!(board.history().cursor(), 2);
}

#[test]
fn validate_reports_occupied_points() {
    let mut board = Board::new();
    let v: Vertex = "D4".parse().unwrap();
    let mv = board.validate(Player::Black, v).unwrap();
    assert_eq!(mv.vertex(), v);
    assert_eq!(mv.player(), Player::Black);
    board.play(mv);

    assert_eq!(
        board.validate(Player::White, v),
        Err(BoardError::Occupied(v))
    );
    assert!(!board.is_valid_at(Player::Black, v));
    assert!(!board.is_valid_at(Player::White, Vertex::sentinel()));
}

#[test]
fn copies_are_independent() {
    let mut board = ko_position();
    let snapshot = board.copy();

    board.place(Player::Black, 10, 9);
    assert_ne!(board.hash(), snapshot.hash());
    assert!(is_empty(&snapshot, 10, 9));
    assert!(snapshot.color(9, 9) == Color::White);
    assert_ne!(board.history(), snapshot.history());

    let mut other = Board::new();
    other.load(&snapshot);
    assert_eq!(other.hash(), snapshot.hash());
    assert_eq!(other.history(), snapshot.history());
    assert!(other.is_valid(Player::Black, 10, 9));
}

#[test]
fn liberty_counts_share_common_points() {
    let mut board = Board::new();
    assert_eq!(board.exact_liberty_count(9, 9), 0);

    put(&mut board, Player::Black, 0, 0);
    put(&mut board, Player::Black, 5, 0);
    put(&mut board, Player::Black, 9, 9);
    assert_eq!(board.exact_liberty_count(0, 0), 2);
    assert_eq!(board.exact_liberty_count(5, 0), 3);
    assert_eq!(board.exact_liberty_count(9, 9), 4);

    put(&mut board, Player::Black, 10, 9);
    assert_eq!(board.exact_liberty_count(9, 9), 6);
    put(&mut board, Player::Black, 9, 10);
    assert_eq!(board.exact_liberty_count(10, 9), 7);

    let v = Vertex::of_coords(9, 9);
    assert!(board.has_liberty(v));
    assert!(board.has_two_liberties(v));
}

#[test]
fn vertex_text_round_trips() {
    let v: Vertex = "D4".parse().unwrap();
    assert_eq!((v.x(), v.y()), (3, 15));
    assert_eq!(v.to_string(), "D4");

    let corner: Vertex = "t19".parse().unwrap();
    assert_eq!((corner.x(), corner.y()), (18, 0));
    assert_eq!("J1".parse::<Vertex>().unwrap(), Vertex::of_coords(8, 18));

    for bad in ["I5", "Z1", "A0", "A20", "", "D"] {
        assert!(
            matches!(bad.parse::<Vertex>(), Err(BoardError::InvalidVertex(_))),
            "{:?} parsed",
            bad
        );
    }
    assert_eq!(
        Vertex::try_of_coords(19, 0),
        Err(BoardError::CoordsOutOfRange { x: 19, y: 0 })
    );
}

#[test]
fn display_shows_stones() {
    let board = ko_position();
    let text = board.to_string();
    assert!(text.starts_with("   A B C D E F G H J"));
    assert_eq!(text.lines().count(), 20);
    let rows: String = text.lines().skip(1).collect();
    assert_eq!(rows.matches('#').count(), 3);
    assert_eq!(rows.matches('O').count(), 4);
    assert!(text.lines().nth(10).unwrap().starts_with("10 "));
}
