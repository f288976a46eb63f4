use falling_blocks::core::{Board, Game, GameConfig, SequenceSource};
use falling_blocks::term::{GameView, Viewport};
use falling_blocks::types::{Command, PieceKind};

fn game(kinds: &[PieceKind]) -> Game<SequenceSource> {
    Game::new(GameConfig::default(), SequenceSource::new(kinds.to_vec())).unwrap()
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 22 rows + border = 24 tall.
    // The panel does not fit in a 22-column viewport and is clipped.
    let fb = view.render(&game(&[PieceKind::O]), Viewport::new(22, 24));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(21, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_active_piece_two_chars_wide() {
    let view = GameView::default();
    let fb = view.render(&game(&[PieceKind::I]), Viewport::new(34, 24));

    // I spawns in board row 1, columns 3-6: x = 1 + 3 * 2 .. 1 + 7 * 2.
    for x in 7..15 {
        assert_eq!(fb.get(x, 2).unwrap().ch, '█', "x = {x}");
    }
    assert_eq!(fb.get(5, 2).unwrap().ch, '·');
    assert_eq!(fb.get(15, 2).unwrap().ch, '·');
}

#[test]
fn term_view_draws_locked_cells() {
    let mut rows = vec![".........."; 22];
    rows[21] = "T.........";
    let board = Board::from_rows(&rows).unwrap();
    let game = Game::with_board(
        GameConfig::default(),
        board,
        SequenceSource::repeat(PieceKind::O),
    )
    .unwrap();

    let fb = GameView::default().render(&game, Viewport::new(34, 24));

    assert_eq!(fb.get(1, 22).unwrap().ch, '█');
    assert_eq!(fb.get(2, 22).unwrap().ch, '█');
    assert_eq!(fb.get(3, 22).unwrap().ch, '·');
}

#[test]
fn term_view_shows_score_and_lines() {
    let mut rows = vec![".........."; 22];
    rows[20] = "IIIIIIIIII";
    rows[21] = "IIIIIIIIII";
    let board = Board::from_rows(&rows).unwrap();
    let mut game = Game::with_board(
        GameConfig::default(),
        board,
        SequenceSource::repeat(PieceKind::O),
    )
    .unwrap();
    game.tick(Command::None);
    assert_eq!(game.score(), 100);

    let fb = GameView::default().render(&game, Viewport::new(34, 24));

    // Panel at x = 24: SCORE label on row 6, value on row 7, LINES on rows 9-10.
    assert!(fb.row_text(6).trim_end().ends_with("SCORE"));
    assert!(fb.row_text(7).trim_end().ends_with("100"));
    assert!(fb.row_text(9).trim_end().ends_with("LINES"));
    assert!(fb.row_text(10).trim_end().ends_with('2'));
}

#[test]
fn term_view_overlays_game_over() {
    let mut rows = vec![".........."; 22];
    rows[0] = "Z.........";
    let board = Board::from_rows(&rows).unwrap();
    let mut game = Game::with_board(
        GameConfig::default(),
        board,
        SequenceSource::repeat(PieceKind::T),
    )
    .unwrap();
    assert!(!game.tick(Command::None));

    let fb = GameView::default().render(&game, Viewport::new(34, 24));

    // Overlay sits on the middle row of the frame.
    assert!(fb.row_text(12).contains("GAME OVER"));
    // The active piece is no longer drawn.
    assert_eq!(fb.get(9, 2).unwrap().ch, '·');
}

#[test]
fn term_view_centers_in_large_viewport() {
    let fb = GameView::default().render(&game(&[PieceKind::O]), Viewport::new(80, 30));

    // Total width 34 => start_x = 23; height 24 => start_y = 3.
    assert_eq!(fb.get(23, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(44, 26).unwrap().ch, '┘');
}
