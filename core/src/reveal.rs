use std::collections::VecDeque;

use crate::*;

/// Reveals a hidden, unflagged cell and flood-fills through zero-count cells.
///
/// Out-of-bounds, revealed and flagged targets are left alone. A mine is left untouched and
/// reported as [`RevealOutcome::HitMine`]; reacting to it is up to the caller.
pub fn reveal(board: &mut Board, coords: Coord2) -> RevealOutcome {
    let Some(&cell) = board.get(coords) else {
        return RevealOutcome::NoChange;
    };

    if cell.revealed || cell.flagged {
        return RevealOutcome::NoChange;
    }

    if cell.is_mine {
        log::debug!("Hit mine at {:?}", coords);
        return RevealOutcome::HitMine(coords);
    }

    let mut opened = 0;
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        let visit = board.cell_mut(visit_coords);

        // a cell may be queued by several zero neighbours before it is reached
        if visit.revealed || visit.flagged {
            continue;
        }

        visit.revealed = true;
        opened += 1;
        let count = visit.adjacent_mines;
        log::trace!("Opened cell at {:?}, mine count: {}", visit_coords, count);

        if count == 0 && !visit.is_mine {
            to_visit.extend(
                board
                    .neighbors(visit_coords)
                    .filter(|&pos| board[pos].is_hidden() && !board[pos].is_flagged()),
            );
        }
    }

    log::debug!("Reveal at {:?} opened {} cells", coords, opened);
    RevealOutcome::Revealed
}

/// Whether `coords` is a revealed numbered cell that chording can expand from.
pub fn is_chordable(board: &Board, coords: Coord2) -> bool {
    board
        .get(coords)
        .is_some_and(|cell| cell.revealed && !cell.is_mine && cell.adjacent_mines > 0)
}

/// Reveals every hidden, unflagged neighbour of a revealed numbered cell.
///
/// The number of flags around the cell is not checked, so this can hit a mine. Neighbours are
/// visited in scan order and the chord stops at the first mine.
pub fn chord_reveal(board: &mut Board, coords: Coord2) -> RevealOutcome {
    if !is_chordable(board, coords) {
        return RevealOutcome::NoChange;
    }

    log::debug!("Chord at {:?}", coords);
    let mut outcome = RevealOutcome::NoChange;
    for neighbor_coords in board.neighbors(coords) {
        outcome = outcome | reveal(board, neighbor_coords);
        if matches!(outcome, RevealOutcome::HitMine(_)) {
            break;
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    fn revealed(board: &Board) -> Vec<Coord2> {
        board
            .iter()
            .filter(|(_, cell)| cell.is_revealed())
            .map(|(coords, _)| coords)
            .collect()
    }

    #[test]
    fn flood_fill_opens_zero_region_and_its_border() {
        let mut board = board(3, &[(2, 2)]);

        assert_eq!(reveal(&mut board, (0, 0)), RevealOutcome::Revealed);

        assert_eq!(board.cell_view((0, 0)), Some(CellView::Revealed(0)));
        assert_eq!(board.cell_view((1, 1)), Some(CellView::Revealed(1)));
        assert_eq!(board.cell_view((2, 2)), Some(CellView::Hidden));
        assert_eq!(board.revealed_count(), 8);
    }

    #[test]
    fn mine_free_corner_region_opens_in_one_call() {
        // mines far away from the 3x3 corner, which is then all zeros except its far border
        let mut board = board(10, &[(7, 7), (8, 2), (2, 8)]);

        reveal(&mut board, (0, 0));

        for x in 0..3 {
            for y in 0..3 {
                assert!(board[(x, y)].is_revealed(), "({}, {}) still hidden", x, y);
            }
        }
    }

    #[test]
    fn numbered_cell_does_not_expand() {
        let mut board = board(3, &[(0, 0)]);

        reveal(&mut board, (1, 1));

        assert_eq!(revealed(&board), vec![(1, 1)]);
    }

    #[test]
    fn flag_blocks_expansion_and_is_kept() {
        let mut board = board(4, &[(3, 3)]);
        board.cell_mut((1, 1)).flagged = true;

        reveal(&mut board, (0, 0));

        assert!(board[(1, 1)].is_flagged());
        assert!(!board[(1, 1)].is_revealed());
        // reachable around the flag
        assert!(board[(3, 0)].is_revealed());
        assert!(board[(0, 3)].is_revealed());
    }

    #[test]
    fn flagged_or_revealed_or_outside_target_is_noop() {
        let mut board = board(3, &[(2, 2)]);
        board.cell_mut((0, 0)).flagged = true;

        assert_eq!(reveal(&mut board, (0, 0)), RevealOutcome::NoChange);
        assert_eq!(reveal(&mut board, (3, 1)), RevealOutcome::NoChange);

        reveal(&mut board, (1, 1));
        let before = board.clone();
        assert_eq!(reveal(&mut board, (1, 1)), RevealOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut once = board(10, &[(5, 5), (5, 6), (0, 9)]);
        reveal(&mut once, (0, 0));

        let mut twice = once.clone();
        reveal(&mut twice, (0, 0));

        assert_eq!(once, twice);
    }

    #[test]
    fn large_empty_board_does_not_overflow() {
        let mut board = board(255, &[(254, 254)]);

        reveal(&mut board, (0, 0));

        assert_eq!(board.revealed_count(), board.total_cells() - 1);
    }

    #[test]
    fn hitting_mine_reports_coords() {
        let mut board = board(2, &[(0, 0)]);

        assert_eq!(reveal(&mut board, (0, 0)), RevealOutcome::HitMine((0, 0)));
        assert_eq!(board.cell_view((0, 0)), Some(CellView::Hidden));
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn chord_opens_unflagged_neighbors() {
        let mut board = board(3, &[(0, 1), (2, 1)]);
        reveal(&mut board, (1, 1));
        board.cell_mut((0, 1)).flagged = true;
        board.cell_mut((2, 1)).flagged = true;

        assert_eq!(chord_reveal(&mut board, (1, 1)), RevealOutcome::Revealed);

        assert_eq!(board.cell_view((1, 0)), Some(CellView::Revealed(2)));
        assert_eq!(board.cell_view((1, 2)), Some(CellView::Revealed(2)));
        assert_eq!(board.cell_view((0, 1)), Some(CellView::Flagged));
    }

    #[test]
    fn chord_ignores_flag_count_and_can_hit_mine() {
        let mut board = board(3, &[(0, 0), (2, 2)]);
        reveal(&mut board, (1, 1));
        board.cell_mut((0, 0)).flagged = true;

        assert_eq!(chord_reveal(&mut board, (1, 1)), RevealOutcome::HitMine((2, 2)));
        assert!(board[(2, 2)].is_hidden());
        assert!(board[(0, 0)].is_hidden());
        // safe neighbours scanned before the mine were opened
        assert!(board[(0, 1)].is_revealed());
        assert!(board[(2, 1)].is_revealed());
    }

    #[test]
    fn chord_stops_at_first_mine() {
        let mut board = board(3, &[(0, 0), (2, 2)]);
        reveal(&mut board, (1, 1));

        assert_eq!(chord_reveal(&mut board, (1, 1)), RevealOutcome::HitMine((0, 0)));

        assert!(board[(0, 0)].is_hidden());
        assert!(board[(2, 2)].is_hidden());
        assert_eq!(board.cell_view((2, 2)), Some(CellView::Hidden));
        assert_eq!(revealed(&board), vec![(1, 1)]);
    }

    #[test]
    fn chord_needs_revealed_numbered_cell() {
        let mut board = board(3, &[(2, 2)]);

        assert_eq!(chord_reveal(&mut board, (1, 1)), RevealOutcome::NoChange);

        reveal(&mut board, (0, 0));
        assert!(!is_chordable(&board, (0, 0)));
        assert!(is_chordable(&board, (1, 1)));
        assert_eq!(chord_reveal(&mut board, (0, 0)), RevealOutcome::NoChange);
    }
}
