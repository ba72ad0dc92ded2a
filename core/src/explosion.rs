use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Gap between two consecutive cells of the cascade.
pub const CASCADE_STEP: Duration = Duration::from_millis(100);

/// Chebyshev radius of the blast around a detonated mine.
pub const BLAST_RADIUS: i8 = 2;

/// One scheduled cell of an explosion cascade.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExplosionStep {
    /// Game that scheduled the step, see [`Game::generation`].
    pub generation: u32,
    pub coords: Coord2,
}

/// Cells of the blast around `origin` paired with their delay from the detonation.
///
/// Cells come in column-major scan order of the clipped 5x5 block, the i-th one delayed by
/// `i * CASCADE_STEP`.
pub fn cascade(size: Coord, origin: Coord2) -> impl Iterator<Item = (Duration, Coord2)> {
    SquareIter::area(origin, size, BLAST_RADIUS)
        .zip(0u32..)
        .map(|(coords, index)| (CASCADE_STEP * index, coords))
}

/// Hands every step of the cascade to `scheduler`, returning how many were scheduled.
pub fn schedule_cascade<S: Scheduler>(
    scheduler: &mut S,
    generation: u32,
    size: Coord,
    origin: Coord2,
) -> usize {
    let mut scheduled = 0;
    for (delay, coords) in cascade(size, origin) {
        scheduler.schedule(delay, ExplosionStep { generation, coords });
        scheduled += 1;
    }
    log::debug!("Scheduled {} explosion steps around {:?}", scheduled, origin);
    scheduled
}

/// Marks a still hidden cell as exploding. Revealed cells are skipped.
pub(crate) fn explode(board: &mut Board, coords: Coord2) -> bool {
    match board.get(coords) {
        Some(cell) if cell.is_hidden() => {
            board.cell_mut(coords).exploding = true;
            log::trace!("Cell at {:?} exploding", coords);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(Duration, ExplosionStep)>);

    impl Scheduler for Recorder {
        fn schedule(&mut self, delay: Duration, step: ExplosionStep) {
            self.0.push((delay, step));
        }
    }

    #[test]
    fn delays_increase_by_one_step_in_scan_order() {
        let mut recorder = Recorder::default();

        assert_eq!(schedule_cascade(&mut recorder, 3, 10, (5, 5)), 25);

        for (index, (delay, step)) in recorder.0.iter().enumerate() {
            assert_eq!(*delay, Duration::from_millis(100 * index as u64));
            assert_eq!(step.generation, 3);
        }
        assert!(recorder.0.windows(2).all(|pair| pair[1].0 - pair[0].0 == CASCADE_STEP));

        let first: Vec<_> = recorder.0.iter().take(6).map(|(_, step)| step.coords).collect();
        assert_eq!(first, vec![(3, 3), (3, 4), (3, 5), (3, 6), (3, 7), (4, 3)]);
    }

    #[test]
    fn clipped_blast_keeps_even_spacing() {
        let steps: Vec<_> = cascade(10, (0, 0)).collect();

        assert_eq!(steps.len(), 9);
        assert_eq!(steps[0], (Duration::ZERO, (0, 0)));
        assert_eq!(steps[1], (CASCADE_STEP, (0, 1)));
        assert_eq!(steps[8], (CASCADE_STEP * 8, (2, 2)));
    }

    #[test]
    fn explode_skips_revealed_cells() {
        let mut board = Board::from_mine_coords(3, &[(2, 2)]).unwrap();
        board.cell_mut((0, 0)).revealed = true;

        assert!(!explode(&mut board, (0, 0)));
        assert!(explode(&mut board, (1, 1)));
        assert!(!explode(&mut board, (4, 4)));

        assert!(!board[(0, 0)].is_exploding());
        assert!(board[(1, 1)].is_exploding());
    }
}
