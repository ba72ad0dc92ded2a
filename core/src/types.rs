/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Chebyshev (king-move) distance between two positions.
pub const fn chebyshev_distance(a: Coord2, b: Coord2) -> Coord {
    let dx = a.0.abs_diff(b.0);
    let dy = a.1.abs_diff(b.1);
    if dx > dy { dx } else { dy }
}

/// Applies `delta` to `coords`, returning a value only when it remains on a board of side `size`.
fn apply_delta(coords: Coord2, delta: (i8, i8), size: Coord) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= size {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= size {
        return None;
    }

    Some((next_x, next_y))
}

/// Walks the square of cells within a Chebyshev radius of a center, clipped to the board.
///
/// Offsets are visited column-major: the outer loop runs over the x-offset from `-radius` to
/// `radius`, the inner loop over the y-offset. The flood fill only cares about the set, but the
/// explosion cascade derives its timing from this order.
#[derive(Clone, Debug)]
pub struct SquareIter {
    center: Coord2,
    size: Coord,
    radius: i8,
    include_center: bool,
    dx: i8,
    dy: i8,
}

impl SquareIter {
    fn new(center: Coord2, size: Coord, radius: i8, include_center: bool) -> Self {
        Self {
            center,
            size,
            radius,
            include_center,
            dx: -radius,
            dy: -radius,
        }
    }

    /// The up-to-8 Moore neighbours of `center`.
    pub fn neighbors(center: Coord2, size: Coord) -> Self {
        Self::new(center, size, 1, false)
    }

    /// Every cell within `radius` of `center`, the center included.
    pub fn area(center: Coord2, size: Coord, radius: i8) -> Self {
        Self::new(center, size, radius, true)
    }
}

impl Iterator for SquareIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.dx <= self.radius {
            let delta = (self.dx, self.dy);
            if self.dy == self.radius {
                self.dy = -self.radius;
                self.dx += 1;
            } else {
                self.dy += 1;
            }

            if delta == (0, 0) && !self.include_center {
                continue;
            }

            if let Some(pos) = apply_delta(self.center, delta, self.size) {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_clipped_at_corners_and_edges() {
        assert_eq!(SquareIter::neighbors((0, 0), 10).count(), 3);
        assert_eq!(SquareIter::neighbors((9, 9), 10).count(), 3);
        assert_eq!(SquareIter::neighbors((0, 5), 10).count(), 5);
        assert_eq!(SquareIter::neighbors((5, 5), 10).count(), 8);
        assert_eq!(SquareIter::neighbors((0, 0), 1).count(), 0);
    }

    #[test]
    fn neighbors_exclude_center() {
        assert!(SquareIter::neighbors((4, 4), 10).all(|pos| pos != (4, 4)));
    }

    #[test]
    fn area_is_column_major() {
        let cells: Vec<_> = SquareIter::area((1, 1), 10, 1).collect();
        assert_eq!(
            cells,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn area_is_clipped_to_board() {
        assert_eq!(SquareIter::area((0, 0), 10, 2).count(), 9);
        assert_eq!(SquareIter::area((5, 5), 10, 2).count(), 25);
        assert_eq!(SquareIter::area((9, 5), 10, 2).count(), 15);
    }

    #[test]
    fn chebyshev_distance_takes_larger_axis() {
        assert_eq!(chebyshev_distance((0, 0), (0, 0)), 0);
        assert_eq!(chebyshev_distance((1, 1), (0, 0)), 1);
        assert_eq!(chebyshev_distance((2, 5), (4, 4)), 2);
    }
}
