use super::{Cell, Creature};

/// Board owns the live cell state of a fixed-size toroidal grid.
/// All coordinate arithmetic funnels through the wrapping accessors, so every
/// (x, y) pair is valid, including negative values and values past the edges.
#[derive(Clone)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells initially dead
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; (width * height) as usize],
        }
    }

    /// Get board dimensions
    pub const fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Map logical coordinates to a flat row-major index, wrapping both axes.
    /// `rem_euclid` keeps the remainder non-negative, so negative inputs land
    /// on the opposite edge.
    const fn index(&self, x: i32, y: i32) -> usize {
        let x = x.rem_euclid(self.width);
        let y = y.rem_euclid(self.height);
        (y * self.width + x) as usize
    }

    /// Get cell at position; total thanks to the toroidal wrap
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Set cell at position
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Flip the cell at position between Dead and Alive
    pub fn toggle(&mut self, x: i32, y: i32) {
        let idx = self.index(x, y);
        self.cells[idx] = self.cells[idx].toggle();
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Randomize the board (30% chance of alive)
    pub fn randomize(&mut self) {
        use rand::Rng;

        let mut rng = rand::rng();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.3) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Count live cells in the Moore neighborhood. Each offset wraps
    /// independently, so corner cells wrap on both axes at once.
    pub fn neighbor_count(&self, x: i32, y: i32) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| self.get(x + dx, y + dy).is_alive())
            .count() as u8
    }

    /// Paste a creature with its top-left corner at (x0, y0). Destination
    /// coordinates wrap toroidally; the creature's own rectangle does not.
    /// Dead creature cells overwrite live board cells: a hard paste, not a
    /// merge.
    pub fn stamp(&mut self, creature: &Creature, x0: i32, y0: i32) {
        for py in 0..creature.height() {
            for px in 0..creature.width() {
                self.set(x0 + px, y0 + py, creature.get(px, py));
            }
        }
    }

    /// Replace the live cells with `next` in a single swap, leaving the old
    /// generation in `next` for reuse as scratch.
    pub(crate) fn commit(&mut self, next: &mut Vec<Cell>) {
        assert_eq!(next.len(), self.cells.len(), "generation buffer shape mismatch");
        std::mem::swap(&mut self.cells, next);
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let (width, height) = (self.width, self.height);
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .map(move |(x, y)| (x, y, self.get(x, y)))
    }

    /// Number of live cells on the board
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    #[test]
    fn test_new_board_is_dead() {
        let board = Board::new(8, 6);
        assert_eq!(board.dimensions(), (8, 6));
        assert!(board.iter_cells().all(|(_, _, cell)| !cell.is_alive()));
    }

    #[test]
    fn test_wrap_invariant() {
        let mut board = Board::new(8, 6);
        board.set(2, 3, Cell::Alive);

        // Wraps any number of times on either axis, in both directions.
        assert_eq!(board.get(2, 3), Cell::Alive);
        assert_eq!(board.get(2 + 8, 3 + 6), Cell::Alive);
        assert_eq!(board.get(2 + 24, 3 + 18), Cell::Alive);
        assert_eq!(board.get(2 - 8, 3 - 6), Cell::Alive);
        assert_eq!(board.get(-6, -3), Cell::Alive);
        assert_eq!(board.population(), 1);
    }

    #[test]
    fn test_set_wraps_like_get() {
        let mut board = Board::new(8, 6);
        board.set(-1, -1, Cell::Alive);
        assert_eq!(board.get(7, 5), Cell::Alive);

        board.set(10, 7, Cell::Alive);
        assert_eq!(board.get(2, 1), Cell::Alive);
    }

    #[test]
    fn test_toggle() {
        let mut board = Board::new(5, 5);
        board.toggle(1, 1);
        assert_eq!(board.get(1, 1), Cell::Alive);
        board.toggle(1, 1);
        assert_eq!(board.get(1, 1), Cell::Dead);
        // Toggle through the wrap hits the same cell
        board.toggle(6, 6);
        assert_eq!(board.get(1, 1), Cell::Alive);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new(5, 4);
        board.set(0, 0, Cell::Alive);
        board.set(4, 3, Cell::Alive);
        board.clear();
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn test_neighbor_count_empty() {
        let board = Board::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(board.neighbor_count(x, y), 0);
            }
        }
    }

    #[test]
    fn test_neighbor_count_excludes_center() {
        let mut board = Board::new(5, 5);
        board.set(2, 2, Cell::Alive);
        assert_eq!(board.neighbor_count(2, 2), 0);
    }

    #[test]
    fn test_neighbor_count_full_block() {
        let mut board = Board::new(5, 5);
        for y in 1..=3 {
            for x in 1..=3 {
                board.set(x, y, Cell::Alive);
            }
        }
        assert_eq!(board.neighbor_count(2, 2), 8);
    }

    #[test]
    fn test_neighbor_count_wraps_at_corner() {
        // A cell at (0, 0) and one at the opposite corner are diagonal
        // neighbors on the torus.
        let mut board = Board::new(5, 4);
        board.set(4, 3, Cell::Alive);
        assert_eq!(board.neighbor_count(0, 0), 1);

        board.set(0, 3, Cell::Alive); // wraps vertically onto (0, 0)
        board.set(4, 0, Cell::Alive); // wraps horizontally onto (0, 0)
        assert_eq!(board.neighbor_count(0, 0), 3);
    }

    #[test]
    fn test_stamp_overwrites_dead_cells() {
        let mut board = Board::new(10, 10);
        // Fill the destination rectangle so the glider's dead cells must
        // overwrite live ones.
        for y in 0..3 {
            for x in 0..3 {
                board.set(x, y, Cell::Alive);
            }
        }
        let glider = catalog::glider_right();
        board.stamp(&glider, 0, 0);
        for py in 0..glider.height() {
            for px in 0..glider.width() {
                assert_eq!(board.get(px, py), glider.get(px, py));
            }
        }
        assert_eq!(board.population(), 5);
    }

    #[test]
    fn test_stamp_is_idempotent() {
        let mut board = Board::new(10, 10);
        let spaceship = catalog::spaceship();
        board.stamp(&spaceship, 3, 3);
        let once: Vec<_> = board.iter_cells().collect();
        board.stamp(&spaceship, 3, 3);
        let twice: Vec<_> = board.iter_cells().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_stamp_wraps_destination() {
        let mut board = Board::new(10, 8);
        let glider = catalog::glider_right();
        board.stamp(&glider, 9, 7);
        // Pattern (0, 0) is alive and lands on the stamped corner.
        assert_eq!(board.get(9, 7), Cell::Alive);
        // Pattern (1, 1) is alive and wraps onto (0, 0).
        assert_eq!(board.get(0, 0), Cell::Alive);
        // Pattern (0, 2) is alive and wraps vertically onto (9, 1).
        assert_eq!(board.get(9, 1), Cell::Alive);
        assert_eq!(board.population(), 5);
    }
}
