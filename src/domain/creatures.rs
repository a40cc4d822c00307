use super::{Board, Cell};

/// Identifies a creature in the catalog. Doubles as the id the presentation
/// layer hands back when asking for a stamp.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CreatureKind {
    GliderRight,
    GliderLeft,
    Spaceship,
    PrePulsar,
    Pulsar,
    QueenBee,
}

impl CreatureKind {
    pub const ALL: [CreatureKind; 6] = [
        CreatureKind::GliderRight,
        CreatureKind::GliderLeft,
        CreatureKind::Spaceship,
        CreatureKind::PrePulsar,
        CreatureKind::Pulsar,
        CreatureKind::QueenBee,
    ];
}

/// An immutable rectangular bit-matrix of a known Life configuration.
///
/// Creature data is validated once at construction; literal data outside
/// {0, 1} or with a shape mismatch is a programming error and panics rather
/// than being clamped. The rectangle itself never wraps; only the destination
/// offset of a stamp is taken modulo the board dimensions.
#[derive(Clone)]
pub struct Creature {
    pub name: &'static str,
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Creature {
    fn new(name: &'static str, width: i32, height: i32, bits: &[u8]) -> Self {
        assert_eq!(
            bits.len(),
            (width * height) as usize,
            "{name}: cell data does not match {width}x{height}"
        );
        let cells = bits
            .iter()
            .map(|&bit| match bit {
                0 => Cell::Dead,
                1 => Cell::Alive,
                other => panic!("{name}: invalid cell value {other}"),
            })
            .collect();
        Self { name, width, height, cells }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Get the cell at (x, y) within the creature's own rectangle
    pub fn get(&self, x: i32, y: i32) -> Cell {
        assert!(
            0 <= x && x < self.width && 0 <= y && y < self.height,
            "{}: ({x}, {y}) outside {}x{}",
            self.name,
            self.width,
            self.height
        );
        self.cells[(y * self.width + x) as usize]
    }
}

/// Fixed catalog of stampable creatures
pub mod catalog {
    use super::*;

    /// Glider moving down-right (period 4)
    pub fn glider_right() -> Creature {
        Creature::new(
            "Glider (right)",
            3,
            3,
            &[
                1, 0, 0, //
                0, 1, 1, //
                1, 1, 0,
            ],
        )
    }

    /// Mirror-image glider moving down-left (period 4)
    pub fn glider_left() -> Creature {
        Creature::new(
            "Glider (left)",
            3,
            3,
            &[
                0, 0, 1, //
                1, 1, 0, //
                0, 1, 1,
            ],
        )
    }

    /// Lightweight spaceship (period 4)
    pub fn spaceship() -> Creature {
        Creature::new(
            "Spaceship",
            5,
            4,
            &[
                1, 0, 0, 1, 0, //
                0, 0, 0, 0, 1, //
                0, 0, 0, 0, 1, //
                0, 1, 1, 1, 1,
            ],
        )
    }

    /// Seed that grows into a pulsar
    pub fn pre_pulsar() -> Creature {
        Creature::new(
            "Pre-pulsar",
            3,
            5,
            &[
                0, 1, 0, //
                1, 1, 1, //
                1, 0, 1, //
                1, 1, 1, //
                0, 1, 0,
            ],
        )
    }

    /// Pulsar oscillator (period 3)
    pub fn pulsar() -> Creature {
        Creature::new(
            "Pulsar",
            13,
            13,
            &[
                0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, //
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
                1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, //
                1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, //
                1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, //
                0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, //
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
                0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, //
                1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, //
                1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, //
                1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1, //
                0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, //
                0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0,
            ],
        )
    }

    /// Queen bee shuttle
    pub fn queen_bee() -> Creature {
        Creature::new(
            "Queen bee",
            4,
            7,
            &[
                1, 1, 0, 0, //
                0, 0, 1, 0, //
                0, 0, 0, 1, //
                0, 0, 0, 1, //
                0, 0, 0, 1, //
                0, 0, 1, 0, //
                1, 1, 0, 0,
            ],
        )
    }

    /// Look up a creature by id
    pub fn creature(kind: CreatureKind) -> Creature {
        match kind {
            CreatureKind::GliderRight => glider_right(),
            CreatureKind::GliderLeft => glider_left(),
            CreatureKind::Spaceship => spaceship(),
            CreatureKind::PrePulsar => pre_pulsar(),
            CreatureKind::Pulsar => pulsar(),
            CreatureKind::QueenBee => queen_bee(),
        }
    }

    /// All creatures, in `CreatureKind::ALL` order
    pub fn all() -> Vec<Creature> {
        CreatureKind::ALL.iter().map(|&kind| creature(kind)).collect()
    }
}

/// Deterministic startup layout. Offsets past the board edges are intentional
/// and wrap toroidally instead of being clamped.
pub fn seed(board: &mut Board) {
    let (width, height) = board.dimensions();
    board.stamp(&catalog::glider_right(), 0, 0);
    board.stamp(&catalog::glider_right(), 100, 100);
    board.stamp(&catalog::glider_left(), width - 6, 0);
    board.stamp(&catalog::pre_pulsar(), width / 2 - 7, height - 24);
    board.stamp(&catalog::pulsar(), width - 20, height - 20);
}
