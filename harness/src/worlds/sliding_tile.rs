//! `SlidingTile`: the `n x n` sliding-tile puzzle.
//!
//! Tiles are numbered `1..n*n`, the blank is `0`. The solved layout is
//! row-major `1, 2, ..., n*n - 1` with the blank in the last cell. A move
//! slides the blank one cell up, down, left or right.
//!
//! Goal: the solved layout. Heuristic: sum of Manhattan distances of the
//! numbered tiles from their solved cells (never overestimates).

use rand::Rng;
use waypoint_search::SearchNode;

use crate::contract::ReportState;
use crate::error::HarnessError;

/// Smallest supported board side.
pub const MIN_SIDE: usize = 2;

/// Largest supported board side (tile numbers must fit in `u16`).
pub const MAX_SIDE: usize = 255;

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves, in child generation order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A sliding-tile board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlidingTile {
    side: usize,
    tiles: Vec<u16>,
    blank: usize,
}

impl SlidingTile {
    /// The solved board of the given side.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if `side` is outside
    /// `MIN_SIDE..=MAX_SIDE`.
    pub fn solved(side: usize) -> Result<Self, HarnessError> {
        check_side(side)?;
        let cells = side * side;
        let tiles = (1..cells)
            .map(|t| u16::try_from(t).map_err(|_| HarnessError::invalid_config("tile overflow")))
            .chain(std::iter::once(Ok(0)))
            .collect::<Result<Vec<u16>, _>>()?;
        Ok(Self {
            side,
            tiles,
            blank: cells - 1,
        })
    }

    /// A board with an explicit row-major layout.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] if the side is unsupported or
    /// `tiles` is not a permutation of `0..side*side`.
    pub fn from_tiles(side: usize, tiles: Vec<u16>) -> Result<Self, HarnessError> {
        check_side(side)?;
        let cells = side * side;
        if tiles.len() != cells {
            return Err(HarnessError::invalid_config(format!(
                "expected {cells} tiles for side {side}, got {}",
                tiles.len()
            )));
        }
        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or_else(|| HarnessError::invalid_config(format!("tile {tile} out of range")))?;
            if *slot {
                return Err(HarnessError::invalid_config(format!("tile {tile} repeated")));
            }
            *slot = true;
        }
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or_else(|| HarnessError::invalid_config("no blank tile"))?;
        Ok(Self { side, tiles, blank })
    }

    /// A solved board scrambled by `moves` random blank moves.
    ///
    /// Moves that would push the blank off the board leave it in place, so
    /// the scramble distance is at most `moves`.
    ///
    /// # Errors
    ///
    /// Same as [`SlidingTile::solved`].
    pub fn shuffled<R: Rng + ?Sized>(
        side: usize,
        moves: usize,
        rng: &mut R,
    ) -> Result<Self, HarnessError> {
        let mut board = Self::solved(side)?;
        for _ in 0..moves {
            let mv = Move::ALL[rng.random_range(0..Move::ALL.len())];
            board.slide_in_place(mv);
        }
        Ok(board)
    }

    /// A solved board scrambled by `side^3` random blank moves.
    ///
    /// # Errors
    ///
    /// Same as [`SlidingTile::solved`].
    pub fn shuffled_default<R: Rng + ?Sized>(side: usize, rng: &mut R) -> Result<Self, HarnessError> {
        Self::shuffled(side, side.pow(3), rng)
    }

    /// Board side length.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Row-major tile layout.
    #[must_use]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.side, self.blank % self.side)
    }

    /// The board after sliding the blank, or `None` if it would leave the board.
    #[must_use]
    pub fn slide(&self, mv: Move) -> Option<Self> {
        let target = self.neighbor(mv)?;
        let mut next = self.clone();
        next.tiles.swap(next.blank, target);
        next.blank = target;
        Some(next)
    }

    /// Apply a sequence of moves; moves off the board are ignored.
    #[must_use]
    pub fn apply_moves(&self, moves: &[Move]) -> Self {
        let mut board = self.clone();
        for &mv in moves {
            board.slide_in_place(mv);
        }
        board
    }

    /// Sum of Manhattan distances of numbered tiles from their solved cells.
    #[must_use]
    pub fn manhattan_distance(&self) -> u64 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(cell, &tile)| {
                let home = usize::from(tile) - 1;
                let rows = (cell / self.side).abs_diff(home / self.side);
                let cols = (cell % self.side).abs_diff(home % self.side);
                (rows + cols) as u64
            })
            .sum()
    }

    fn slide_in_place(&mut self, mv: Move) {
        if let Some(target) = self.neighbor(mv) {
            self.tiles.swap(self.blank, target);
            self.blank = target;
        }
    }

    fn neighbor(&self, mv: Move) -> Option<usize> {
        let (row, col) = self.blank_position();
        let last = self.side - 1;
        match mv {
            Move::Up if row > 0 => Some(self.blank - self.side),
            Move::Down if row < last => Some(self.blank + self.side),
            Move::Left if col > 0 => Some(self.blank - 1),
            Move::Right if col < last => Some(self.blank + 1),
            _ => None,
        }
    }
}

fn check_side(side: usize) -> Result<(), HarnessError> {
    if !(MIN_SIDE..=MAX_SIDE).contains(&side) {
        return Err(HarnessError::invalid_config(format!(
            "side {side} outside {MIN_SIDE}..={MAX_SIDE}"
        )));
    }
    Ok(())
}

impl SearchNode for SlidingTile {
    fn is_goal(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == 0
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(cell, &tile)| usize::from(tile) == cell + 1)
    }

    fn generate_children(&self) -> Vec<Self> {
        Move::ALL.iter().filter_map(|&mv| self.slide(mv)).collect()
    }

    fn states_equal(&self, other: &Self) -> bool {
        self.side == other.side && self.tiles == other.tiles
    }

    fn heuristic(&self) -> u64 {
        self.manhattan_distance()
    }
}

impl ReportState for SlidingTile {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "sliding_tile"
    }

    fn state_json(&self) -> serde_json::Value {
        serde_json::json!({
            "side": self.side,
            "tiles": self.tiles,
        })
    }
}
