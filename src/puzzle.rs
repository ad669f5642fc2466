use crate::board::{CELLS, N};
use crate::grid::{BonusCell, BonusKind, Grid};
use crate::rack::Rack;
use crate::tilebag::TileBag;
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::SeedableRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A random rack with one bonus of each kind on the board.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Puzzle {
    seed: u64,
    rack: Rack,
    bonuses: Vec<BonusCell>,
    grid: Grid,
}

impl Puzzle {
    /// Draw `rack_size` tiles from an English bag and put the four bonus kinds on
    /// four different cells. The same seed gives the same puzzle.
    /// ## Examples
    /// ```
    /// use wordgrid_solver::Puzzle;
    /// let puzzle = Puzzle::generate(42, 7);
    /// assert_eq!(puzzle.rack().len(), 7);
    /// assert_eq!(puzzle, Puzzle::generate(42, 7));
    /// ```
    pub fn generate(seed: u64, rack_size: usize) -> Puzzle {
        let mut rng = StdRng::seed_from_u64(seed);
        let rack = Rack::from_letters(TileBag::english().draw(rack_size, &mut rng));
        let mut cells = (0..CELLS).choose_multiple(&mut rng, BonusKind::ALL.len());
        cells.shuffle(&mut rng);
        let bonuses: Vec<BonusCell> = BonusKind::ALL
            .iter()
            .zip(cells)
            .map(|(&kind, i)| BonusCell {
                kind,
                row: i / N,
                col: i % N,
            })
            .collect();
        let grid = Grid::from_bonuses(&bonuses);
        log::debug!("puzzle {}: rack {}", seed, rack);
        Puzzle {
            seed,
            rack,
            bonuses,
            grid,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn bonuses(&self) -> &[BonusCell] {
        &self.bonuses
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "seed {}, rack {}", self.seed, self.rack)?;
        for bonus in &self.bonuses {
            writeln!(f, "{} at ({}, {})", bonus.kind, bonus.row, bonus.col)?;
        }
        write!(f, "{}", self.grid)
    }
}
