//! An optimistic estimate of the best score that can still be reached from a
//! partially filled board.
//!
//! A letter on cell `i` can score at most `points × letter_mult[i]` once in a
//! horizontal word and once in a vertical word. Such a word lies inside the
//! maximal run of non-empty cells through `i`, so its word multiplier is at most
//! the product of the word multipliers over that run. Runs shorter than 2 cells
//! can not hold a word. This gives each cell a coefficient, and the bound is
//!
//! * the placed letters times their coefficients, plus
//! * the rack letters paired with the open cells, highest points with the
//!   highest coefficients.
//!
//! The pairing ignores whether the letters form words at all, so it never
//! underestimates.
use crate::board::{Board, CELLS};
use crate::grid::Grid;
use crate::rack::Rack;
use crate::tiles::MAX_POINTS;

/// Reusable buffer for [`upper_bound`], one per search.
#[derive(Debug, Clone)]
pub struct BoundScratch {
    /// number of open cells per coefficient
    coefficients: Vec<u16>,
}

impl BoundScratch {
    pub fn new(grid: &Grid) -> BoundScratch {
        BoundScratch {
            coefficients: vec![0; grid.max_coefficient() as usize + 1],
        }
    }
}

/// Calculate an upper bound for the total score of any completion of `board`
/// with letters from `rack`.
/// `scratch` must be created for the same `grid`.
pub fn upper_bound(board: &Board, rack: &Rack, grid: &Grid, scratch: &mut BoundScratch) -> u32 {
    let mut row_best = [0u32; CELLS];
    let mut col_best = [0u32; CELLS];
    for run in board.runs_where(|cell| !cell.is_empty()) {
        let product: u32 = run.cells().map(|i| grid.word_mult(i)).product();
        let best = if run.horizontal {
            &mut row_best
        } else {
            &mut col_best
        };
        for i in run.cells() {
            best[i] = product;
        }
    }

    let open = &mut scratch.coefficients;
    for n in open.iter_mut() {
        *n = 0;
    }
    let mut fixed = 0;
    let mut max_coefficient = 0;
    for (i, cell) in board.iter().enumerate() {
        let coefficient = grid.letter_mult(i) * (row_best[i] + col_best[i]);
        if let Some(letter) = cell.letter() {
            fixed += letter.points() * coefficient;
        } else if cell.is_unassigned() && coefficient > 0 {
            open[coefficient as usize] += 1;
            max_coefficient = max_coefficient.max(coefficient as usize);
        }
    }

    let mut by_points = [0u32; MAX_POINTS as usize + 1];
    for letter in rack.distinct() {
        by_points[letter.points() as usize] += rack.count(letter);
    }

    let mut optimistic = 0;
    let mut points = MAX_POINTS as usize;
    'cells: for coefficient in (1..=max_coefficient).rev() {
        let mut cells = open[coefficient] as u32;
        while cells > 0 {
            while by_points[points] == 0 {
                if points == 0 {
                    break 'cells;
                }
                points -= 1;
            }
            let n = cells.min(by_points[points]);
            optimistic += n * coefficient as u32 * points as u32;
            cells -= n;
            by_points[points] -= n;
        }
    }
    fixed + optimistic
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BonusKind::{DoubleLetter, DoubleWord, TripleWord};
    use crate::score::evaluate;
    use crate::wordlist::Wordlist;
    use crate::Error;

    fn bound(board: &Board, rack: &str, grid: &Grid) -> u32 {
        let rack: Rack = rack.parse().unwrap();
        upper_bound(board, &rack, grid, &mut BoundScratch::new(grid))
    }

    #[test]
    fn test_open_board() {
        // every cell is in a row and a column of 5: coefficient 2
        let grid = Grid::new();
        assert_eq!(bound(&Board::default(), "ab", &grid), 2 * 3 + 2 * 1);
        assert_eq!(bound(&Board::default(), "", &grid), 0);
    }

    #[test]
    fn test_word_bonus_pairs_with_best_letter() {
        // cell 0: 1 x (2 + 2), rest of row 0 and column 0: 2 + 1
        let grid = Grid::new().with_bonus(DoubleWord, 0, 0);
        assert_eq!(bound(&Board::default(), "ab", &grid), 3 * 4 + 1 * 3);
        assert_eq!(bound(&Board::default(), "b", &grid), 3 * 4);
    }

    #[test]
    fn test_letter_bonus() {
        let grid = Grid::new().with_bonus(DoubleLetter, 2, 2);
        // Q on the double letter cell: 10 x 2 x (1 + 1)
        assert_eq!(bound(&Board::default(), "qe", &grid), 40 + 2);
    }

    #[test]
    fn test_isolated_cells_do_not_count() -> Result<(), Error> {
        // the open cell at 0 has only empty neighbours in its row and column
        let board = Board::from_strings(&["?....", ".....", ".....", ".....", "....."])?;
        assert_eq!(bound(&board, "zzz", &Grid::new()), 0);
        // two open cells next to each other form a run
        let board = Board::from_strings(&["??...", ".....", ".....", ".....", "....."])?;
        assert_eq!(bound(&board, "za", &Grid::new()), 10 + 1);
        Ok(())
    }

    #[test]
    fn test_complete_board_is_exact() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(&["cat", "as", "cats"]);
        let grid = Grid::new()
            .with_bonus(TripleWord, 1, 1)
            .with_bonus(DoubleLetter, 0, 1);
        let board = Board::from_strings(&["cat..", ".s...", ".....", ".....", "....."])?;
        let evaluation = evaluate(&board, &grid, &wordlist).unwrap();
        assert_eq!(bound(&board, "", &grid), evaluation.total);
        Ok(())
    }

    #[test]
    fn test_partial_board_bounds_completion() -> Result<(), Error> {
        let wordlist = Wordlist::from_words(&["cat", "cats"]);
        let grid = Grid::new().with_bonus(DoubleWord, 0, 3);
        let partial = Board::from_strings(&["cat??", "?????", "?????", "?????", "?????"])?;
        let complete = Board::from_strings(&["cats.", ".....", ".....", ".....", "....."])?;
        let evaluation = evaluate(&complete, &grid, &wordlist).unwrap();
        assert!(bound(&partial, "s", &grid) >= evaluation.total);
        Ok(())
    }
}
