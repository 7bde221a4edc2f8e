//! The 4x4 letter grid
//!
//! A `Grid` holds 16 letter tiles. A tile is one uppercase letter, except
//! that `Q` always plays as the digraph `QU` so boards never contain an
//! unplayable bare Q.

use std::fmt;

/// Side length of the board
pub const GRID_SIZE: usize = 4;

/// The eight king-move neighbor offsets
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Display tokens per letter. Q is the QU digraph.
const TOKENS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "QU", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

/// Error type for invalid grid input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidLetter(char),
    WrongCellCount(usize),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(c) => write!(f, "Tile must be an ASCII letter, got {c:?}"),
            Self::WrongCellCount(n) => {
                write!(f, "Grid needs exactly 16 cells, got {n}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A board position (row, col), both in [0, 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// King-move adjacency: differ by at most 1 per axis, not identical,
    /// no wraparound.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        row_diff <= 1 && col_diff <= 1 && (row_diff != 0 || col_diff != 0)
    }

    /// Whether this position already occurs in a path
    #[must_use]
    pub fn is_in_path(self, path: &[Self]) -> bool {
        path.contains(&self)
    }
}

/// One board tile: a single uppercase letter, displayed as `QU` for Q
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile(char);

impl Tile {
    /// Create a tile from a letter (any ASCII case)
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` for non-ASCII-alphabetic input.
    pub fn new(letter: char) -> Result<Self, GridError> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(letter.to_ascii_uppercase()))
        } else {
            Err(GridError::InvalidLetter(letter))
        }
    }

    /// The underlying uppercase letter
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }

    /// The display token: one character, or `"QU"` for Q
    #[inline]
    #[must_use]
    pub fn token(self) -> &'static str {
        TOKENS[(self.0 as u8 - b'A') as usize]
    }

    /// Lowercase characters the solver walks through the trie for this tile
    ///
    /// One character for most tiles, two for `QU`.
    pub fn chars_lower(self) -> impl Iterator<Item = char> {
        self.token().chars().map(|c| c.to_ascii_lowercase())
    }

    /// Vowel tiles are A, E, I, O, U. The QU tile does not count.
    #[inline]
    #[must_use]
    pub const fn is_vowel(self) -> bool {
        matches!(self.0, 'A' | 'E' | 'I' | 'O' | 'U')
    }
}

/// An immutable 4x4 board of letter tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: [[Tile; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    #[must_use]
    pub const fn new(tiles: [[Tile; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { tiles }
    }

    /// Build a grid from 16 letters in row-major order
    ///
    /// # Errors
    /// Returns `GridError` if the count is not 16 or a letter is invalid.
    pub fn from_letters(letters: &[char]) -> Result<Self, GridError> {
        if letters.len() != GRID_SIZE * GRID_SIZE {
            return Err(GridError::WrongCellCount(letters.len()));
        }

        let mut tiles = [[Tile('A'); GRID_SIZE]; GRID_SIZE];
        for (i, &letter) in letters.iter().enumerate() {
            tiles[i / GRID_SIZE][i % GRID_SIZE] = Tile::new(letter)?;
        }
        Ok(Self { tiles })
    }

    /// Tile at a position
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    #[inline]
    #[must_use]
    pub fn tile(&self, pos: Position) -> Tile {
        self.tiles[pos.row][pos.col]
    }

    /// All 16 positions in row-major order
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Count of vowel tiles on the board
    #[must_use]
    pub fn vowel_count(&self) -> usize {
        Self::positions()
            .filter(|&pos| self.tile(pos).is_vowel())
            .count()
    }

    /// Concatenate the lowercase tile letters along a path
    ///
    /// A `QU` tile contributes both characters.
    #[must_use]
    pub fn word_from_path(&self, path: &[Position]) -> String {
        path.iter()
            .flat_map(|&pos| self.tile(pos).chars_lower())
            .collect()
    }

    /// Display tokens in row-major order, the boundary representation of
    /// the board handed to callers.
    #[must_use]
    pub fn tokens(&self) -> [[&'static str; GRID_SIZE]; GRID_SIZE] {
        let mut out = [[""; GRID_SIZE]; GRID_SIZE];
        for pos in Self::positions() {
            out[pos.row][pos.col] = self.tile(pos).token();
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, tile) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:<2}", tile.token())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::from_letters(&[
            'c', 'a', 't', 's', 'e', 'r', 'o', 'n', 'l', 'i', 'd', 'm', 'p', 'u', 'h', 'q',
        ])
        .unwrap()
    }

    #[test]
    fn adjacency_diagonal_and_orthogonal() {
        let center = Position::new(1, 1);
        for (dr, dc) in DIRECTIONS {
            let neighbor = Position::new(
                (1i8 + dr) as usize, // i8 cast safe: center is (1,1)
                (1i8 + dc) as usize,
            );
            assert!(center.is_adjacent(neighbor));
            assert!(neighbor.is_adjacent(center));
        }
    }

    #[test]
    fn adjacency_rejects_self_and_distant() {
        let pos = Position::new(2, 2);
        assert!(!pos.is_adjacent(pos));
        assert!(!pos.is_adjacent(Position::new(0, 2)));
        assert!(!pos.is_adjacent(Position::new(2, 0)));
    }

    #[test]
    fn adjacency_no_wraparound() {
        assert!(!Position::new(0, 0).is_adjacent(Position::new(0, 3)));
        assert!(!Position::new(0, 0).is_adjacent(Position::new(3, 0)));
        assert!(!Position::new(3, 3).is_adjacent(Position::new(0, 0)));
    }

    #[test]
    fn position_in_path() {
        let path = vec![Position::new(0, 0), Position::new(0, 1)];
        assert!(Position::new(0, 1).is_in_path(&path));
        assert!(!Position::new(1, 1).is_in_path(&path));
    }

    #[test]
    fn tile_q_is_digraph() {
        let q = Tile::new('q').unwrap();
        assert_eq!(q.token(), "QU");
        assert_eq!(q.chars_lower().collect::<String>(), "qu");
        assert!(!q.is_vowel());
    }

    #[test]
    fn tile_normalizes_case() {
        let tile = Tile::new('e').unwrap();
        assert_eq!(tile.letter(), 'E');
        assert_eq!(tile.token(), "E");
        assert!(tile.is_vowel());
    }

    #[test]
    fn tile_rejects_non_letters() {
        assert!(matches!(Tile::new('3'), Err(GridError::InvalidLetter('3'))));
        assert!(Tile::new(' ').is_err());
        assert!(Tile::new('é').is_err());
    }

    #[test]
    fn grid_from_letters_wrong_count() {
        assert!(matches!(
            Grid::from_letters(&['a', 'b', 'c']),
            Err(GridError::WrongCellCount(3))
        ));
    }

    #[test]
    fn grid_vowel_count() {
        let grid = sample_grid();
        // a, e, o, i, u are the vowel tiles; the final q plays as QU but
        // does not count as a vowel.
        assert_eq!(grid.vowel_count(), 5);
    }

    #[test]
    fn word_from_path_includes_qu() {
        let grid = sample_grid();
        // (3,3) is the Q tile
        let path = vec![Position::new(3, 3), Position::new(3, 2)];
        assert_eq!(grid.word_from_path(&path), "quh");
    }

    #[test]
    fn word_from_path_spells_cat() {
        let grid = sample_grid();
        let path = vec![
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
        ];
        assert_eq!(grid.word_from_path(&path), "cat");
    }

    #[test]
    fn tokens_match_display() {
        let grid = sample_grid();
        let tokens = grid.tokens();
        assert_eq!(tokens[0][0], "C");
        assert_eq!(tokens[3][3], "QU");
    }
}
