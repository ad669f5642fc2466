/// Code 0..26 for a letter `A`..`Z`
pub type Label = u8;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Points for `A`..`Z`
pub const POINTS: [u32; ALPHABET_LEN] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Highest value in [`POINTS`]
pub const MAX_POINTS: u32 = 10;

/// code for EMPTY (permanently blank cell)
pub(super) const EMPTY: Label = 26;

/// code for UNASSIGNED (undecided cell)
pub(super) const UNASSIGNED: Label = 27;
