//! Rotation tables for the seven tetrominoes.
//!
//! Every rotation state is four `(x, y)` offsets inside a 4x4 box, with `y`
//! growing downward. Pieces rotate by stepping through their states in order;
//! there is no geometric rotation and no wall kick table.

use crate::components::TetrominoType;

pub type Offsets = [(i32, i32); 4];

const I_STATES: &[Offsets] = &[
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const O_STATES: &[Offsets] = &[[(1, 0), (2, 0), (1, 1), (2, 1)]];

const T_STATES: &[Offsets] = &[
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const L_STATES: &[Offsets] = &[
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const J_STATES: &[Offsets] = &[
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const S_STATES: &[Offsets] = &[
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const Z_STATES: &[Offsets] = &[
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

/// All rotation states of `kind`, in rotation order.
#[must_use]
pub fn rotation_states(kind: TetrominoType) -> &'static [Offsets] {
    match kind {
        TetrominoType::I => I_STATES,
        TetrominoType::O => O_STATES,
        TetrominoType::T => T_STATES,
        TetrominoType::L => L_STATES,
        TetrominoType::J => J_STATES,
        TetrominoType::S => S_STATES,
        TetrominoType::Z => Z_STATES,
    }
}

#[must_use]
pub fn state_count(kind: TetrominoType) -> usize {
    rotation_states(kind).len()
}

/// Offsets for rotation `index`, wrapping around the kind's state count.
#[must_use]
pub fn rotation_state(kind: TetrominoType, index: usize) -> Offsets {
    let states = rotation_states(kind);
    states[index % states.len()]
}
