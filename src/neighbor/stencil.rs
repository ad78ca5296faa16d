//! Half shell of neighboring cells reaching two cells along each axis.
//!
//! Together with their negations the offsets cover the 5x5x5 block around a
//! cell except the centre and the eight corners, and no offset appears with
//! its negation, so scanning a cell against the cells it reaches visits every
//! cell pair of a wide enough grid exactly once.

#[rustfmt::skip]
pub const STENCIL: [[i32; 3]; 58] = [
    [0, 0, -1], [0, -1, 0], [-1, 0, 0], [0, -1, -1], [-1, 0, -1],
    [0, 1, -1], [1, 0, -1], [1, -1, 0], [-1, -1, 0], [-1, -1, -1],
    [-1, 1, -1], [1, 1, -1], [1, -1, -1], [0, 0, -2], [0, -2, 0],
    [-2, 0, 0], [1, 0, -2], [2, -1, 0], [0, 2, -1], [0, -1, -2],
    [-1, 0, -2], [0, 1, -2], [0, -2, -1], [-2, 0, -1], [2, 0, -1],
    [-1, -2, 0], [1, -2, 0], [-2, -1, 0], [-1, -1, -2], [-1, 1, -2],
    [1, 1, -2], [-1, -2, -1], [1, -2, -1], [-2, -1, -1], [2, -1, -1],
    [1, -1, -2], [-2, 1, -1], [2, 1, -1], [1, 2, -1], [-1, 2, -1],
    [0, -2, -2], [-2, 0, -2], [-2, -2, 0], [2, -2, 0], [0, 2, -2],
    [-1, -2, -2], [1, -2, -2], [-2, -1, -2], [2, -1, -2], [2, 0, -2],
    [-2, 1, -2], [2, 1, -2], [-1, 2, -2], [1, 2, -2], [-2, -2, -1],
    [2, -2, -1], [-2, 2, -1], [2, 2, -1],
];

/// Number of cells an offset may reach along one axis
pub const REACH: i32 = 2;
