use rand::Rng;

use crate::snake::Position;

/// Picks a random cell-aligned position on a `width` x `height` board.
///
/// The column and row counts exclude the far edge, so food never lands in
/// the last column or row. The snake body is not avoided.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, width: i32, height: i32, cell: i32) -> Position {
    let columns = (width - cell) / cell;
    let rows = (height - cell) / cell;
    Position {
        x: rng.gen_range(0..columns) * cell,
        y: rng.gen_range(0..rows) * cell,
    }
}
