//! Playfield frame layout
//!
//! The frame is a ring of wall cells on the four edges of the playfield
//! rectangle. It depends only on the playfield size, so every reset rebuilds
//! the exact same set.

use glam::IVec2;

/// Wall positions for a `width` x `height` playfield with `cell_size` cells.
///
/// Emits the bottom row (`y = 0`), top row (`y = height`), left column
/// (`x = 0`) and right column (`x = width`), each stepping from 0 up to but
/// excluding the far bound.
pub fn frame_points(width: i32, height: i32, cell_size: i32) -> Vec<IVec2> {
    if cell_size <= 0 {
        return Vec::new();
    }

    let mut points = Vec::new();
    horizontal_row(&mut points, 0, width, cell_size);
    horizontal_row(&mut points, height, width, cell_size);
    vertical_column(&mut points, 0, height, cell_size);
    vertical_column(&mut points, width, height, cell_size);
    points
}

fn horizontal_row(points: &mut Vec<IVec2>, y: i32, max_x: i32, step: i32) {
    points.extend(
        (0..max_x.max(0))
            .step_by(step as usize)
            .map(|x| IVec2::new(x, y)),
    );
}

fn vertical_column(points: &mut Vec<IVec2>, x: i32, max_y: i32, step: i32) {
    points.extend(
        (0..max_y.max(0))
            .step_by(step as usize)
            .map(|y| IVec2::new(x, y)),
    );
}
