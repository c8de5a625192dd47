/// Unit quad centered on the origin, wound top-left, top-right, bottom-right, bottom-left.
#[rustfmt::skip]
pub const QUAD_VERTICES: [f32; 12] = [
    -0.5,  0.5, 0.0,
     0.5,  0.5, 0.0,
     0.5, -0.5, 0.0,
    -0.5, -0.5, 0.0,
];

#[rustfmt::skip]
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 2,
    0, 2, 3,
];

pub mod geometry;
pub mod program;
pub mod renderer;
