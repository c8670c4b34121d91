pub mod animation;
pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod escape_sample;
pub mod frame_field;
pub mod indexed_frame;
pub mod indexed_palette;
pub mod palette_curve;
pub mod pixel_rect;
pub mod point;
