pub mod generate_fractal;
pub mod generate_indexed_frame;
pub mod generate_zoom_sequence;
pub mod normalize_palette;
pub mod render_animation;
