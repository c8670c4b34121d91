pub mod normalize_palette;
