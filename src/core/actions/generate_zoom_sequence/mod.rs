pub mod generate_zoom_sequence;
