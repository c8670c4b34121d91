pub mod histogram_hue;
