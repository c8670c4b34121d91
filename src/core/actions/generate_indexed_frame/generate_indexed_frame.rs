use rayon::prelude::*;

use crate::core::actions::generate_indexed_frame::ports::colour_map::ColourMap;
use crate::core::data::frame_field::FrameField;
use crate::core::data::indexed_frame::IndexedFrame;
use crate::core::data::indexed_palette::IndexedPalette;

/// Colours every value of `field` with `mapper` and quantizes the result to
/// `palette`. Pixels are mapped in parallel; the output keeps the field's
/// row-major order.
pub fn generate_indexed_frame<CMap>(
    field: &FrameField,
    mapper: &CMap,
    palette: &IndexedPalette,
) -> IndexedFrame
where
    CMap: ColourMap<f64> + Sync,
{
    let indices: Vec<u8> = field
        .values()
        .par_iter()
        .map(|&value| palette.nearest_index(mapper.map(value)))
        .collect();

    IndexedFrame::from_data(field.pixel_rect(), indices)
        .expect("frame field holds exactly one value per pixel")
}
