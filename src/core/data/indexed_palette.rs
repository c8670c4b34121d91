use crate::core::data::colour::Colour;

pub const PALETTE_SIZE: usize = 256;

/// A fixed 256-colour table shared by every frame of an animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedPalette {
    colours: [Colour; PALETTE_SIZE],
}

impl IndexedPalette {
    /// The Plan 9 colour map: 4 levels each of red, green and blue, each
    /// expanded into 4 intensity steps, plus a 16 step grey ramp folded into
    /// the `r == g == b == 0` slots.
    #[must_use]
    pub fn plan9() -> Self {
        let mut colours = [Colour::BLACK; PALETTE_SIZE];

        for r in 0..4i32 {
            for v in 0..4i32 {
                let base = (r * 64 + v * 16) as usize;
                let mut j = v - r;

                for g in 0..4i32 {
                    for b in 0..4i32 {
                        let den = r.max(g).max(b);
                        let colour = if den == 0 {
                            let grey = (0x11 * v) as u8;
                            Colour {
                                r: grey,
                                g: grey,
                                b: grey,
                            }
                        } else {
                            let num = 0x11 * (den * 4 + v);
                            Colour {
                                r: (r * num / den) as u8,
                                g: (g * num / den) as u8,
                                b: (b * num / den) as u8,
                            }
                        };

                        colours[base + (j & 0x0f) as usize] = colour;
                        j += 1;
                    }
                }
            }
        }

        Self { colours }
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour; PALETTE_SIZE] {
        &self.colours
    }

    #[must_use]
    pub fn colour(&self, index: u8) -> Colour {
        self.colours[index as usize]
    }

    /// Index of the entry closest to `colour` in squared RGB distance. Ties go
    /// to the lowest index.
    #[must_use]
    pub fn nearest_index(&self, colour: Colour) -> u8 {
        let distance = |candidate: &Colour| {
            let dr = i32::from(candidate.r) - i32::from(colour.r);
            let dg = i32::from(candidate.g) - i32::from(colour.g);
            let db = i32::from(candidate.b) - i32::from(colour.b);
            dr * dr + dg * dg + db * db
        };

        let mut best = 0;
        let mut best_distance = i32::MAX;

        for (i, candidate) in self.colours.iter().enumerate() {
            let d = distance(candidate);
            if d < best_distance {
                best = i;
                best_distance = d;
                if d == 0 {
                    break;
                }
            }
        }

        best as u8
    }
}

impl Default for IndexedPalette {
    fn default() -> Self {
        Self::plan9()
    }
}
