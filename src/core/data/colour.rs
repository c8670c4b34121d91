#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// Hue, saturation, value and alpha, each in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsva {
    pub h: f64,
    pub s: f64,
    pub v: f64,
    pub a: f64,
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Hsva {
    /// Converts to an RGB colour premultiplied by alpha. Hue wraps, so a hue
    /// of 1.0 is the same red as 0.0.
    #[must_use]
    pub fn to_colour(self) -> Colour {
        if self.v <= 0.0 {
            return Colour::BLACK;
        }

        let (red, green, blue) = if self.s <= 0.0 {
            (self.v, self.v, self.v)
        } else {
            let h = self.h.rem_euclid(1.0) * 6.0;
            let sector = h.floor();
            let f = h - sector;

            let x = self.v * (1.0 - self.s);
            let y = self.v * (1.0 - self.s * f);
            let z = self.v * (1.0 - self.s * (1.0 - f));

            match sector as u8 {
                0 => (self.v, z, x),
                1 => (y, self.v, x),
                2 => (x, self.v, z),
                3 => (x, y, self.v),
                4 => (z, x, self.v),
                _ => (self.v, x, y),
            }
        };

        Colour {
            r: to_channel(red * self.a),
            g: to_channel(green * self.a),
            b: to_channel(blue * self.a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(h: f64, v: f64) -> Hsva {
        Hsva {
            h,
            s: 1.0,
            v,
            a: 1.0,
        }
    }

    #[test]
    fn test_zero_value_is_black() {
        assert_eq!(hsv(0.4, 0.0).to_colour(), Colour::BLACK);
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv(0.0, 1.0).to_colour(), Colour { r: 255, g: 0, b: 0 });
        assert_eq!(
            hsv(1.0 / 3.0, 1.0).to_colour(),
            Colour { r: 0, g: 255, b: 0 }
        );
        assert_eq!(
            hsv(2.0 / 3.0, 1.0).to_colour(),
            Colour { r: 0, g: 0, b: 255 }
        );
    }

    #[test]
    fn test_hue_wraps_at_one() {
        assert_eq!(hsv(1.0, 1.0).to_colour(), hsv(0.0, 1.0).to_colour());
    }

    #[test]
    fn test_secondary_hue() {
        // Halfway between red and green.
        assert_eq!(
            hsv(1.0 / 6.0, 1.0).to_colour(),
            Colour {
                r: 255,
                g: 255,
                b: 0
            }
        );
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        let grey = Hsva {
            h: 0.7,
            s: 0.0,
            v: 0.5,
            a: 1.0,
        }
        .to_colour();

        assert_eq!(grey.r, grey.g);
        assert_eq!(grey.g, grey.b);
        assert_eq!(grey.r, 128);
    }
}
