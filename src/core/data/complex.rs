use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul, Neg};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag.is_sign_negative() {
            write!(f, "{}-{}i", self.real, -self.imag)
        } else {
            write!(f, "{}+{}i", self.real, self.imag)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseComplexError {
    Empty,
    InvalidNumber { input: String },
}

impl fmt::Display for ParseComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse complex number from empty string"),
            Self::InvalidNumber { input } => {
                write!(f, "invalid complex number '{}', expected a form like 0.27+0.005i", input)
            }
        }
    }
}

impl Error for ParseComplexError {}

/// Parses one signed component, where a lone sign (or nothing) before an
/// imaginary unit means a coefficient of one.
fn parse_component(text: &str, imaginary: bool, input: &str) -> Result<f64, ParseComplexError> {
    let invalid = || ParseComplexError::InvalidNumber {
        input: input.to_string(),
    };

    match (imaginary, text) {
        (true, "" | "+") => Ok(1.0),
        (true, "-") => Ok(-1.0),
        _ => text.parse::<f64>().map_err(|_| invalid()),
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;

    /// Accepts `a+bi`, `a-bi`, `a`, `bi` and `i`, with optional exponents
    /// (`1e-3+2E+1i`). Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        if compact.is_empty() {
            return Err(ParseComplexError::Empty);
        }

        let Some(body) = compact.strip_suffix('i') else {
            let real = parse_component(&compact, false, s)?;
            return Ok(Self { real, imag: 0.0 });
        };

        // The split between real and imaginary parts is the last sign that is
        // neither leading nor part of an exponent.
        let bytes = body.as_bytes();
        let split = (1..bytes.len())
            .rev()
            .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));

        match split {
            Some(i) => Ok(Self {
                real: parse_component(&body[..i], false, s)?,
                imag: parse_component(&body[i..], true, s)?,
            }),
            None => Ok(Self {
                real: 0.0,
                imag: parse_component(body, true, s)?,
            }),
        }
    }
}
