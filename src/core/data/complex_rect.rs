use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("complex rect bounds must be finite")]
    NonFinite,
}

/// The viewport on the complex plane, from `start` (smallest real and
/// imaginary parts) to `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    start: Complex,
    end: Complex,
}

impl ComplexRect {
    pub fn new(start: Complex, end: Complex) -> Result<Self, ComplexRectError> {
        let bounds = [start.real, start.imag, end.real, end.imag];
        if bounds.iter().any(|value| !value.is_finite()) {
            return Err(ComplexRectError::NonFinite);
        }

        let width = end.real - start.real;
        let height = end.imag - start.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { start, end })
    }

    /// Builds a viewport without validation. Degenerate bounds produce
    /// undefined pixels downstream rather than a fault.
    #[must_use]
    pub fn new_unchecked(start: Complex, end: Complex) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn start(&self) -> Complex {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Complex {
        self.end
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.end.real - self.start.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.end.imag - self.start.imag
    }

    /// Bit patterns of `(start.real, end.real, start.imag, end.imag)`, used
    /// wherever the viewport has to act as an exact hash key.
    #[must_use]
    pub fn to_bits(&self) -> [u64; 4] {
        [
            self.start.real.to_bits(),
            self.end.real.to_bits(),
            self.start.imag.to_bits(),
            self.end.imag.to_bits(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let start = Complex::new(-2.0, -1.0);
        let end = Complex::new(1.0, 1.0);

        let rect = ComplexRect::new(start, end).unwrap();

        assert_eq!(rect.start(), start);
        assert_eq!(rect.end(), end);
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(0.0, 100.0));
        let negative_height = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(100.0, -10.0));
        let inverted = ComplexRect::new(Complex::new(2.0, 2.0), Complex::new(-2.0, -2.0));

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize { width: 0.0, height: 100.0 })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize { width: 100.0, height: -10.0 })
        );
        assert_eq!(
            inverted,
            Err(ComplexRectError::InvalidSize { width: -4.0, height: -4.0 })
        );
    }

    #[test]
    fn test_complex_rect_rejects_non_finite_bounds() {
        let nan = ComplexRect::new(Complex::new(f64::NAN, 0.0), Complex::new(1.0, 1.0));
        let inf = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(f64::INFINITY, 1.0));

        assert_eq!(nan, Err(ComplexRectError::NonFinite));
        assert_eq!(inf, Err(ComplexRectError::NonFinite));
    }

    #[test]
    fn test_to_bits_distinguishes_signed_zero() {
        let positive = ComplexRect::new(Complex::new(0.0, 0.0), Complex::new(1.0, 1.0)).unwrap();
        let negative = ComplexRect::new(Complex::new(-0.0, 0.0), Complex::new(1.0, 1.0)).unwrap();

        assert_ne!(positive.to_bits(), negative.to_bits());
    }
}
