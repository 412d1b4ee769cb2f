//! Vertical trigger band within the viewport.

/// Band of the viewport in which a heading counts as visible.
///
/// `top` and `bottom` are fractions of the viewport height trimmed off each
/// edge. The default trims 20% from the top and 35% from the bottom, so a
/// heading activates in the upper-middle of the screen before it reaches the
/// top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerBand {
    /// Fraction trimmed from the top edge.
    pub top: f64,
    /// Fraction trimmed from the bottom edge.
    pub bottom: f64,
}

/// Error for margins that leave no band.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("invalid trigger band (top {top}, bottom {bottom}): margins must be in 0..1 and leave a non-empty band")]
pub struct InvalidBand {
    /// Requested top margin.
    pub top: f64,
    /// Requested bottom margin.
    pub bottom: f64,
}

impl Default for TriggerBand {
    fn default() -> Self {
        Self {
            top: 0.2,
            bottom: 0.35,
        }
    }
}

impl TriggerBand {
    /// Create a band from edge margins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBand` if a margin is negative or not finite, or the
    /// margins together cover the whole viewport.
    pub fn new(top: f64, bottom: f64) -> Result<Self, InvalidBand> {
        let valid = top.is_finite()
            && bottom.is_finite()
            && top >= 0.0
            && bottom >= 0.0
            && top + bottom < 1.0;
        if !valid {
            return Err(InvalidBand { top, bottom });
        }
        Ok(Self { top, bottom })
    }

    /// Band edges in pixels from the viewport top.
    #[must_use]
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        (
            viewport_height * self.top,
            viewport_height * (1.0 - self.bottom),
        )
    }

    /// Whether an element spanning `element_top..element_bottom` (pixels from
    /// the viewport top) overlaps the band.
    #[must_use]
    pub fn intersects(&self, viewport_height: f64, element_top: f64, element_bottom: f64) -> bool {
        let (start, end) = self.bounds(viewport_height);
        element_top < end && element_bottom > start
    }

    /// Margins in CSS `rootMargin` syntax, for hosts built on intersection
    /// observers.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.top),
            percent(self.bottom)
        )
    }
}

fn percent(fraction: f64) -> String {
    let value = (fraction * 1000.0).round() / 10.0;
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_is_upper_middle() {
        let band = TriggerBand::default();

        assert_eq!(band.bounds(1000.0), (200.0, 650.0));
        assert_eq!(band.root_margin(), "-20% 0px -35% 0px");
    }

    #[test]
    fn test_intersects() {
        let band = TriggerBand::default();

        // Inside the band.
        assert!(band.intersects(1000.0, 300.0, 340.0));
        // Straddling the top edge.
        assert!(band.intersects(1000.0, 180.0, 220.0));
        // Above the band, not yet scrolled out of the viewport.
        assert!(!band.intersects(1000.0, 100.0, 150.0));
        // Below the band.
        assert!(!band.intersects(1000.0, 700.0, 740.0));
        // Touching an edge is not overlap.
        assert!(!band.intersects(1000.0, 650.0, 700.0));
    }

    #[test]
    fn test_new_rejects_empty_band() {
        assert!(TriggerBand::new(0.5, 0.5).is_err());
        assert!(TriggerBand::new(-0.1, 0.2).is_err());
        assert!(TriggerBand::new(f64::NAN, 0.2).is_err());
        assert_eq!(
            TriggerBand::new(0.1, 0.25),
            Ok(TriggerBand {
                top: 0.1,
                bottom: 0.25
            })
        );
    }

    #[test]
    fn test_root_margin_fractional_percent() {
        let band = TriggerBand::new(0.125, 0.0).unwrap();

        assert_eq!(band.root_margin(), "-12.5% 0px -0% 0px");
    }
}
