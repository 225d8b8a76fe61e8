use log::warn;

use crate::core::data::viewport::Viewport;

pub const ZOOM_IN_FACTOR: f64 = 0.9;
pub const ZOOM_OUT_FACTOR: f64 = 1.1;

#[must_use]
pub fn zoom_factor(scroll_sign: f64) -> f64 {
    if scroll_sign > 0.0 {
        ZOOM_IN_FACTOR
    } else {
        ZOOM_OUT_FACTOR
    }
}

/// Scales the real span by the zoom factor for `scroll_sign`, then derives the
/// imaginary span as `real_span / aspect_ratio`. The centre is kept, so any
/// aspect drift is corrected on every zoom.
#[must_use]
pub fn apply_zoom(viewport: Viewport, scroll_sign: f64, aspect_ratio: f64) -> Viewport {
    let real_span = viewport.real_span() * zoom_factor(scroll_sign);
    let imag_span = real_span / aspect_ratio;

    Viewport::from_center(viewport.center(), real_span, imag_span).unwrap_or_else(|err| {
        warn!("zoom left the representable range, keeping view: {err}");
        viewport
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    const ASPECT: f64 = 800.0 / 600.0;
    const EPSILON: f64 = 1e-12;

    fn default_viewport() -> Viewport {
        Viewport::new(-2.0, 2.0, -2.0, 2.0).unwrap()
    }

    #[test]
    fn test_scroll_sign_selects_factor() {
        assert_eq!(zoom_factor(1.0), ZOOM_IN_FACTOR);
        assert_eq!(zoom_factor(0.25), ZOOM_IN_FACTOR);
        assert_eq!(zoom_factor(0.0), ZOOM_OUT_FACTOR);
        assert_eq!(zoom_factor(-3.0), ZOOM_OUT_FACTOR);
    }

    #[test]
    fn test_zoom_in_scales_real_span_and_restores_aspect() {
        let zoomed = apply_zoom(default_viewport(), 1.0, ASPECT);

        assert!((zoomed.real_span() - 3.6).abs() < EPSILON);
        assert!((zoomed.imag_span() - 3.6 / ASPECT).abs() < EPSILON);
        assert!((zoomed.aspect_ratio() - ASPECT).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_scales_real_span() {
        let zoomed = apply_zoom(default_viewport(), -1.0, ASPECT);

        assert!((zoomed.real_span() - 4.4).abs() < EPSILON);
        assert!((zoomed.aspect_ratio() - ASPECT).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_preserves_center() {
        let viewport = Viewport::new(-0.9, -0.5, 0.1, 0.4).unwrap();
        let center = viewport.center();

        let zoomed = apply_zoom(apply_zoom(viewport, 1.0, ASPECT), -1.0, ASPECT);

        let Complex { real, imag } = zoomed.center();
        assert!((real - center.real).abs() < EPSILON);
        assert!((imag - center.imag).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_in_then_reciprocal_restores_real_span() {
        let viewport = default_viewport();

        let zoomed_in = apply_zoom(viewport, 1.0, ASPECT);
        let restored = zoomed_in.real_span() / ZOOM_IN_FACTOR;

        assert!((restored - viewport.real_span()).abs() < EPSILON);
    }

    #[test]
    fn test_aspect_ratio_holds_after_every_zoom() {
        let mut viewport = default_viewport();

        for sign in [1.0, 1.0, -1.0, 1.0, -1.0, -1.0, 1.0] {
            viewport = apply_zoom(viewport, sign, ASPECT);
            assert!((viewport.aspect_ratio() - ASPECT).abs() < 1e-9);
        }
    }

    #[test]
    fn test_repeated_zoom_in_never_collapses_viewport() {
        let mut viewport = default_viewport();

        for _ in 0..200 {
            viewport = apply_zoom(viewport, 1.0, ASPECT);
        }

        assert!(viewport.real_span() > 0.0);
        assert!(viewport.imag_span() > 0.0);
    }
}
