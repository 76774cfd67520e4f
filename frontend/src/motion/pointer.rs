// Pointer-driven decorative offsets.

const MAGNETIC_RADIUS_PX: f64 = 100.0;
const MAGNETIC_PULL: f64 = 0.3;
const TILT_MAX_DEG: f64 = 15.0;
const DRIFT_DIVISOR: f64 = 50.0;

/// Translation pulling a button toward the cursor; `dx`/`dy` are the cursor
/// position relative to the button centre.
pub fn magnetic_offset(dx: f64, dy: f64) -> (f64, f64) {
    let distance = (dx * dx + dy * dy).sqrt();
    let strength = (1.0 - distance / MAGNETIC_RADIUS_PX).max(0.0);
    (dx * strength * MAGNETIC_PULL, dy * strength * MAGNETIC_PULL)
}

/// `(rotate_x_deg, rotate_y_deg)` for a card from the cursor position
/// normalised to the card half-extents.
pub fn card_tilt(nx: f64, ny: f64) -> (f64, f64) {
    let map = |v: f64| (v.clamp(-0.5, 0.5) / 0.5) * TILT_MAX_DEG;
    (-map(ny), map(nx))
}

/// Cursor position relative to a rect's centre, scaled by its half-extents.
pub fn normalise_in_rect(client: (f64, f64), rect: (f64, f64, f64, f64)) -> (f64, f64) {
    let (left, top, width, height) = rect;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let cx = left + width / 2.0;
    let cy = top + height / 2.0;
    ((client.0 - cx) / (width / 2.0), (client.1 - cy) / (height / 2.0))
}

/// Hero drift from the cursor's distance to the viewport centre.
pub fn pointer_drift(client: (f64, f64), viewport: (f64, f64)) -> (f64, f64) {
    (
        (client.0 - viewport.0 / 2.0) / DRIFT_DIVISOR,
        (client.1 - viewport.1 / 2.0) / DRIFT_DIVISOR,
    )
}

pub fn element_rect(element: &web_sys::Element) -> (f64, f64, f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.left(), rect.top(), rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn magnetic_pull_fades_with_distance() {
        assert_eq!(magnetic_offset(0.0, 0.0), (0.0, 0.0));
        let (x, y) = magnetic_offset(50.0, 0.0);
        assert!(close(x, 7.5));
        assert!(close(y, 0.0));
        assert_eq!(magnetic_offset(100.0, 0.0), (0.0, 0.0));
        assert_eq!(magnetic_offset(300.0, -200.0), (0.0, -0.0));
    }

    #[test]
    fn tilt_is_clamped() {
        assert_eq!(card_tilt(0.0, 0.0), (-0.0, 0.0));
        assert_eq!(card_tilt(0.5, 0.5), (-15.0, 15.0));
        assert_eq!(card_tilt(1.0, -1.0), (15.0, 15.0));
        assert_eq!(card_tilt(-0.25, 0.0), (-0.0, -7.5));
    }

    #[test]
    fn normalise_relative_to_centre() {
        let rect = (100.0, 100.0, 200.0, 100.0);
        assert_eq!(normalise_in_rect((200.0, 150.0), rect), (0.0, 0.0));
        assert_eq!(normalise_in_rect((300.0, 100.0), rect), (1.0, -1.0));
        assert_eq!(normalise_in_rect((0.0, 0.0), (0.0, 0.0, 0.0, 10.0)), (0.0, 0.0));
    }

    #[test]
    fn drift_from_viewport_centre() {
        assert_eq!(pointer_drift((500.0, 400.0), (1000.0, 800.0)), (0.0, 0.0));
        assert_eq!(pointer_drift((1000.0, 0.0), (1000.0, 800.0)), (10.0, -8.0));
    }
}
