/// Viewport rectangle in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Letterbox a fixed-aspect render rectangle into a window
///
/// The rectangle fills the window along one axis and is centered along the
/// other; the remainder stays blank. `aspect` is width over height.
pub fn letterbox(aspect: f32, window_width: u32, window_height: u32) -> Viewport {
    let window_width = window_width as f32;
    let window_height = window_height as f32;

    let mut width = window_width;
    let mut height = window_width / aspect;
    let mut x = 0.0;
    let mut y = 0.0;

    if height > window_height {
        height = window_height;
        width = aspect * window_height;
        x = (window_width - width) / 2.0;
    } else {
        y = (window_height - height) / 2.0;
    }

    Viewport {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_aspect_fills_the_window() {
        let vp = letterbox(1.0, 800, 800);
        assert_eq!(
            vp,
            Viewport {
                x: 0.0,
                y: 0.0,
                width: 800.0,
                height: 800.0
            }
        );
    }

    #[test]
    fn wide_window_centers_horizontally() {
        // The reference scenario: square content in a 1000x500 window
        let vp = letterbox(1.0, 1000, 500);
        assert_eq!(
            vp,
            Viewport {
                x: 250.0,
                y: 0.0,
                width: 500.0,
                height: 500.0
            }
        );
    }

    #[test]
    fn tall_window_centers_vertically() {
        let vp = letterbox(1.0, 400, 1000);
        assert_eq!(
            vp,
            Viewport {
                x: 0.0,
                y: 300.0,
                width: 400.0,
                height: 400.0
            }
        );
    }

    #[test]
    fn non_square_aspect_letterboxes() {
        let vp = letterbox(2.0, 1000, 1000);
        assert_eq!(vp.width, 1000.0);
        assert_eq!(vp.height, 500.0);
        assert_eq!(vp.x, 0.0);
        assert_eq!(vp.y, 250.0);
    }
}
