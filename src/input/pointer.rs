use raylib::prelude::*;

use crate::constants::EDGE_ZONE_FRACTION;
use crate::input::{InputSource, Intent};

/// Click-zone variant: a primary click in the left edge zone pages backward,
/// one in the right edge zone pages forward, the middle band does nothing.
/// Clicks landing on an interactive region never navigate.
pub struct PointerZones {
    edge_fraction: f32,
}

impl PointerZones {
    pub fn new() -> Self {
        Self {
            edge_fraction: EDGE_ZONE_FRACTION,
        }
    }

    pub fn classify(&self, x: f32, viewport_width: f32, over_interactive: bool) -> Intent {
        if over_interactive {
            return Intent::Ignore;
        }
        if x < viewport_width * self.edge_fraction {
            Intent::Retreat
        } else if x > viewport_width * (1.0 - self.edge_fraction) {
            Intent::Advance
        } else {
            Intent::Ignore
        }
    }
}

impl Default for PointerZones {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for PointerZones {
    fn poll(&mut self, rl: &RaylibHandle) -> Intent {
        if !rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            return Intent::Ignore;
        }
        // An image deck has no hyperlink regions, so no click is swallowed.
        self.classify(
            rl.get_mouse_x() as f32,
            rl.get_screen_width() as f32,
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 800.0;

    #[test]
    fn left_edge_retreats_and_right_edge_advances() {
        let zones = PointerZones::new();

        assert_eq!(zones.classify(0.1 * WIDTH, WIDTH, false), Intent::Retreat);
        assert_eq!(zones.classify(0.9 * WIDTH, WIDTH, false), Intent::Advance);
    }

    #[test]
    fn middle_band_is_ignored() {
        let zones = PointerZones::new();

        assert_eq!(zones.classify(0.5 * WIDTH, WIDTH, false), Intent::Ignore);
        assert_eq!(zones.classify(0.3 * WIDTH, WIDTH, false), Intent::Ignore);
    }

    #[test]
    fn clicks_on_interactive_regions_never_navigate() {
        let zones = PointerZones::new();

        for x in [0.1 * WIDTH, 0.5 * WIDTH, 0.9 * WIDTH] {
            assert_eq!(zones.classify(x, WIDTH, true), Intent::Ignore);
        }
    }
}
