use raylib::prelude::*;

use crate::input::{InputSource, Intent};

/// Swipe variant: content is dragged in the direction of travel, so a swipe
/// toward the left asks for the next slide.
pub struct SwipeGestures;

impl InputSource for SwipeGestures {
    fn poll(&mut self, rl: &RaylibHandle) -> Intent {
        intent_for_gesture(rl.get_gesture_detected())
    }
}

pub fn intent_for_gesture(gesture: Gesture) -> Intent {
    match gesture {
        Gesture::GESTURE_SWIPE_LEFT => Intent::Advance,
        Gesture::GESTURE_SWIPE_RIGHT => Intent::Retreat,
        _ => Intent::Ignore,
    }
}
