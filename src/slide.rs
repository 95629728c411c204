use raylib::prelude::*;

use crate::navigation::SlideSurface;

pub struct Slide {
    texture: Texture2D,
    visible: bool,
}

impl Slide {
    pub fn new(texture: Texture2D) -> Self {
        // Nothing is visible until the presentation is started.
        Self {
            texture,
            visible: false,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }

        let screen_width = d.get_screen_width() as f32;
        let screen_height = d.get_screen_height() as f32;

        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        // Fit to the current window, centered, aspect ratio preserved
        let scale = (screen_width / tex_width).min(screen_height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (screen_width - scaled_width) * 0.5,
                (screen_height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl SlideSurface for Slide {
    fn activate(&mut self) {
        self.visible = true;
    }

    fn deactivate(&mut self) {
        self.visible = false;
    }
}
