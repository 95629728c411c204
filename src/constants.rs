pub const WINDOW_WIDTH: i32 = 1280;           // Initial window size
pub const WINDOW_HEIGHT: i32 = 720;
pub const FPS: u32 = 60;                      // Frames per second

pub const EDGE_ZONE_FRACTION: f32 = 0.2;      // Width share of each click zone
pub const COUNTER_FONT_SIZE: i32 = 20;        // Slide counter overlay
