//! Shared application-wide constants.
//! Default values for the demo configuration and a few fixed rendering tweaks.

// Window
/// Window width in pixels.
pub const WINDOW_WIDTH: i32 = 1000;
/// Window height in pixels.
pub const WINDOW_HEIGHT: i32 = 600;
/// Window title.
pub const WINDOW_TITLE: &str = "Box Swapping Animation";

// Boxes
/// Width of every box in pixels.
pub const BOX_WIDTH: i32 = 80;
/// Height of every box in pixels.
pub const BOX_HEIGHT: i32 = 100;
/// Vertical gap between stacked boxes in pixels.
pub const BOX_GAP: i32 = 20;
/// Left edge of the box stack.
pub const STACK_X: i32 = 50;
/// Labels of the startup boxes, top to bottom.
pub const BOX_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];
/// Colors of the startup boxes, top to bottom.
pub const BOX_COLORS: [[u8; 3]; 4] = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 0]];
/// Font size of the box labels.
pub const LABEL_FONT_SIZE: f32 = 18.0;

// Timing
/// Frames per second of the render loop and the swap animation.
pub const TICK_RATE_HZ: u32 = 60;
/// Wall-clock length of one swap animation.
pub const SWAP_DURATION_MS: u64 = 2000;
/// Divides the tick rate to get the ping-pong batch length; lower is slower.
pub const ANIMATION_SPEED: u32 = 2;

// Arm
/// X coordinate of the arm pivot.
pub const ARM_BASE_X: i32 = 850;
/// Y coordinate of the arm pivot.
pub const ARM_BASE_Y: i32 = 200;
/// Thickness of the arm column and segment.
pub const ARM_THICKNESS: i32 = 20;
/// Arm color.
pub const ARM_COLOR: [u8; 3] = [60, 60, 60];
/// Side length of the gripper square.
pub const GRIPPER_SIZE: i32 = 30;
/// Gripper color.
pub const GRIPPER_COLOR: [u8; 3] = [200, 200, 200];
/// Fraction of the remaining heading error the arm base closes per tick.
pub const ARM_SMOOTHING: f32 = 0.1;

// Interaction
/// Outline width of the shape waiting for a swap partner.
pub const PENDING_STROKE_WIDTH: f32 = 4.0;
/// Outline color of the shape waiting for a swap partner.
pub const PENDING_STROKE_COLOR: [u8; 3] = [255, 165, 0];
