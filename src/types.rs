//! Core data types for the box swapping demo.
//!
//! This module defines the boxes drawn on screen and the scene that owns them,
//! together with the stacked layout used to reset and re-sort the boxes.

use crate::config::{ConfigError, DemoConfig};

/// An RGB color triple.
pub type Rgb = [u8; 3];

/// A labeled rectangle on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Single character drawn centered in the box
    pub label: char,
    /// Fill color
    pub color: Rgb,
    /// Top-left corner in canvas coordinates
    pub position: (i32, i32),
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Shape {
    /// Creates a new shape at the given top-left position.
    pub fn new(label: char, color: Rgb, position: (i32, i32), width: i32, height: i32) -> Self {
        Self {
            label,
            color,
            position,
            width,
            height,
        }
    }

    /// Returns true if the point lies inside the shape. All four edges count as inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (left, top) = self.position;
        left <= x && x <= left + self.width && top <= y && y <= top + self.height
    }
}

/// Direction for [`Scene::sort_by_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// A before B
    Ascending,
    /// B before A
    Descending,
}

/// Slots of the vertical box stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLayout {
    /// Left edge of every slot
    pub stack_x: i32,
    /// Top edge of the first slot
    pub stack_y: i32,
    /// Width of a box
    pub box_width: i32,
    /// Height of a box
    pub box_height: i32,
    /// Vertical gap between slots
    pub gap: i32,
}

impl StackLayout {
    /// Builds a stack that is vertically centered in the configured window.
    pub fn centered(config: &DemoConfig) -> Self {
        let count = config.boxes.len() as i32;
        let pitch = config.box_height + config.box_gap;
        Self {
            stack_x: config.stack_x,
            stack_y: config.window_height / 2 - (count * pitch) / 2,
            box_width: config.box_width,
            box_height: config.box_height,
            gap: config.box_gap,
        }
    }

    /// Top-left corner of the slot at `index`.
    pub fn slot(&self, index: usize) -> (i32, i32) {
        (
            self.stack_x,
            self.stack_y + index as i32 * (self.box_height + self.gap),
        )
    }
}

/// Ordered collection of the boxes on screen.
///
/// The scene holds exactly the boxes created at startup; boxes are never added
/// or removed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Boxes in scan order
    pub shapes: Vec<Shape>,
    /// Layout used by reset and sort
    pub layout: StackLayout,
}

impl Scene {
    /// Builds the startup scene from a configuration, stacking boxes in config order.
    pub fn from_config(config: &DemoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = StackLayout::centered(config);
        let shapes = config
            .boxes
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Shape::new(
                    entry.label,
                    entry.color,
                    layout.slot(i),
                    config.box_width,
                    config.box_height,
                )
            })
            .collect();
        Ok(Self { shapes, layout })
    }

    /// Number of shapes in the scene.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the scene has no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Finds the first shape in scan order containing the point.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.contains(x, y))
    }

    /// Moves every shape back to the stack slot matching its index.
    pub fn reset_layout(&mut self) {
        let layout = self.layout;
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            shape.position = layout.slot(i);
        }
    }

    /// Stable-sorts the shapes by label and re-stacks them in the new order.
    pub fn sort_by_label(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self.shapes.sort_by(|a, b| a.label.cmp(&b.label)),
            SortOrder::Descending => self.shapes.sort_by(|a, b| b.label.cmp(&a.label)),
        }
        self.reset_layout();
    }

    /// Exchanges the labels of two distinct shapes. Returns false if nothing was swapped.
    pub fn swap_labels(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.shapes.len() || b >= self.shapes.len() {
            return false;
        }
        let label_a = self.shapes[a].label;
        self.shapes[a].label = self.shapes[b].label;
        self.shapes[b].label = label_a;
        true
    }

    /// Current labels in scan order.
    pub fn labels(&self) -> Vec<char> {
        self.shapes.iter().map(|shape| shape.label).collect()
    }
}
