use serde::{Deserialize, Serialize};

use crate::{Point, TextMetrics};

/// A draw command to be executed by a rendering backend
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Fill,
    },
    Text {
        text: String,
        /// Left end of the text baseline
        position: Point,
        style: TextStyle,
    },
}

/// Drawing surface that widgets render into.
///
/// Backends translate these calls into GPU work, a software raster, or (in the
/// case of [`Renderer`]) a list of recorded commands.
pub trait Canvas {
    /// Stroke a straight line.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f32, fill: &Fill);

    /// Draw a single line of text with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Measure the advance width of `text` in the given style.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        TextMetrics::new(style.size).line_width(text)
    }
}

/// Records draw commands instead of rasterizing them.
///
/// Hosts replay the commands onto their own surface; tests inspect them.
#[derive(Debug, Default)]
pub struct Renderer {
    draw_commands: Vec<DrawCommand>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    /// Take the recorded commands, leaving the renderer empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.draw_commands)
    }

    /// Clear draw commands from the last frame.
    pub fn clear(&mut self) {
        self.draw_commands.clear();
    }
}

impl Canvas for Renderer {
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.draw_commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, fill: &Fill) {
        self.draw_commands.push(DrawCommand::Circle {
            center,
            radius,
            fill: *fill,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.draw_commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style: *style,
        });
    }
}

/// Style for stroked lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub anti_alias: bool,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            anti_alias: true,
        }
    }
}

/// Style for filled shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: Color,
    pub anti_alias: bool,
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            anti_alias: true,
        }
    }
}

/// Style for text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
}

impl TextStyle {
    pub fn new(color: Color, size: f32) -> Self {
        Self { color, size }
    }
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const GREEN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 0.0,
        a: 1.0,
    };
    pub const CYAN: Color = Color {
        r: 0.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const MAGENTA: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 1.0,
        a: 1.0,
    };
    /// 0xFFCCCCCC
    pub const LIGHT_GRAY: Color = Color {
        r: 0.8,
        g: 0.8,
        b: 0.8,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
            a: channel(24),
        }
    }
}
