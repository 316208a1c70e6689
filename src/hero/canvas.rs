//! Drawing surface abstraction for the hero animation.
//!
//! The simulation only needs three primitives. [`SvgCanvas`] turns a frame
//! into a standalone SVG document for the published page; [`RecordingCanvas`]
//! keeps the raw draw calls so tests can assert on them.

use super::particle::Surface;
use maud::{Markup, html};
use std::fmt;

/// An `hsla()` color. Saturation, lightness in percent; alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {}%, {}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

pub trait Canvas {
    /// Erase everything and size the canvas to `surface`.
    fn clear(&mut self, surface: Surface);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Hsla);
    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Hsla);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Surface),
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Hsla,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Hsla,
    },
}

/// Canvas that records every call.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations issued since the most recent clear (the current frame).
    pub fn frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear(_)))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.ops[start..]
    }

    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear(_)))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, surface: Surface) {
        self.ops.push(DrawOp::Clear(surface));
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Hsla) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Hsla) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }
}

/// Canvas that keeps the current frame as SVG elements.
#[derive(Debug)]
pub struct SvgCanvas {
    surface: Surface,
    background: String,
    shapes: Vec<Markup>,
}

impl SvgCanvas {
    /// `background` is any CSS color, painted under every frame.
    pub fn new(surface: Surface, background: impl Into<String>) -> Self {
        Self {
            surface,
            background: background.into(),
            shapes: Vec::new(),
        }
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// The current frame as a standalone SVG document.
    pub fn to_svg(&self) -> Markup {
        let w = self.surface.width;
        let h = self.surface.height;
        html! {
            svg xmlns="http://www.w3.org/2000/svg" width=(w) height=(h)
                viewBox={ "0 0 " (w) " " (h) } preserveAspectRatio="xMidYMid slice" {
                rect width="100%" height="100%" fill=(self.background) {}
                @for shape in &self.shapes {
                    (shape)
                }
            }
        }
    }
}

impl Canvas for SvgCanvas {
    fn clear(&mut self, surface: Surface) {
        self.surface = surface;
        self.shapes.clear();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Hsla) {
        self.shapes.push(html! {
            line x1=(coord(from.0)) y1=(coord(from.1)) x2=(coord(to.0)) y2=(coord(to.1))
                stroke=(color.to_string()) stroke-width=(width) {}
        });
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Hsla) {
        self.shapes.push(html! {
            circle cx=(coord(center.0)) cy=(coord(center.1)) r=(coord(radius)) fill=(color.to_string()) {}
        });
    }
}

fn coord(v: f64) -> String {
    format!("{v:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsla_formats_as_css() {
        assert_eq!(
            Hsla::new(270.0, 60.0, 70.0, 0.15).to_string(),
            "hsla(270.0, 60%, 70%, 0.150)"
        );
    }

    #[test]
    fn recording_frame_starts_after_last_clear() {
        let mut canvas = RecordingCanvas::new();
        let color = Hsla::new(250.0, 60.0, 60.0, 0.6);
        canvas.clear(Surface::new(10.0, 10.0));
        canvas.fill_circle((1.0, 1.0), 1.0, color);
        canvas.clear(Surface::new(10.0, 10.0));
        canvas.fill_circle((2.0, 2.0), 1.0, color);

        assert_eq!(canvas.clears(), 2);
        assert_eq!(canvas.frame().len(), 1);
        assert_eq!(
            canvas.frame()[0],
            DrawOp::Circle {
                center: (2.0, 2.0),
                radius: 1.0,
                color,
            }
        );
    }

    #[test]
    fn svg_contains_drawn_shapes() {
        let mut canvas = SvgCanvas::new(Surface::new(200.0, 100.0), "#08061a");
        canvas.stroke_line((0.0, 0.0), (10.0, 10.0), 0.5, Hsla::new(270.0, 60.0, 70.0, 0.1));
        canvas.fill_circle((5.0, 5.0), 1.5, Hsla::new(250.0, 60.0, 60.0, 0.6));
        let svg = canvas.to_svg().into_string();

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains(r#"viewBox="0 0 200 100""#));
        assert!(svg.contains(r#"<line x1="0.00" y1="0.00" x2="10.00" y2="10.00""#));
        assert!(svg.contains(r#"<circle cx="5.00" cy="5.00" r="1.50""#));
        assert_eq!(canvas.shape_count(), 2);
    }

    #[test]
    fn svg_clear_drops_previous_frame() {
        let mut canvas = SvgCanvas::new(Surface::new(10.0, 10.0), "black");
        canvas.fill_circle((5.0, 5.0), 1.0, Hsla::new(250.0, 60.0, 60.0, 0.6));
        canvas.clear(Surface::new(20.0, 20.0));
        assert_eq!(canvas.shape_count(), 0);
        assert!(canvas.to_svg().into_string().contains(r#"width="20""#));
    }
}
