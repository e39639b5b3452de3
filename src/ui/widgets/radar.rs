//! Radar (spider) chart drawn on a braille canvas

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Widget,
    },
};

use crate::modules::views::Category;

/// Canvas half-extent on the x axis; wider than y to leave room for labels
const X_BOUND: f64 = 1.6;
const Y_BOUND: f64 = 1.25;
/// Distance of axis labels from the centre, relative to the outer ring
const LABEL_RADIUS: f64 = 1.12;

pub struct RadarChart<'a> {
    axes: &'a [Category],
    max: u64,
    /// Number of concentric grid rings
    rings: u64,
    color: Color,
    grid_color: Color,
}

impl<'a> RadarChart<'a> {
    pub fn new(axes: &'a [Category], max: u64) -> Self {
        Self {
            axes,
            max,
            rings: 5,
            color: Color::Cyan,
            grid_color: Color::DarkGray,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Position of axis `index` of `count` at `radius` (1.0 = outer ring).
///
/// The first axis points straight up and the rest follow clockwise.
pub fn vertex(index: usize, count: usize, radius: f64) -> (f64, f64) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let angle = FRAC_PI_2 - TAU * index as f64 / count as f64;
    (radius * angle.cos(), radius * angle.sin())
}

/// Left edge of a label of `width` canvas units anchored at `x`.
///
/// Left-side labels end at the anchor and top/bottom ones are centred on it.
/// The whole label is kept inside the canvas bounds.
pub fn label_x(x: f64, width: f64) -> f64 {
    let start = if x.abs() < 0.05 {
        x - width / 2.0
    } else if x < 0.0 {
        x - width
    } else {
        x
    };
    start.min(X_BOUND - width).max(-X_BOUND)
}

/// Value scaled onto the `0.0..=1.0` radius, clamped to the domain
pub fn scaled(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    value.min(max) as f64 / max as f64
}

fn polygon(points: &[(f64, f64)], color: Color) -> Vec<CanvasLine> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&(x1, y1), &(x2, y2))| CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        })
        .collect()
}

impl<'a> Widget for RadarChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let RadarChart {
            axes,
            max,
            rings,
            color,
            grid_color,
        } = self;
        let count = axes.len();
        // Canvas units covered by one terminal column
        let unit = 2.0 * X_BOUND / f64::from(area.width.saturating_sub(1).max(1));

        let grid: Vec<Vec<CanvasLine>> = (1..=rings)
            .map(|ring| {
                let radius = ring as f64 / rings as f64;
                let points: Vec<_> = (0..count).map(|i| vertex(i, count, radius)).collect();
                polygon(&points, grid_color)
            })
            .collect();
        let spokes: Vec<CanvasLine> = (0..count)
            .map(|i| {
                let (x2, y2) = vertex(i, count, 1.0);
                CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2,
                    y2,
                    color: grid_color,
                }
            })
            .collect();
        let values: Vec<(f64, f64)> = axes
            .iter()
            .enumerate()
            .map(|(i, axis)| vertex(i, count, scaled(axis.value, max)))
            .collect();
        let outline = polygon(&values, color);

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-X_BOUND, X_BOUND])
            .y_bounds([-Y_BOUND, Y_BOUND])
            .paint(|ctx| {
                for line in grid.iter().flatten().chain(spokes.iter()) {
                    ctx.draw(line);
                }
                ctx.layer();
                for line in &outline {
                    ctx.draw(line);
                }
                ctx.draw(&Points {
                    coords: &values,
                    color,
                });
                ctx.layer();
                for (i, axis) in axes.iter().enumerate() {
                    let (x, y) = vertex(i, count, LABEL_RADIUS);
                    let label = format!("{} {}", axis.label, axis.value);
                    let width = label.chars().count() as f64 * unit;
                    let label = Span::styled(label, Style::default().fg(Color::White));
                    ctx.print(label_x(x, width), y, label);
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_first_vertex_points_up() {
        let (x, y) = vertex(0, 6, 1.0);
        assert!(close(x, 0.0));
        assert!(close(y, 1.0));
    }

    #[test]
    fn test_vertices_go_clockwise() {
        let (x, _) = vertex(1, 4, 1.0);
        assert!(close(x, 1.0));
        let (_, y) = vertex(2, 4, 1.0);
        assert!(close(y, -1.0));
        let (x, _) = vertex(3, 4, 0.5);
        assert!(close(x, -0.5));
    }

    #[test]
    fn test_scaled_clamps() {
        assert!(close(scaled(95, 100), 0.95));
        assert!(close(scaled(150, 100), 1.0));
        assert!(close(scaled(10, 0), 0.0));
    }

    #[test]
    fn test_polygon_closes() {
        let points = [(0.0, 1.0), (1.0, 0.0), (0.0, -1.0)];
        let lines = polygon(&points, Color::Cyan);
        assert_eq!(lines.len(), 3);
        assert!(close(lines[2].x2, 0.0) && close(lines[2].y2, 1.0));
    }

    #[test]
    fn test_render_empty_and_tiny_areas() {
        let axes = [Category { label: "Only", value: 50 }];
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 8));
        RadarChart::new(&axes, 100).render(Rect::new(0, 0, 0, 0), &mut buf);
        RadarChart::new(&[], 100).render(Rect::new(0, 0, 20, 8), &mut buf);
        RadarChart::new(&axes, 100).render(Rect::new(0, 0, 1, 1), &mut buf);
    }

    #[test]
    fn test_label_x_stays_on_canvas() {
        // left side: ends at the anchor unless that would start off canvas
        assert!(close(label_x(-0.5, 0.4), -0.9));
        assert!(close(label_x(-0.97, 0.67), -X_BOUND));
        // right side: starts at the anchor unless it would run past the edge
        assert!(close(label_x(0.5, 0.4), 0.5));
        assert!(close(label_x(1.4, 0.4), X_BOUND - 0.4));
        // top and bottom: centred
        assert!(close(label_x(0.0, 0.4), -0.2));
        // wider than the canvas: pinned to the left edge
        assert!(close(label_x(0.0, 4.0), -X_BOUND));
    }

    #[test]
    fn test_every_label_drawn_on_narrow_canvas() {
        let axes = [
            Category { label: "Performance", value: 85 },
            Category { label: "Comfort", value: 90 },
            Category { label: "Technology", value: 88 },
            Category { label: "Safety", value: 95 },
            Category { label: "Cargo space", value: 87 },
            Category { label: "Value", value: 92 },
        ];
        for width in [40, 68, 118] {
            let area = Rect::new(0, 0, width, 16);
            let mut buf = Buffer::empty(area);
            RadarChart::new(&axes, 100).render(area, &mut buf);
            let screen = format!("{buf:?}");
            for axis in &axes {
                let label = format!("{} {}", axis.label, axis.value);
                assert!(screen.contains(&label), "{width} cols missing {label}");
            }
        }
    }
}
