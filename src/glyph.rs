use crate::app::Message;
use crate::weather::WeatherIcon;
use iced::{
    widget::canvas::{self, Frame, Path, Stroke},
    Color, Point, Rectangle, Size, Theme,
};
use std::f32::consts::PI;

const SUN: Color = Color::from_rgb(1.0, 0.8, 0.0);
const MOON: Color = Color::from_rgb(0.98, 0.93, 0.68);
const CLOUD: Color = Color::WHITE;
const RAIN: Color = Color::from_rgb(0.2, 0.55, 1.0);

/// Multicolor weather symbol drawn on a canvas.
///
/// Drawing happens in a unit square scaled to the canvas bounds, so the same
/// glyph serves the large main icon and the small forecast icons.
pub struct WeatherGlyph {
    icon: WeatherIcon,
}

impl WeatherGlyph {
    pub fn new(icon: WeatherIcon) -> Self {
        Self { icon }
    }
}

impl canvas::Program<Message> for WeatherGlyph {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Keep the aspect ratio, centered
        let side = bounds.width.min(bounds.height);
        let origin = Point::new(
            (bounds.width - side) / 2.0,
            (bounds.height - side) / 2.0,
        );
        let pen = Pen { origin, side };

        match self.icon {
            WeatherIcon::CloudSun => {
                draw_sun(&mut frame, &pen, Point::new(0.64, 0.36), 0.2);
                draw_cloud(&mut frame, &pen, 0.62);
            }
            WeatherIcon::CloudMoon => {
                draw_moon(&mut frame, &pen, Point::new(0.64, 0.34), 0.24);
                draw_cloud(&mut frame, &pen, 0.62);
            }
            WeatherIcon::CloudSunBolt => {
                draw_sun(&mut frame, &pen, Point::new(0.66, 0.3), 0.17);
                draw_cloud(&mut frame, &pen, 0.52);
                draw_bolt(&mut frame, &pen);
            }
            WeatherIcon::Wind => draw_wind(&mut frame, &pen),
            WeatherIcon::CloudSunRain => {
                draw_sun(&mut frame, &pen, Point::new(0.66, 0.3), 0.17);
                draw_cloud(&mut frame, &pen, 0.52);
                draw_rain(&mut frame, &pen);
            }
            WeatherIcon::CloudRain => {
                draw_cloud(&mut frame, &pen, 0.52);
                draw_rain(&mut frame, &pen);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Maps unit-square coordinates into the frame.
struct Pen {
    origin: Point,
    side: f32,
}

impl Pen {
    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(self.origin.x + x * self.side, self.origin.y + y * self.side)
    }

    fn len(&self, unit: f32) -> f32 {
        unit * self.side
    }
}

fn draw_sun(frame: &mut Frame, pen: &Pen, center: Point, radius: f32) {
    let rays = Path::new(|builder| {
        for i in 0..8 {
            let angle = i as f32 * PI / 4.0;
            let (sin, cos) = angle.sin_cos();
            builder.move_to(pen.point(
                center.x + cos * radius * 1.3,
                center.y + sin * radius * 1.3,
            ));
            builder.line_to(pen.point(
                center.x + cos * radius * 1.7,
                center.y + sin * radius * 1.7,
            ));
        }
    });
    frame.stroke(
        &rays,
        Stroke::default()
            .with_color(SUN)
            .with_width(pen.len(0.035).max(1.0)),
    );
    frame.fill(
        &Path::circle(pen.point(center.x, center.y), pen.len(radius)),
        SUN,
    );
}

// Crescent opening to the right: outer arc on the left, inner edge bulging back
fn draw_moon(frame: &mut Frame, pen: &Pen, center: Point, radius: f32) {
    const STEPS: usize = 24;
    let start = PI / 3.0;
    let end = 5.0 * PI / 3.0;
    let tip_sin = start.sin();

    let crescent = Path::new(|builder| {
        for step in 0..=STEPS {
            let t = start + (end - start) * step as f32 / STEPS as f32;
            let point = pen.point(center.x + radius * t.cos(), center.y - radius * t.sin());
            if step == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }
        for step in (0..=STEPS).rev() {
            let t = start + (end - start) * step as f32 / STEPS as f32;
            let depth = 1.0 - (t.sin() / tip_sin).powi(2);
            let x = center.x + radius * (0.5 - 0.6 * depth);
            builder.line_to(pen.point(x, center.y - radius * t.sin()));
        }
        builder.close();
    });
    frame.fill(&crescent, MOON);
}

fn draw_cloud(frame: &mut Frame, pen: &Pen, base: f32) {
    let puffs = [
        (0.3, base - 0.08, 0.14),
        (0.48, base - 0.16, 0.19),
        (0.66, base - 0.07, 0.13),
    ];
    for (x, y, radius) in puffs {
        frame.fill(&Path::circle(pen.point(x, y), pen.len(radius)), CLOUD);
    }
    let body = Path::rectangle(
        pen.point(0.2, base - 0.1),
        Size::new(pen.len(0.56), pen.len(0.14)),
    );
    frame.fill(&body, CLOUD);
    frame.fill(&Path::circle(pen.point(0.2, base - 0.03), pen.len(0.07)), CLOUD);
    frame.fill(&Path::circle(pen.point(0.76, base - 0.03), pen.len(0.07)), CLOUD);
}

fn draw_bolt(frame: &mut Frame, pen: &Pen) {
    let bolt = Path::new(|builder| {
        builder.move_to(pen.point(0.5, 0.54));
        builder.line_to(pen.point(0.38, 0.74));
        builder.line_to(pen.point(0.48, 0.74));
        builder.line_to(pen.point(0.42, 0.92));
        builder.line_to(pen.point(0.6, 0.68));
        builder.line_to(pen.point(0.5, 0.68));
        builder.line_to(pen.point(0.58, 0.54));
        builder.close();
    });
    frame.fill(&bolt, SUN);
}

fn draw_rain(frame: &mut Frame, pen: &Pen) {
    let drops = Path::new(|builder| {
        for x in [0.32, 0.46, 0.6] {
            builder.move_to(pen.point(x, 0.64));
            builder.line_to(pen.point(x - 0.05, 0.8));
            builder.move_to(pen.point(x + 0.04, 0.78));
            builder.line_to(pen.point(x - 0.01, 0.92));
        }
    });
    frame.stroke(
        &drops,
        Stroke::default()
            .with_color(RAIN)
            .with_width(pen.len(0.04).max(1.0)),
    );
}

fn draw_wind(frame: &mut Frame, pen: &Pen) {
    let gusts = Path::new(|builder| {
        for (y, from, to) in [(0.34, 0.12, 0.72), (0.5, 0.2, 0.88), (0.66, 0.12, 0.6)] {
            builder.move_to(pen.point(from, y));
            builder.line_to(pen.point(to, y));
            builder.line_to(pen.point(to + 0.06, y - 0.05));
        }
    });
    frame.stroke(
        &gusts,
        Stroke::default()
            .with_color(CLOUD)
            .with_width(pen.len(0.05).max(1.0)),
    );
}
