use crate::gui::theme::set_source_color;
use cairo::Context;
use dialkit::primitive::{IndicatorPath, Label, TickLine, TrackArc};
use dialkit::{DrawPrimitive, Point};
use std::f64::consts::PI;

/// Number of rings used to fake the track's blurred shadow.
const SHADOW_STEPS: u32 = 6;

struct PrimitiveRenderer<'a> {
    primitive: &'a DrawPrimitive,
}

impl<'a> PrimitiveRenderer<'a> {
    fn new(primitive: &'a DrawPrimitive) -> Self {
        Self { primitive }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        match self.primitive {
            DrawPrimitive::Arc(arc) => Self::draw_track(cr, arc),
            DrawPrimitive::TickLine(tick) => Self::draw_tick(cr, tick),
            DrawPrimitive::Label(label) => Self::draw_label(cr, label),
            DrawPrimitive::IndicatorPath(path) => Self::draw_indicator(cr, path),
        }
    }

    fn draw_track(cr: &Context, arc: &TrackArc) -> Result<(), cairo::Error> {
        if let Some(shadow) = &arc.shadow {
            // widening translucent rings stand in for a gaussian blur
            let (r, g, b, a) = shadow.color.into_components();
            let step_alpha = a / f64::from(SHADOW_STEPS);
            for step in 1..=SHADOW_STEPS {
                let spread = shadow.blur_radius * f64::from(step) / f64::from(SHADOW_STEPS);
                cr.set_source_rgba(r, g, b, step_alpha);
                cr.set_line_width(arc.stroke_width + spread);
                cr.new_sub_path();
                cr.arc(
                    arc.center.x + shadow.offset.x,
                    arc.center.y + shadow.offset.y,
                    arc.radius,
                    0.0,
                    2.0 * PI,
                );
                cr.stroke()?;
            }
        }

        set_source_color(cr, arc.color);
        cr.set_line_width(arc.stroke_width);
        cr.new_sub_path();
        cr.arc(arc.center.x, arc.center.y, arc.radius, 0.0, 2.0 * PI);
        cr.stroke()
    }

    fn draw_tick(cr: &Context, tick: &TickLine) -> Result<(), cairo::Error> {
        set_source_color(cr, tick.color);
        cr.set_line_width(tick.stroke_width);
        cr.move_to(tick.start.x, tick.start.y);
        cr.line_to(tick.end.x, tick.end.y);
        cr.stroke()
    }

    fn draw_label(cr: &Context, label: &Label) -> Result<(), cairo::Error> {
        cr.save()?;
        cr.translate(label.position.x, label.position.y);
        cr.rotate(label.rotation_degrees.to_radians());

        set_source_color(cr, label.color);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        cr.set_font_size(label.text_size);
        let ext = cr.text_extents(&label.text)?;
        // centered on the anchor, baseline through it
        cr.move_to(-(ext.x_bearing() + ext.width() / 2.0), 0.0);
        cr.show_text(&label.text)?;
        cr.restore()
    }

    fn draw_indicator(cr: &Context, path: &IndicatorPath) -> Result<(), cairo::Error> {
        let [tip, rest @ ..] = &path.points;
        set_source_color(cr, path.color);
        cr.move_to(tip.x, tip.y);
        for Point { x, y } in rest {
            cr.line_to(*x, *y);
        }
        cr.close_path();
        cr.fill()
    }
}

pub fn draw(cr: &Context, primitives: &[DrawPrimitive]) -> Result<(), cairo::Error> {
    for primitive in primitives {
        PrimitiveRenderer::new(primitive).draw(cr)?;
    }
    Ok(())
}
