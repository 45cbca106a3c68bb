use crate::color::Color;
use crate::geometry::Point;
use crate::tick::TickClass;
use derive_more::From;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub blur_radius: f64,
    pub offset: Point,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackArc {
    pub center: Point,
    pub radius: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub shadow: Option<Shadow>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLine {
    pub value: i32,
    pub class: TickClass,
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub stroke_width: f64,
}

/// Text centered horizontally on `position`, baseline through it, rotated by
/// `rotation_degrees` around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub value: i32,
    pub text: String,
    pub position: Point,
    pub rotation_degrees: f64,
    pub text_size: f64,
    pub color: Color,
}

/// Closed, filled polygon; `points[0]` is the tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPath {
    pub points: [Point; 3],
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, From)]
pub enum DrawPrimitive {
    Arc(TrackArc),
    TickLine(TickLine),
    Label(Label),
    IndicatorPath(IndicatorPath),
}

impl DrawPrimitive {
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Self::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_tick(&self) -> Option<&TickLine> {
        match self {
            Self::TickLine(tick) => Some(tick),
            _ => None,
        }
    }
}
