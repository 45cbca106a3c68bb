use crate::config::{ScaleConfig, ScaleStyle, ValueRange};
use crate::error::ConfigurationError;
use crate::geometry::{Point, Rect};
use crate::gesture::GestureTracker;
use crate::primitive::{DrawPrimitive, IndicatorPath, Label, Shadow, TickLine, TrackArc};
use crate::tick::TickClass;

pub const TICK_STROKE_WIDTH: f64 = 1.0;
pub const LABEL_GAP: f64 = 5.0; // between a major tick's inner end and its label
pub const INDICATOR_BASE_WIDTH: f64 = 8.0;
// ticks are measured from "up"; screen angles from "right"
const TICK_ANGLE_OFFSET: f64 = -90.0;

pub trait AngleSource {
    fn angle_degrees(&self) -> f64;
}

impl AngleSource for f64 {
    fn angle_degrees(&self) -> f64 {
        *self
    }
}

impl AngleSource for GestureTracker {
    fn angle_degrees(&self) -> f64 {
        self.angle()
    }
}

/// Where the dial sits inside its bounds. The track circle hangs from the top
/// edge, so only its upper part is normally visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleGeometry {
    pub center: Point,
    pub track_center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

impl ScaleGeometry {
    pub fn new(style: &ScaleStyle, bounds: Rect) -> Self {
        let center = bounds.center();
        Self {
            center,
            track_center: Point::new(
                center.x,
                bounds.y + style.track_width / 2.0 + style.radius,
            ),
            outer_radius: style.outer_radius(),
            inner_radius: style.inner_radius(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: i32,
    pub class: TickClass,
    /// Screen angle in radians around the track center.
    pub angle: f64,
}

impl Tick {
    pub fn new(value: i32, range: &ValueRange, angle_degrees: f64) -> Self {
        let degrees =
            f64::from(value) - f64::from(range.initial) + angle_degrees + TICK_ANGLE_OFFSET;
        Self {
            value,
            class: TickClass::classify(value),
            angle: degrees.to_radians(),
        }
    }
}

pub fn ticks(range: &ValueRange, angle_degrees: f64) -> impl Iterator<Item = Tick> + '_ {
    range
        .values()
        .map(move |value| Tick::new(value, range, angle_degrees))
}

/// Builds the primitives for one frame: the track ring, then each tick (and
/// label for major ticks) in ascending value order, then the indicator.
pub fn layout(
    config: &ScaleConfig,
    angle: &impl AngleSource,
    bounds: Rect,
) -> Result<Vec<DrawPrimitive>, ConfigurationError> {
    config.validate()?;
    if bounds.is_empty() {
        return Ok(Vec::new());
    }

    let style = &config.style;
    let geometry = ScaleGeometry::new(style, bounds);
    let angle_degrees = angle.angle_degrees();

    let tick_count = config.range.values().count();
    let mut primitives = Vec::with_capacity(tick_count + tick_count / 10 + 3);

    primitives.push(track_ring(style, &geometry).into());

    for tick in ticks(&config.range, angle_degrees) {
        let tick_style = style.ticks.get(tick.class);
        let inner_end = geometry.outer_radius - tick_style.length;

        primitives.push(
            TickLine {
                value: tick.value,
                class: tick.class,
                start: Point::polar(geometry.track_center, inner_end, tick.angle),
                end: Point::polar(geometry.track_center, geometry.outer_radius, tick.angle),
                color: tick_style.color,
                stroke_width: TICK_STROKE_WIDTH,
            }
            .into(),
        );

        if tick.class.is_labelled() {
            let text_radius = inner_end - LABEL_GAP - style.label_text_size;
            primitives.push(
                Label {
                    value: tick.value,
                    text: tick.value.abs().to_string(),
                    position: Point::polar(geometry.track_center, text_radius, tick.angle),
                    rotation_degrees: tick.angle.to_degrees() + 90.0,
                    text_size: style.label_text_size,
                    color: style.label_color,
                }
                .into(),
            );
        }
    }

    primitives.push(indicator(style, &geometry).into());

    log::trace!(
        "Laid out {} primitives for angle {:.2}°",
        primitives.len(),
        angle_degrees
    );
    Ok(primitives)
}

fn track_ring(style: &ScaleStyle, geometry: &ScaleGeometry) -> TrackArc {
    let shadow = (style.shadow_blur > 0.0).then(|| Shadow {
        blur_radius: style.shadow_blur,
        offset: Point::default(),
        color: style.shadow_color,
    });

    TrackArc {
        center: geometry.track_center,
        radius: style.radius,
        stroke_width: style.track_width,
        color: style.track_color,
        shadow,
    }
}

fn indicator(style: &ScaleStyle, geometry: &ScaleGeometry) -> IndicatorPath {
    let Point { x, y } = geometry.track_center;
    let base_y = y - geometry.inner_radius;
    let half_base = INDICATOR_BASE_WIDTH / 2.0;

    IndicatorPath {
        points: [
            Point::new(x, base_y - style.indicator_length),
            Point::new(x - half_base, base_y),
            Point::new(x + half_base, base_y),
        ],
        color: style.indicator_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    const BOUNDS: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 300.0,
    };

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    fn weight_config() -> ScaleConfig {
        ScaleConfig::default()
    }

    #[test]
    fn test_geometry_from_bounds() {
        let style = ScaleStyle::default();
        let geometry = ScaleGeometry::new(&style, Rect::new(10.0, 20.0, 400.0, 300.0));
        assert_eq!(geometry.center, Point::new(210.0, 170.0));
        assert_eq!(geometry.track_center, Point::new(210.0, 20.0 + 75.0 + 550.0));
        assert_eq!(geometry.outer_radius, 625.0);
        assert_eq!(geometry.inner_radius, 475.0);
    }

    #[test]
    fn test_primitive_order_and_counts() {
        let config = weight_config();
        let primitives = layout(&config, &0.0, BOUNDS).unwrap();

        // ring + 231 ticks + 24 labels + indicator
        assert_eq!(primitives.len(), 1 + 231 + 24 + 1);
        assert!(matches!(primitives.first(), Some(DrawPrimitive::Arc(_))));
        assert!(matches!(primitives.last(), Some(DrawPrimitive::IndicatorPath(_))));

        let tick_values: Vec<i32> = primitives
            .iter()
            .filter_map(DrawPrimitive::as_tick)
            .map(|t| t.value)
            .collect();
        assert_eq!(tick_values, (20..=250).collect::<Vec<_>>());

        // each label directly follows its major tick
        for pair in primitives.windows(2) {
            if let DrawPrimitive::Label(label) = &pair[1] {
                let tick = pair[0].as_tick().unwrap();
                assert_eq!(tick.value, label.value);
                assert_eq!(tick.class, TickClass::Major);
            }
        }
    }

    #[test]
    fn test_label_count_matches_major_ticks() {
        for range in [
            ValueRange::new(20, 250, 80),
            ValueRange::new(-47, 13, 0),
            ValueRange::new(1, 9, 5),
            ValueRange::new(10, 10, 10),
        ] {
            let config = ScaleConfig::new(range, ScaleStyle::default());
            let primitives = layout(&config, &0.0, BOUNDS).unwrap();

            let labels = primitives.iter().filter_map(DrawPrimitive::as_label).count();
            let majors = range
                .values()
                .filter(|v| TickClass::classify(*v) == TickClass::Major)
                .count();
            assert_eq!(labels, majors, "{range:?}");
        }
    }

    #[test]
    fn test_tick_classes_use_their_style() {
        let config = weight_config();
        let ticks = config.style.ticks;
        let primitives = layout(&config, &0.0, BOUNDS).unwrap();

        for tick in primitives.iter().filter_map(DrawPrimitive::as_tick) {
            let expected = ticks.get(TickClass::classify(tick.value));
            assert_eq!(tick.class, TickClass::classify(tick.value));
            assert_eq!(tick.color, expected.color);
            assert_eq!(tick.stroke_width, TICK_STROKE_WIDTH);
            assert_close(tick.start.distance_to(tick.end), expected.length);
        }
    }

    #[test]
    fn test_initial_value_sits_under_indicator() {
        let config = weight_config();
        let geometry = ScaleGeometry::new(&config.style, BOUNDS);
        let primitives = layout(&config, &0.0, BOUNDS).unwrap();

        let tick = primitives
            .iter()
            .filter_map(DrawPrimitive::as_tick)
            .find(|t| t.value == 80)
            .unwrap();
        assert_close(tick.end.x, geometry.track_center.x);
        assert_close(tick.end.y, geometry.track_center.y - 625.0);
        assert_close(tick.start.y, geometry.track_center.y - 625.0 + 35.0);

        let label = primitives
            .iter()
            .filter_map(DrawPrimitive::as_label)
            .find(|l| l.value == 80)
            .unwrap();
        assert_eq!(label.text, "80");
        assert_close(label.rotation_degrees, 0.0);
        assert_close(label.position.x, geometry.track_center.x);
        assert_close(
            label.position.y,
            geometry.track_center.y - (625.0 - 35.0 - LABEL_GAP - 18.0),
        );
    }

    #[test]
    fn test_rotation_brings_selected_value_to_top() {
        let config = weight_config();
        let geometry = ScaleGeometry::new(&config.style, BOUNDS);
        // angle 30 selects 50
        let primitives = layout(&config, &30.0, BOUNDS).unwrap();

        let tick = primitives
            .iter()
            .filter_map(DrawPrimitive::as_tick)
            .find(|t| t.value == 50)
            .unwrap();
        assert_close(tick.end.x, geometry.track_center.x);
        assert!(tick.end.y < geometry.track_center.y);

        // one unit further sits one degree clockwise
        let next = Tick::new(51, &config.range, 30.0);
        assert_close(next.angle.to_degrees(), -89.0);
    }

    #[test]
    fn test_labels_show_absolute_values() {
        let config = ScaleConfig::new(ValueRange::new(-20, 0, -10), ScaleStyle::default());
        let texts: Vec<String> = layout(&config, &0.0, BOUNDS)
            .unwrap()
            .iter()
            .filter_map(DrawPrimitive::as_label)
            .map(|l| l.text.clone())
            .collect();
        assert_eq!(texts, vec!["20", "10", "0"]);
    }

    #[test]
    fn test_indicator_is_fixed_at_top() {
        let config = weight_config();
        let geometry = ScaleGeometry::new(&config.style, BOUNDS);

        for angle in [0.0, 45.0, -170.0] {
            let primitives = layout(&config, &angle, BOUNDS).unwrap();
            let Some(DrawPrimitive::IndicatorPath(path)) = primitives.last() else {
                panic!("indicator must be last");
            };
            let base_y = geometry.track_center.y - 475.0;
            assert_eq!(path.points[0], Point::new(200.0, base_y - 60.0));
            assert_eq!(path.points[1], Point::new(196.0, base_y));
            assert_eq!(path.points[2], Point::new(204.0, base_y));
            assert_eq!(path.color, Color::green());
        }
    }

    #[test]
    fn test_track_ring() {
        let config = weight_config();
        let primitives = layout(&config, &0.0, BOUNDS).unwrap();
        let Some(DrawPrimitive::Arc(ring)) = primitives.first() else {
            panic!("ring must be first");
        };
        assert_eq!(ring.radius, 550.0);
        assert_eq!(ring.stroke_width, 150.0);
        assert_eq!(ring.color, Color::white());
        assert_eq!(ring.shadow.map(|s| s.blur_radius), Some(60.0));

        let mut style = ScaleStyle::default();
        style.shadow_blur = 0.0;
        let primitives = layout(&ScaleConfig::new(config.range, style), &0.0, BOUNDS).unwrap();
        let Some(DrawPrimitive::Arc(ring)) = primitives.first() else {
            panic!("ring must be first");
        };
        assert_eq!(ring.shadow, None);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let config = weight_config();
        let first = layout(&config, &-42.5, BOUNDS).unwrap();
        let second = layout(&config, &-42.5, BOUNDS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_bounds_draw_nothing() {
        let config = weight_config();
        for bounds in [
            Rect::from_size(0.0, 300.0),
            Rect::from_size(400.0, 0.0),
            Rect::from_size(-5.0, -5.0),
        ] {
            assert_eq!(layout(&config, &0.0, bounds), Ok(Vec::new()));
        }
    }

    #[test]
    fn test_invalid_config_fails() {
        let inverted = ScaleConfig::new(ValueRange::new(250, 20, 80), ScaleStyle::default());
        assert_eq!(
            layout(&inverted, &0.0, BOUNDS),
            Err(ConfigurationError::EmptyRange { min: 250, max: 20 })
        );

        let style = ScaleStyle {
            radius: 75.0,
            ..ScaleStyle::default()
        };
        let too_wide = ScaleConfig::new(ValueRange::default(), style);
        assert!(matches!(
            layout(&too_wide, &0.0, Rect::from_size(0.0, 0.0)),
            Err(ConfigurationError::TrackTooWide { .. })
        ));
    }

    #[test]
    fn test_tracker_as_angle_source() {
        let config = weight_config();
        let mut tracker = GestureTracker::new(config.range).unwrap();
        tracker.set_pivot(ScaleGeometry::new(&config.style, BOUNDS).track_center);

        assert_eq!(
            layout(&config, &tracker, BOUNDS).unwrap(),
            layout(&config, &0.0, BOUNDS).unwrap()
        );
    }
}
