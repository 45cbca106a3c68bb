use crate::config::ScaleConfig;
use crate::error::{ConfigurationError, SequencingError};
use crate::geometry::Rect;
use crate::gesture::{DragEvent, GestureTracker};
use crate::layout::{self, AngleSource, ScaleGeometry};
use crate::primitive::DrawPrimitive;

#[derive(Debug, Clone)]
pub struct ScaleDial {
    config: ScaleConfig,
    tracker: GestureTracker,
    bounds: Rect,
}

impl ScaleDial {
    pub fn new(config: ScaleConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            tracker: GestureTracker::new(config.range)?,
            config,
            bounds: Rect::default(),
        })
    }

    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn value(&self) -> i32 {
        self.tracker.value()
    }

    pub fn angle(&self) -> f64 {
        self.tracker.angle()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn geometry(&self) -> ScaleGeometry {
        ScaleGeometry::new(&self.config.style, self.bounds)
    }

    pub fn resize(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.tracker.set_pivot(self.geometry().track_center);
    }

    pub fn handle(&mut self, event: DragEvent) -> Result<Option<i32>, SequencingError> {
        self.tracker.handle(event)
    }

    pub fn cancel_drag(&mut self) -> bool {
        self.tracker.cancel_drag()
    }

    pub fn primitives(&self) -> Result<Vec<DrawPrimitive>, ConfigurationError> {
        layout::layout(&self.config, &self.tracker, self.bounds)
    }

    /// The rotation survives as long as the value range is unchanged.
    pub fn reconfigure(&mut self, config: ScaleConfig) -> Result<(), ConfigurationError> {
        config.validate()?;
        if config.range != self.config.range {
            log::info!(
                "Value range changed to [{}, {}], resetting to {}",
                config.range.min,
                config.range.max,
                config.range.initial
            );
            self.tracker = GestureTracker::new(config.range)?;
        } else if self.tracker.cancel_drag() {
            log::debug!("Active drag ended by reconfiguration");
        }
        self.config = config;
        self.resize(self.bounds);
        Ok(())
    }
}

impl AngleSource for ScaleDial {
    fn angle_degrees(&self) -> f64 {
        self.angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScaleStyle, ValueRange};
    use crate::geometry::Point;

    fn dial() -> ScaleDial {
        let mut dial = ScaleDial::new(ScaleConfig::default()).unwrap();
        dial.resize(Rect::from_size(400.0, 300.0));
        dial
    }

    /// Point on the track at `degrees` clockwise from the top.
    fn on_track(dial: &ScaleDial, degrees: f64) -> Point {
        let geometry = dial.geometry();
        Point::polar(
            geometry.track_center,
            dial.config().style.radius,
            (degrees - 90.0).to_radians(),
        )
    }

    #[test]
    fn test_resize_moves_pivot_to_track_center() {
        let dial = dial();
        assert_eq!(dial.tracker.pivot(), Point::new(200.0, 625.0));
    }

    #[test]
    fn test_drag_through_facade() {
        let mut dial = dial();
        assert_eq!(dial.value(), 80);

        let start = on_track(&dial, 0.0);
        assert_eq!(dial.handle(DragEvent::Start(start)), Ok(None));
        assert!(dial.is_dragging());
        let moved = dial.handle(DragEvent::Move(on_track(&dial, 12.0))).unwrap();
        assert_eq!(moved, Some(68));
        assert_eq!(dial.handle(DragEvent::End), Ok(None));
        assert_eq!(dial.value(), 68);
        assert_eq!(
            dial.handle(DragEvent::Move(start)),
            Err(SequencingError::MoveWithoutSession)
        );
    }

    #[test]
    fn test_tall_widget_drag_below_pivot() {
        let mut dial = ScaleDial::new(ScaleConfig::default()).unwrap();
        dial.resize(Rect::from_size(400.0, 1000.0));
        let pivot = dial.tracker.pivot();
        let below = |dx: f64| Point::new(pivot.x + dx, pivot.y + 200.0);

        dial.handle(DragEvent::Start(below(-100.0))).unwrap();
        let before = dial.handle(DragEvent::Move(below(-1.0))).unwrap();
        let after = dial.handle(DragEvent::Move(below(1.0))).unwrap();
        dial.handle(DragEvent::End).unwrap();

        assert_eq!(before, Some(106));
        assert_eq!(after, Some(107));
    }

    #[test]
    fn test_primitives_follow_the_angle() {
        let mut dial = dial();
        dial.handle(DragEvent::Start(on_track(&dial, 0.0))).unwrap();
        dial.handle(DragEvent::Move(on_track(&dial, 20.0))).unwrap();
        dial.handle(DragEvent::End).unwrap();

        assert_eq!(
            dial.primitives().unwrap(),
            layout::layout(dial.config(), &dial.angle(), dial.bounds()).unwrap()
        );
    }

    #[test]
    fn test_reconfigure_keeps_angle_for_same_range() {
        let mut dial = dial();
        dial.handle(DragEvent::Start(on_track(&dial, 0.0))).unwrap();
        dial.handle(DragEvent::Move(on_track(&dial, -10.0))).unwrap();

        let style = ScaleStyle {
            radius: 300.0,
            ..ScaleStyle::default()
        };
        dial.reconfigure(ScaleConfig::new(ValueRange::default(), style))
            .unwrap();
        assert!(!dial.is_dragging());
        assert_eq!(dial.value(), 90);
        assert_eq!(dial.tracker.pivot(), Point::new(200.0, 375.0));

        dial.reconfigure(ScaleConfig::new(ValueRange::new(0, 10, 5), style))
            .unwrap();
        assert_eq!(dial.value(), 5);
        assert_eq!(dial.angle(), 0.0);
    }

    #[test]
    fn test_reconfigure_rejects_invalid_config() {
        let mut dial = dial();
        let bad = ScaleConfig::new(ValueRange::new(5, 0, 3), ScaleStyle::default());
        assert!(dial.reconfigure(bad).is_err());
        assert_eq!(dial.config(), &ScaleConfig::default());
    }
}
