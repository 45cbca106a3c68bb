use crate::config::ValueRange;
use crate::error::{ConfigurationError, SequencingError};
use crate::geometry::{Point, bearing, wrap_degrees};

/// Pointer input from the host. Each session is one `Start`, any number of
/// `Move`s and one `End`; sessions never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Start(Point),
    Move(Point),
    End,
}

#[derive(Debug, Clone, Copy)]
struct Session {
    last_bearing: f64,
    travel: f64,
}

/// The value is never stored. It is derived from the clamped angle, so
/// turning clockwise lowers the value.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    range: ValueRange,
    pivot: Point,
    angle: f64,
    committed: f64,
    session: Option<Session>,
}

impl GestureTracker {
    pub fn new(range: ValueRange) -> Result<Self, ConfigurationError> {
        range.validate()?;
        Ok(Self {
            range,
            pivot: Point::default(),
            angle: 0.0,
            committed: 0.0,
            session: None,
        })
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angle_limits(&self) -> (f64, f64) {
        self.range.angle_limits()
    }

    pub fn value(&self) -> i32 {
        self.range.value_at(self.angle)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn set_pivot(&mut self, pivot: Point) {
        self.pivot = pivot;
    }

    pub fn drag_start(&mut self, pointer: Point) {
        if self.session.take().is_some() {
            log::warn!("Drag start during an active session; ending the previous one");
            self.committed = self.angle;
        }
        if !pointer.is_finite() {
            log::warn!("Ignoring drag start at non-finite point {:?}", pointer);
            return;
        }
        let anchor = bearing(self.pivot, pointer);
        log::debug!("Drag started at {:.2}° (angle {:.2}°)", anchor, self.angle);
        self.session = Some(Session {
            last_bearing: anchor,
            travel: 0.0,
        });
    }

    pub fn drag_move(&mut self, pointer: Point) -> Result<i32, SequencingError> {
        let session = self
            .session
            .as_mut()
            .ok_or(SequencingError::MoveWithoutSession)?;

        if pointer.is_finite() {
            let current = bearing(self.pivot, pointer);
            // shortest turn since the last sample, so passing below the pivot
            // does not jump a full revolution
            session.travel += wrap_degrees(current - session.last_bearing);
            session.last_bearing = current;
            let (min_angle, max_angle) = self.range.angle_limits();
            self.angle = (self.committed + session.travel).clamp(min_angle, max_angle);
        } else {
            log::warn!("Ignoring drag move to non-finite point {:?}", pointer);
        }

        let value = self.value();
        log::trace!("Drag moved to angle {:.2}°, value {}", self.angle, value);
        Ok(value)
    }

    pub fn drag_end(&mut self) -> Result<(), SequencingError> {
        self.session.take().ok_or(SequencingError::EndWithoutSession)?;
        self.committed = self.angle;
        log::debug!("Drag ended at angle {:.2}°, value {}", self.angle, self.value());
        Ok(())
    }

    /// Ends the session after the pointer was lost.
    pub fn cancel_drag(&mut self) -> bool {
        if self.session.take().is_none() {
            return false;
        }
        self.committed = self.angle;
        log::debug!("Drag cancelled at angle {:.2}°", self.angle);
        true
    }

    /// Applies one host event. Only moves yield a value.
    pub fn handle(&mut self, event: DragEvent) -> Result<Option<i32>, SequencingError> {
        match event {
            DragEvent::Start(p) => {
                self.drag_start(p);
                Ok(None)
            }
            DragEvent::Move(p) => self.drag_move(p).map(Some),
            DragEvent::End => self.drag_end().map(|_| None),
        }
    }
}
