//! Shot boundaries produced by the external detector.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One detected shot. Immutable once received from the detector.
///
/// Wire name for the id is `shot`, matching the detector response schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Shot {
    #[serde(rename = "shot")]
    pub id: u32,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Shot {
    pub fn new(id: u32, start: f64, end: f64) -> Self {
        Self { id, start, end }
    }

    /// Shot length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Midpoint timestamp, where the representative keyframe is taken.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Validation failure for a detector shot list.
#[derive(Debug, Error, PartialEq)]
pub enum ShotValidationError {
    #[error("Shot {id} has non-positive duration ({start} >= {end})")]
    EmptyShot { id: u32, start: f64, end: f64 },

    #[error("Shot {id} starts before the preceding shot ({start} < {previous})")]
    OutOfOrder { id: u32, start: f64, previous: f64 },
}

/// Validate a detector shot list: every `end > start`, ordered by
/// ascending `start`. An empty list is valid.
pub fn validate_shots(shots: &[Shot]) -> Result<(), ShotValidationError> {
    let mut previous_start = f64::NEG_INFINITY;

    for shot in shots {
        if shot.end <= shot.start {
            return Err(ShotValidationError::EmptyShot {
                id: shot.id,
                start: shot.start,
                end: shot.end,
            });
        }
        if shot.start < previous_start {
            return Err(ShotValidationError::OutOfOrder {
                id: shot.id,
                start: shot.start,
                previous: previous_start,
            });
        }
        previous_start = shot.start;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shot_duration_and_midpoint() {
        let shot = Shot::new(1, 2.0, 5.0);
        assert!((shot.duration() - 3.0).abs() < f64::EPSILON);
        assert!((shot.midpoint() - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shot_wire_name() {
        let shot: Shot = serde_json::from_str(r#"{"shot": 3, "start": 1.0, "end": 2.5}"#).unwrap();
        assert_eq!(shot.id, 3);

        let json = serde_json::to_value(shot).unwrap();
        assert_eq!(json["shot"], 3);
    }

    #[test]
    fn test_validate_ordered_shots() {
        let shots = vec![
            Shot::new(0, 0.0, 1.2),
            Shot::new(1, 1.2, 4.0),
            Shot::new(2, 4.0, 6.5),
        ];
        assert!(validate_shots(&shots).is_ok());
        assert!(validate_shots(&[]).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_shot() {
        let shots = vec![Shot::new(0, 2.0, 2.0)];
        assert!(matches!(
            validate_shots(&shots),
            Err(ShotValidationError::EmptyShot { id: 0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_order() {
        let shots = vec![Shot::new(0, 5.0, 6.0), Shot::new(1, 1.0, 2.0)];
        assert!(matches!(
            validate_shots(&shots),
            Err(ShotValidationError::OutOfOrder { id: 1, .. })
        ));
    }
}
