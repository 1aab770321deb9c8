//! Result type for best-effort stage outputs.

/// Outcome of a stage that degrades instead of failing.
///
/// Some collaborators (vision labeling, rhythm analysis) must never abort
/// the pipeline: when they fail they hand back a documented default. This
/// type keeps that provenance explicit so the assembler can branch on
/// "was this value trustworthy" without ad hoc flags. It is never
/// serialized; emitted artifacts carry only the resolved value.
#[derive(Debug, Clone, PartialEq)]
pub enum Degradable<T> {
    /// The collaborator answered normally.
    Ok(T),
    /// The collaborator failed; `value` is the documented default.
    Degraded { value: T, reason: String },
}

impl<T> Degradable<T> {
    /// Wrap a default value with the failure reason that produced it.
    pub fn degraded(value: T, reason: impl Into<String>) -> Self {
        Self::Degraded {
            value,
            reason: reason.into(),
        }
    }

    /// Borrow the carried value regardless of provenance.
    pub fn value(&self) -> &T {
        match self {
            Self::Ok(v) => v,
            Self::Degraded { value, .. } => value,
        }
    }

    /// Consume into the carried value regardless of provenance.
    pub fn into_value(self) -> T {
        match self {
            Self::Ok(v) => v,
            Self::Degraded { value, .. } => value,
        }
    }

    /// True when the value is a fallback default rather than a real answer.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// The failure reason, when degraded.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Degraded { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_value() {
        let d = Degradable::Ok(7);
        assert_eq!(*d.value(), 7);
        assert!(!d.is_degraded());
        assert!(d.reason().is_none());
    }

    #[test]
    fn test_degraded_value() {
        let d = Degradable::degraded(0, "probe failed");
        assert_eq!(*d.value(), 0);
        assert!(d.is_degraded());
        assert_eq!(d.reason(), Some("probe failed"));
        assert_eq!(d.into_value(), 0);
    }
}
