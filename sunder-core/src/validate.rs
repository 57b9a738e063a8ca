//! Argument validation performed before a cursor is handed out

use crate::error::{Result, SplitError};
use crate::refine::SplitOptions;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// Policy for the final segment once the segment budget is reached
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExceedBehavior {
    /// The last segment absorbs everything left, delimiters included
    #[default]
    AppendRemaining = 0,
    /// The last segment stops at the next delimiter; the rest is dropped
    CutRemaining = 1,
}

impl ExceedBehavior {
    /// Names of all defined members, as reported in validation errors
    pub const VALID_NAMES: &'static str = "AppendRemaining, CutRemaining";

    /// Convert a raw integral value, rejecting undefined members
    pub fn from_raw(value: i32) -> Result<Self> {
        Self::try_from_primitive(value).map_err(|_| {
            log::debug!("rejecting undefined exceed behavior {value}");
            SplitError::InvalidExceedBehavior {
                value,
                valid: Self::VALID_NAMES,
            }
        })
    }

    /// Member name
    pub fn name(self) -> &'static str {
        match self {
            ExceedBehavior::AppendRemaining => "AppendRemaining",
            ExceedBehavior::CutRemaining => "CutRemaining",
        }
    }
}

impl fmt::Display for ExceedBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check a segment budget, returning it as an unsigned count
pub fn validate_count(count: isize) -> Result<usize> {
    usize::try_from(count).map_err(|_| {
        log::debug!("rejecting negative segment count {count}");
        SplitError::NegativeCount { count }
    })
}

/// Check that `options` carries no bits outside the defined flags
pub fn validate_options(options: SplitOptions) -> Result<SplitOptions> {
    let unknown = options.bits() & !SplitOptions::all().bits();
    if unknown != 0 {
        log::debug!("rejecting split options with undefined bits {unknown:#b}");
        return Err(SplitError::InvalidOptions { bits: unknown });
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_accepts_zero_and_positive() {
        assert_eq!(validate_count(0), Ok(0));
        assert_eq!(validate_count(42), Ok(42));
    }

    #[test]
    fn test_count_rejects_negative() {
        assert_eq!(
            validate_count(-1),
            Err(SplitError::NegativeCount { count: -1 })
        );
        assert!(validate_count(isize::MIN).is_err());
    }

    #[test]
    fn test_behavior_from_raw() {
        assert_eq!(ExceedBehavior::from_raw(0), Ok(ExceedBehavior::AppendRemaining));
        assert_eq!(ExceedBehavior::from_raw(1), Ok(ExceedBehavior::CutRemaining));
    }

    #[test]
    fn test_behavior_rejects_undefined_values() {
        for raw in [-1, 2, i32::MAX] {
            let error = ExceedBehavior::from_raw(raw).unwrap_err();
            assert_eq!(
                error,
                SplitError::InvalidExceedBehavior {
                    value: raw,
                    valid: "AppendRemaining, CutRemaining",
                }
            );
        }
    }

    #[test]
    fn test_behavior_default_and_display() {
        assert_eq!(ExceedBehavior::default(), ExceedBehavior::AppendRemaining);
        assert_eq!(ExceedBehavior::CutRemaining.to_string(), "CutRemaining");
        assert_eq!(i32::from(ExceedBehavior::CutRemaining), 1);
    }

    #[test]
    fn test_options_validation() {
        assert!(validate_options(SplitOptions::empty()).is_ok());
        assert!(validate_options(SplitOptions::all()).is_ok());

        let rogue = SplitOptions::from_bits_retain(0b1001);
        assert_eq!(
            validate_options(rogue),
            Err(SplitError::InvalidOptions { bits: 0b1000 })
        );
    }
}
