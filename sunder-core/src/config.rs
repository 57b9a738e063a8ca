//! Reusable split configuration
//!
//! [`SplitConfig`] bundles the optional arguments of the text entry points
//! (segment budget, exceed behavior, refinement options). The builder takes
//! raw values, as they arrive from config files or command lines, and
//! validates all of them in [`SplitConfigBuilder::build`]. Deserialized
//! configurations go through the same checks.

use crate::error::{Result, SplitError};
use crate::refine::SplitOptions;
use crate::validate::{validate_count, validate_options, ExceedBehavior};

/// Validated arguments for a text split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSplitConfig"))]
pub struct SplitConfig {
    pub(crate) count: Option<usize>,
    pub(crate) behavior: ExceedBehavior,
    pub(crate) options: SplitOptions,
}

impl SplitConfig {
    /// Create a configuration builder
    pub fn builder() -> SplitConfigBuilder {
        SplitConfigBuilder::default()
    }

    /// Segment budget, `None` when unbounded
    pub fn count(&self) -> Option<usize> {
        self.count
    }

    /// Policy for the final segment when the budget is reached
    pub fn behavior(&self) -> ExceedBehavior {
        self.behavior
    }

    /// Refinement options
    pub fn options(&self) -> SplitOptions {
        self.options
    }
}

/// Unchecked wire form of [`SplitConfig`]
#[cfg(feature = "serde")]
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawSplitConfig {
    count: Option<usize>,
    behavior: ExceedBehavior,
    options: SplitOptions,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSplitConfig> for SplitConfig {
    type Error = SplitError;

    fn try_from(raw: RawSplitConfig) -> Result<Self> {
        Ok(SplitConfig {
            count: raw.count,
            behavior: raw.behavior,
            options: validate_options(raw.options)?,
        })
    }
}

/// Fluent builder for [`SplitConfig`]
#[derive(Debug, Default)]
pub struct SplitConfigBuilder {
    count: Option<isize>,
    behavior: Option<i32>,
    options: u32,
}

impl SplitConfigBuilder {
    /// Create a new builder (unbounded, append, no refinement)
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of segments; negative values fail in `build`
    pub fn count(mut self, count: isize) -> Self {
        self.count = Some(count);
        self
    }

    /// Remove any segment cap
    pub fn unbounded(mut self) -> Self {
        self.count = None;
        self
    }

    /// Set the exceed behavior
    pub fn behavior(mut self, behavior: ExceedBehavior) -> Self {
        self.behavior = Some(behavior.into());
        self
    }

    /// Set the exceed behavior from its raw integral value
    pub fn behavior_raw(mut self, value: i32) -> Self {
        self.behavior = Some(value);
        self
    }

    /// Enable or disable whitespace trimming
    pub fn trim_entries(mut self, enabled: bool) -> Self {
        self.set_flag(SplitOptions::TRIM_ENTRIES, enabled);
        self
    }

    /// Enable or disable empty-segment removal
    pub fn remove_empty_entries(mut self, enabled: bool) -> Self {
        self.set_flag(SplitOptions::REMOVE_EMPTY_ENTRIES, enabled);
        self
    }

    /// Replace the options with raw bits; undefined bits fail in `build`
    pub fn options_raw(mut self, bits: u32) -> Self {
        self.options = bits;
        self
    }

    fn set_flag(&mut self, flag: SplitOptions, enabled: bool) {
        if enabled {
            self.options |= flag.bits();
        } else {
            self.options &= !flag.bits();
        }
    }

    /// Validate every argument and build the configuration
    pub fn build(self) -> Result<SplitConfig> {
        let count = self.count.map(validate_count).transpose()?;
        let behavior = match self.behavior {
            Some(raw) => ExceedBehavior::from_raw(raw)?,
            None => ExceedBehavior::default(),
        };
        let options = SplitOptions::from_raw(self.options)?;

        Ok(SplitConfig {
            count,
            behavior,
            options,
        })
    }
}

impl TryFrom<SplitConfigBuilder> for SplitConfig {
    type Error = SplitError;

    fn try_from(builder: SplitConfigBuilder) -> Result<Self> {
        builder.build()
    }
}
