//! Well-formedness checks run before a declaration batch is registered

use super::types::{
    ComboProperty, DoubleProperty, IntProperty, MinMaxPropertyLink, PropertyInfo, StringProperty,
};
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashSet;
use std::fmt::Display;
use std::sync::LazyLock;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_.-]*$").expect("identifier pattern"));

static CLI_FLAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--?[A-Za-z0-9][A-Za-z0-9-]*$").expect("cli flag pattern"));

impl PropertyInfo {
    /// Check namespace, key, label and flag syntax
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| Error::invalid(&self.namespace, &self.key, reason);

        if !IDENTIFIER.is_match(&self.namespace) {
            return Err(fail(format!("invalid namespace '{}'", self.namespace)));
        }
        if !IDENTIFIER.is_match(&self.key) {
            return Err(fail(format!("invalid key '{}'", self.key)));
        }
        if self.ui_name.trim().is_empty() {
            return Err(fail("ui name must not be empty".to_string()));
        }
        if let Some(flag) = self.cli_flags.iter().find(|f| !CLI_FLAG.is_match(f)) {
            return Err(fail(format!("invalid cli flag '{flag}'")));
        }

        Ok(())
    }
}

fn check_bounds<T>(info: &PropertyInfo, default: T, min: T, max: T, step: T, zero: T) -> Result<()>
where
    T: PartialOrd + Display + Copy,
{
    let fail = |reason: String| Error::invalid(&info.namespace, &info.key, reason);

    if min > max {
        return Err(fail(format!("min ({min}) is greater than max ({max})")));
    }
    if step <= zero {
        return Err(fail(format!("step must be positive, got {step}")));
    }
    if default < min || default > max {
        return Err(fail(format!(
            "default ({default}) is outside of range {min}..={max}"
        )));
    }

    Ok(())
}

impl IntProperty {
    /// Check `min <= default <= max` and a positive step
    pub fn validate(&self) -> Result<()> {
        self.info.validate()?;
        check_bounds(
            &self.info,
            self.default_value,
            self.min_value,
            self.max_value,
            self.step_value,
            0,
        )
    }
}

impl DoubleProperty {
    /// Same checks as [`IntProperty::validate`], all numbers must also be finite
    pub fn validate(&self) -> Result<()> {
        self.info.validate()?;
        let numbers = [
            self.default_value,
            self.min_value,
            self.max_value,
            self.step_value,
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(Error::invalid(
                &self.info.namespace,
                &self.info.key,
                "numbers must be finite",
            ));
        }
        check_bounds(
            &self.info,
            self.default_value,
            self.min_value,
            self.max_value,
            self.step_value,
            0.0,
        )
    }
}

impl StringProperty {
    pub fn validate(&self) -> Result<()> {
        self.info.validate()
    }
}

impl ComboProperty {
    /// Check for a non-empty list of unique ids containing the default
    pub fn validate(&self) -> Result<()> {
        self.info.validate()?;
        let fail = |reason: String| Error::invalid(&self.info.namespace, &self.info.key, reason);

        if self.options.is_empty() {
            return Err(fail("combo must have at least one option".to_string()));
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if option.id.is_empty() {
                return Err(fail("option id must not be empty".to_string()));
            }
            if !seen.insert(option.id.as_str()) {
                return Err(fail(format!("duplicate option id '{}'", option.id)));
            }
        }

        if !seen.contains(self.default_value.as_str()) {
            return Err(fail(format!(
                "default '{}' is not one of the option ids",
                self.default_value
            )));
        }

        Ok(())
    }
}

impl MinMaxPropertyLink {
    /// Validate both sides and the ordering between them
    pub fn validate(&self) -> Result<()> {
        self.min.validate()?;
        self.max.validate()?;

        let fail = |reason: String| Error::invalid(self.min.namespace(), self.min.key(), reason);

        if self.min.namespace() != self.max.namespace() {
            return Err(fail(format!(
                "linked max '{}' lives in namespace '{}'",
                self.max.key(),
                self.max.namespace()
            )));
        }
        if self.min.key() == self.max.key() {
            return Err(fail("min and max must use different keys".to_string()));
        }
        if self.min.default_value > self.max.default_value {
            return Err(fail(format!(
                "min default ({}) is greater than max default ({})",
                self.min.default_value, self.max.default_value
            )));
        }

        Ok(())
    }
}
