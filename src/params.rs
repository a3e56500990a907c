//! Budget constants and the parameter guards shared by every traversal.
//! All budgets are signed; `NO_LIMIT` disables the bound it is passed for.

use crate::errors::HopGraphError;

pub const NO_LIMIT: i64 = -1;

pub const DEFAULT_CAPACITY: i64 = 10_000_000;
pub const DEFAULT_ELEMENTS_LIMIT: i64 = 10_000_000;
pub const DEFAULT_PATHS_LIMIT: i64 = 10;
pub const DEFAULT_LIMIT: i64 = 100;
pub const DEFAULT_DEGREE: i64 = 10_000;
pub const DEFAULT_SKIP_DEGREE: i64 = 100_000;
pub const DEFAULT_SAMPLE: i64 = 100;
pub const DEFAULT_MAX_DEPTH: i32 = 50;
pub const DEFAULT_WEIGHT: f64 = 0.0;

pub fn check_positive(value: i64, name: &str) -> Result<(), HopGraphError> {
    if value > 0 {
        Ok(())
    } else {
        Err(HopGraphError::parameter(format!(
            "the {name} parameter must be > 0, but got {value}"
        )))
    }
}

pub fn check_positive_or_no_limit(value: i64, name: &str) -> Result<(), HopGraphError> {
    if value > 0 || value == NO_LIMIT {
        Ok(())
    } else {
        Err(HopGraphError::parameter(format!(
            "the {name} parameter must be > 0 or == {NO_LIMIT}, but got {value}"
        )))
    }
}

pub fn check_non_negative(value: i64, name: &str) -> Result<(), HopGraphError> {
    if value >= 0 {
        Ok(())
    } else {
        Err(HopGraphError::parameter(format!(
            "the {name} parameter must be >= 0, but got {value}"
        )))
    }
}

pub fn check_non_negative_or_no_limit(value: i64, name: &str) -> Result<(), HopGraphError> {
    if value >= 0 || value == NO_LIMIT {
        Ok(())
    } else {
        Err(HopGraphError::parameter(format!(
            "the {name} parameter must be >= 0 or == {NO_LIMIT}, but got {value}"
        )))
    }
}

pub fn check_degree(degree: i64) -> Result<(), HopGraphError> {
    check_positive_or_no_limit(degree, "max degree")
}

pub fn check_capacity(capacity: i64) -> Result<(), HopGraphError> {
    check_positive_or_no_limit(capacity, "capacity")
}

pub fn check_limit(limit: i64) -> Result<(), HopGraphError> {
    check_positive_or_no_limit(limit, "limit")
}

/// Mid-traversal capacity check: `access` counts every vertex visited so
/// far, the source included.
pub fn check_capacity_for(
    capacity: i64,
    access: i64,
    traversing: &str,
) -> Result<(), HopGraphError> {
    if capacity != NO_LIMIT && access > capacity {
        return Err(HopGraphError::capacity_exceeded(format!(
            "exceeded capacity '{capacity}' while finding {traversing}"
        )));
    }
    Ok(())
}

pub fn check_skip_degree(
    skip_degree: i64,
    degree: i64,
    capacity: i64,
) -> Result<(), HopGraphError> {
    check_non_negative(skip_degree, "skipped degree")?;
    if capacity != NO_LIMIT {
        if degree == NO_LIMIT || degree >= capacity {
            return Err(HopGraphError::parameter(format!(
                "the degree must be < capacity, but got degree '{degree}' and capacity '{capacity}'"
            )));
        }
        if skip_degree >= capacity {
            return Err(HopGraphError::parameter(format!(
                "the skipped degree must be < capacity, but got skipped degree \
                 '{skip_degree}' and capacity '{capacity}'"
            )));
        }
    }
    if skip_degree > 0 && (degree == NO_LIMIT || skip_degree < degree) {
        return Err(HopGraphError::parameter(format!(
            "the skipped degree must be >= degree, but got skipped degree \
             '{skip_degree}' and degree '{degree}'"
        )));
    }
    Ok(())
}
