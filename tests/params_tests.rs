use hopgraph::params::{
    check_capacity, check_capacity_for, check_degree, check_limit, check_non_negative,
    check_non_negative_or_no_limit, check_positive, check_positive_or_no_limit,
    check_skip_degree, DEFAULT_CAPACITY, DEFAULT_DEGREE, DEFAULT_LIMIT, DEFAULT_MAX_DEPTH,
    DEFAULT_SKIP_DEGREE, NO_LIMIT,
};
use hopgraph::HopGraphError;

fn is_parameter(result: Result<(), HopGraphError>) -> bool {
    matches!(result, Err(HopGraphError::Parameter(_)))
}

#[test]
fn test_check_positive() {
    assert!(check_positive(1, "depth").is_ok());
    assert!(is_parameter(check_positive(0, "depth")));
    assert!(is_parameter(check_positive(-1, "depth")));
}

#[test]
fn test_check_positive_or_no_limit() {
    assert!(check_positive_or_no_limit(5, "limit").is_ok());
    assert!(check_positive_or_no_limit(NO_LIMIT, "limit").is_ok());
    assert!(is_parameter(check_positive_or_no_limit(0, "limit")));
    assert!(is_parameter(check_positive_or_no_limit(-2, "limit")));
}

#[test]
fn test_check_non_negative() {
    assert!(check_non_negative(0, "skip").is_ok());
    assert!(is_parameter(check_non_negative(-1, "skip")));
}

#[test]
fn test_check_non_negative_or_no_limit() {
    assert!(check_non_negative_or_no_limit(0, "offset").is_ok());
    assert!(check_non_negative_or_no_limit(NO_LIMIT, "offset").is_ok());
    assert!(is_parameter(check_non_negative_or_no_limit(-2, "offset")));
}

#[test]
fn test_budget_guards_accept_defaults() {
    assert!(check_degree(DEFAULT_DEGREE).is_ok());
    assert!(check_capacity(DEFAULT_CAPACITY).is_ok());
    assert!(check_limit(DEFAULT_LIMIT).is_ok());
    assert!(check_positive(i64::from(DEFAULT_MAX_DEPTH), "depth").is_ok());
    assert!(check_skip_degree(DEFAULT_SKIP_DEGREE, DEFAULT_DEGREE, DEFAULT_CAPACITY).is_ok());
}

#[test]
fn test_parameter_error_names_the_offender() {
    let err = check_degree(0).expect_err("zero degree");
    let message = err.to_string();
    assert!(message.contains("max degree"));
    assert!(message.contains('0'));
}

#[test]
fn test_check_capacity_for() {
    assert!(check_capacity_for(NO_LIMIT, 1_000_000, "rings").is_ok());
    assert!(check_capacity_for(10, 10, "rings").is_ok());
    let err = check_capacity_for(10, 11, "rings").expect_err("overrun");
    assert!(matches!(err, HopGraphError::CapacityExceeded(_)));
}

#[test]
fn test_check_skip_degree_disabled() {
    assert!(check_skip_degree(0, NO_LIMIT, NO_LIMIT).is_ok());
    assert!(check_skip_degree(0, 10, NO_LIMIT).is_ok());
}

#[test]
fn test_check_skip_degree_requires_finite_degree() {
    assert!(is_parameter(check_skip_degree(100, NO_LIMIT, NO_LIMIT)));
}

#[test]
fn test_check_skip_degree_must_cover_degree() {
    assert!(check_skip_degree(10, 10, NO_LIMIT).is_ok());
    assert!(is_parameter(check_skip_degree(9, 10, NO_LIMIT)));
}

#[test]
fn test_check_skip_degree_against_capacity() {
    assert!(check_skip_degree(20, 10, 100).is_ok());
    // degree must stay below a finite capacity
    assert!(is_parameter(check_skip_degree(20, 100, 100)));
    assert!(is_parameter(check_skip_degree(20, NO_LIMIT, 100)));
    // skip degree must stay below a finite capacity
    assert!(is_parameter(check_skip_degree(100, 10, 100)));
    assert!(is_parameter(check_skip_degree(-1, 10, NO_LIMIT)));
}
