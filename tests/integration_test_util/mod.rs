// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

use pretty_assertions::assert_eq;

use nanodur::{Duration, ErrorKind};

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_parse_ok(input: &str, expected: i64) {
    assert_eq!(
        input.parse::<Duration>().unwrap(),
        Duration::from_nanos(expected)
    );
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_parse_ok {
    ($name:ident, $($case_name:ident, $input:expr, $expected:expr;)*) => {
        // Put the test function in a new module to avoid "use" statements polluting the caller's
        // namespace
        mod $name {
            use rstest::rstest;
            #[rstest]
            $(#[case::$case_name($input, $expected)])*
            fn test_parse_ok(#[case] input: &str, #[case] expected: i64) {
                $crate::integration_test_util::test_parse_ok(input, expected);
            }
        }
    }
}
#[allow(unused_imports)]
pub(crate) use test_simple_parse_ok;

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_parse_err(input: &str, kind: ErrorKind) {
    let err = input.parse::<Duration>().unwrap_err();
    assert_eq!(err.kind(), kind);
    assert_eq!(err.input(), input);
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_parse_err {
    ($name:ident, $($case_name:ident, $input:expr, $expected:ident;)*) => {
        // Put the test function in a new module to avoid "use" statements polluting the caller's
        // namespace
        mod $name {
            use nanodur::ErrorKind;
            use rstest::rstest;
            #[rstest]
            $(#[case::$case_name($input, ErrorKind::$expected)])*
            fn test_parse_err(#[case] input: &str, #[case] expected: ErrorKind) {
                $crate::integration_test_util::test_parse_err(input, expected);
            }
        }
    }
}
#[allow(unused_imports)]
pub(crate) use test_simple_parse_err;

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_format(nanos: i64, expected: &str) {
    assert_eq!(Duration::from_nanos(nanos).to_string(), expected);
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_format {
    ($name:ident, $($case_name:ident, $nanos:expr, $expected:expr;)*) => {
        // Put the test function in a new module to avoid "use" statements polluting the caller's
        // namespace
        mod $name {
            use rstest::rstest;
            #[rstest]
            $(#[case::$case_name($nanos, $expected)])*
            fn test_format(#[case] nanos: i64, #[case] expected: &str) {
                $crate::integration_test_util::test_format(nanos, expected);
            }
        }
    }
}
#[allow(unused_imports)]
pub(crate) use test_simple_format;
