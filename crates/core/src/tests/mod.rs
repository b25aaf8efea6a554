#![allow(clippy::expect_used, clippy::unwrap_used)]

mod helpers;
mod pricing_tests;
