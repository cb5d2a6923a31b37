//! Committed `voltwire-codegen` output for the covering test schemas.
//!
//! These modules are checked-in generator output: `sample` covers the
//! proto3-style schema (implicit presence, packed repeated fields, maps,
//! oneofs, nesting, groups, pooling), `editions` covers the
//! edition-2023-style presence pairs. The behavioral test suite and the
//! benches run against these types.
pub mod editions;
pub mod sample;
