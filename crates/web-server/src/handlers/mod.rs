//! One handler group per entity. Each handler is a thin adapter: it parses
//! the request, validates the payload, calls the repository, and wraps the
//! result in the response envelope or an error status.

pub mod courses;
pub mod staff;
pub mod statistics;
pub mod students;
