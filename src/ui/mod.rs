//! Screen state controllers exposed to the view layer.

pub mod flow;
pub mod movies;
