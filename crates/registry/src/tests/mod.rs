//! Registry scenarios spanning families, submissions and properties.

mod families;
mod factories;
