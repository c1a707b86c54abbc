// Domain layer: the zodiac catalog, content tables, reading model, and ports.

pub mod catalog;
pub mod content;
pub mod model;
pub mod ports;
