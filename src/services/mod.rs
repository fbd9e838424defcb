pub mod cards;
pub mod configurator;
pub mod participants;
pub mod results;
