// Adapters layer: concrete implementations of the domain ports against
// external systems.

pub mod http;
