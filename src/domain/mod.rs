// Domain layer: speaker models, registration outcomes and the repository port.
// Depends only on std, serde, chrono and thiserror.

pub mod model;
pub mod ports;
