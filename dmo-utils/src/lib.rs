mod crowding;
pub use crowding::*;
mod metrics;
pub use metrics::*;
mod pareto;
pub use pareto::*;
mod sampling;
pub use sampling::*;
