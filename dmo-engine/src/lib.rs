mod nsga2;
pub use nsga2::*;
mod operators;
pub use operators::*;
