//! Pipeline core: the operator contract, the operator set, parameter
//! grammars, fill resolution, and preset recipes.
pub mod fill;
pub mod operator;
pub mod ops;
pub mod params;
pub mod pipeline;
pub mod recipes;
