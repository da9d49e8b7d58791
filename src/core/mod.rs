// Core helpers shared by the engine modules

pub mod math;
