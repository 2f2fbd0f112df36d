// Domain layer - timeline model and interval arithmetic

pub mod model;
pub mod rules;
