// Domain layer: the person model. No dependencies beyond std/serde.

pub mod model;
