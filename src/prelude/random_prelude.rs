pub use crate::random::{
    ConstantParameter, DiscreteParameter, NormalParameter, ParameterSampler, UniformParameter,
};
