// Adapters layer: concrete implementations of the domain ports.

pub mod ecs;

pub use ecs::EcsDeployer;
