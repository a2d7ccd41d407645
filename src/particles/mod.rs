//! Cosmetic particle systems stepped alongside the rigid bodies.
//!
//! Particles do not collide with anything.

pub use self::particle::{Particle, ParticleParameters};
pub use self::particle_system::{ParticleSystem, ParticleSystemParameters};

mod particle;
mod particle_system;
