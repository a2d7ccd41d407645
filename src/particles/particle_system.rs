use crate::math::{Point, Real, Vector};
use crate::particles::{Particle, ParticleParameters};
use alloc::vec::Vec;
use oorandom::Rand32;

/// The seed used by [`ParticleSystem::new`].
const DEFAULT_SEED: u64 = 0x5eed;

/// Configuration of a particle emitter.
///
/// Every `*_variance` field is the half-width of a uniform random offset applied to the
/// matching base value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ParticleSystemParameters {
    /// Number of particles emitted at construction (within `max_particles`).
    pub initial_particles: u32,
    /// How many times per second `max_particles` is decremented.
    pub total_particle_decrease_per_second: u32,
    /// The maximum number of live particles.
    pub max_particles: u32,
    /// The emitter position.
    pub position: Point<Real>,
    /// Base particle life time, in seconds.
    pub life_time: Real,
    /// Variance of the particle life time.
    pub life_time_variance: Real,
    /// Base delay between two emissions, in seconds.
    pub birth_time: Real,
    /// Variance of the emission delay.
    pub birth_time_variance: Real,
    /// Base emission direction.
    pub direction: Vector<Real>,
    /// Variance of each component of the emission direction.
    pub direction_variance: Real,
    /// Base emission speed.
    pub speed: Real,
    /// Variance of the emission speed.
    pub speed_variance: Real,
    /// Base RGBA colour. The alpha channel is never randomized.
    pub colour: [u8; 4],
    /// Variance of the red, green and blue channels.
    pub colour_variance: u8,
    /// Base particle mass. Defaults to `1.0`.
    pub mass: Real,
    /// Variance of the particle mass.
    pub mass_variance: Real,
    /// The gravitational acceleration applied to the particles.
    pub gravity: Vector<Real>,
    /// The coefficient of air resistance of the particles.
    pub air_resistance: Real,
}

impl Default for ParticleSystemParameters {
    fn default() -> Self {
        ParticleSystemParameters {
            initial_particles: 0,
            total_particle_decrease_per_second: 1,
            max_particles: 0,
            position: Point::origin(),
            life_time: 0.0,
            life_time_variance: 0.0,
            birth_time: 0.0,
            birth_time_variance: 0.0,
            direction: Vector::zeros(),
            direction_variance: 0.0,
            speed: 0.0,
            speed_variance: 0.0,
            colour: [0; 4],
            colour_variance: 0,
            mass: 1.0,
            mass_variance: 0.0,
            gravity: Vector::zeros(),
            air_resistance: 0.0,
        }
    }
}

/// An emitter of randomized particles.
///
/// At every update:
/// 1. every `1 / total_particle_decrease_per_second` seconds, the particle cap is decremented;
/// 2. when the emission timer expires, a particle is emitted (if under the cap) and the timer
///    is reset to `birth_time ± birth_time_variance`;
/// 3. live particles are advanced, and the first dead particle found is removed.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    params: ParticleSystemParameters,
    particles: Vec<Particle>,
    time_to_birth: Real,
    time_until_next_max_decrease: Real,
    time_between_max_decreases: Real,
    rng: Rand32,
}

impl ParticleSystem {
    /// Creates a particle system with a fixed seed.
    pub fn new(params: ParticleSystemParameters) -> Self {
        Self::with_seed(params, DEFAULT_SEED)
    }

    /// Creates a particle system whose randomness is driven by `seed`.
    pub fn with_seed(params: ParticleSystemParameters, seed: u64) -> Self {
        let time_between_max_decreases = 1.0 / params.total_particle_decrease_per_second as Real;
        let mut result = ParticleSystem {
            params,
            particles: Vec::new(),
            time_to_birth: 0.0,
            time_until_next_max_decrease: time_between_max_decreases,
            time_between_max_decreases,
            rng: Rand32::new(seed),
        };

        for _ in 0..params.initial_particles {
            result.emit();
        }

        result
    }

    /// The live (or not yet removed) particles.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The current parameters. `max_particles` decreases over time.
    #[inline]
    pub fn parameters(&self) -> &ParticleSystemParameters {
        &self.params
    }

    /// Advances this particle system by `dt`.
    pub fn update(&mut self, dt: Real) {
        self.time_until_next_max_decrease -= dt;
        if self.time_until_next_max_decrease < 0.0 {
            self.time_until_next_max_decrease = self.time_between_max_decreases;
            self.params.max_particles = self.params.max_particles.saturating_sub(1);
        }

        self.time_to_birth -= dt;
        if self.time_to_birth < 0.0 {
            self.emit();
            self.time_to_birth =
                self.params.birth_time + self.random_unit() * self.params.birth_time_variance;
        }

        if let Some(dead) = self.particles.iter().position(|p| !p.is_alive()) {
            for p in &mut self.particles[..dead] {
                p.update(dt);
            }
            let _ = self.particles.remove(dead);
        } else {
            for p in &mut self.particles {
                p.update(dt);
            }
        }
    }

    fn emit(&mut self) {
        if self.particles.len() >= self.params.max_particles as usize {
            return;
        }

        let speed = self.params.speed + self.random_unit() * self.params.speed_variance;
        let jitter = Vector::new(
            self.random_unit(),
            self.random_unit(),
            self.random_unit(),
        ) * self.params.direction_variance;
        let direction = (self.params.direction + jitter)
            .try_normalize(Real::EPSILON)
            .unwrap_or_else(Vector::zeros);
        let [r, g, b, a] = self.params.colour;
        let colour = [
            self.random_channel(r),
            self.random_channel(g),
            self.random_channel(b),
            a,
        ];
        let life_time = self.params.life_time + self.random_unit() * self.params.life_time_variance;
        let mass = self.params.mass + self.random_unit() * self.params.mass_variance;

        self.particles.push(Particle::new(&ParticleParameters {
            initial_position: self.params.position,
            velocity: direction * speed,
            colour,
            life_time,
            mass,
            gravity: self.params.gravity,
            air_resistance: self.params.air_resistance,
        }));
    }

    // Uniform in [-1, 1).
    fn random_unit(&mut self) -> Real {
        self.rng.rand_float() * 2.0 - 1.0
    }

    // Uniform in [base - variance, base + variance), clamped to a colour channel.
    fn random_channel(&mut self, base: u8) -> u8 {
        let variance = self.params.colour_variance;
        if variance == 0 {
            return base;
        }

        let lo = base as i32 - variance as i32;
        let value = lo + self.rng.rand_range(0..2 * variance as u32) as i32;
        value.clamp(0, 255) as u8
    }
}
