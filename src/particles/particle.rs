use crate::math::{Point, Real, Vector};

/// The initial state of a particle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ParticleParameters {
    /// Where the particle is born.
    pub initial_position: Point<Real>,
    /// The initial velocity.
    pub velocity: Vector<Real>,
    /// RGBA colour.
    pub colour: [u8; 4],
    /// How long the particle lives, in seconds.
    pub life_time: Real,
    /// The mass of the particle.
    pub mass: Real,
    /// The gravitational acceleration.
    pub gravity: Vector<Real>,
    /// The coefficient of air resistance.
    pub air_resistance: Real,
}

impl Default for ParticleParameters {
    fn default() -> Self {
        ParticleParameters {
            initial_position: Point::origin(),
            velocity: Vector::zeros(),
            colour: [0; 4],
            life_time: 0.0,
            mass: 1.0,
            gravity: Vector::zeros(),
            air_resistance: 0.0,
        }
    }
}

/// A point mass integrated with forward Euler.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Particle {
    position: Point<Real>,
    velocity: Vector<Real>,
    colour: [u8; 4],
    time_to_death: Real,
    mass: Real,
    gravity: Vector<Real>,
    air_resistance: Real,
}

impl Particle {
    /// Creates a particle from its initial state.
    pub fn new(params: &ParticleParameters) -> Self {
        Particle {
            position: params.initial_position,
            velocity: params.velocity,
            colour: params.colour,
            time_to_death: params.life_time,
            mass: params.mass,
            gravity: params.gravity,
            air_resistance: params.air_resistance,
        }
    }

    /// The particle position.
    #[inline]
    pub fn position(&self) -> Point<Real> {
        self.position
    }

    /// The particle velocity.
    #[inline]
    pub fn velocity(&self) -> Vector<Real> {
        self.velocity
    }

    /// The particle RGBA colour.
    #[inline]
    pub fn colour(&self) -> [u8; 4] {
        self.colour
    }

    /// The remaining life time. The particle is dead once it is not positive.
    #[inline]
    pub fn time_to_death(&self) -> Real {
        self.time_to_death
    }

    /// Is this particle still alive?
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.time_to_death > 0.0
    }

    /// Advances this particle by `dt`.
    pub fn update(&mut self, dt: Real) {
        self.time_to_death -= dt;
        let force = -self.velocity * self.air_resistance + self.gravity * self.mass;
        self.velocity += force * (dt / self.mass);
        self.position += self.velocity * dt;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn particle_falls_and_ages() {
        let mut p = Particle::new(&ParticleParameters {
            velocity: Vector::x(),
            life_time: 1.0,
            gravity: Vector::new(0.0, -10.0, 0.0),
            ..Default::default()
        });

        p.update(0.1);
        assert_relative_eq!(p.velocity(), Vector::new(1.0, -1.0, 0.0), epsilon = 1.0e-6);
        assert_relative_eq!(p.position(), Point::new(0.1, -0.1, 0.0), epsilon = 1.0e-6);
        assert_relative_eq!(p.time_to_death(), 0.9, epsilon = 1.0e-6);
        assert!(p.is_alive());
    }

    #[test]
    fn air_resistance_slows_down() {
        let mut p = Particle::new(&ParticleParameters {
            velocity: Vector::x() * 2.0,
            life_time: 1.0,
            mass: 2.0,
            air_resistance: 1.0,
            ..Default::default()
        });

        p.update(0.5);
        assert_relative_eq!(p.velocity(), Vector::x() * 1.5, epsilon = 1.0e-6);
    }
}
