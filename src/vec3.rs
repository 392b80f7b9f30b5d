use crate::common::{random_f64, random_f64_range};
use rand::RngCore;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub fn near_zero(&self) -> bool {
        let s = 1e-8;
        self.x.abs() < s && self.y.abs() < s && self.z.abs() < s
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Unit vector in the same direction. Normalizing a zero vector is a
    /// caller bug; debug builds trap it, release builds yield NaN components.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        debug_assert!(len > 0.0, "normalized() called on a zero-length vector");
        *self / len
    }

    pub fn random(rng: &mut dyn RngCore) -> Self {
        Self {
            x: random_f64(rng),
            y: random_f64(rng),
            z: random_f64(rng),
        }
    }

    pub fn random_interval(rng: &mut dyn RngCore, min: f64, max: f64) -> Self {
        Self {
            x: random_f64_range(rng, min, max),
            y: random_f64_range(rng, min, max),
            z: random_f64_range(rng, min, max),
        }
    }

    /// Uniform point strictly inside the unit ball (rejection sampling).
    pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Self {
        loop {
            let p = Self::random_interval(rng, -1.0, 1.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    pub fn random_unit_vector(rng: &mut dyn RngCore) -> Self {
        loop {
            let p = Self::random_in_unit_sphere(rng);
            // too short to normalize reliably
            if p.length_squared() > 1e-160 {
                return p.normalized();
            }
        }
    }

    /// Uniform point inside the unit disk on the z = 0 plane.
    pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Self {
        loop {
            let p = Vec3::new(
                random_f64_range(rng, -1.0, 1.0),
                random_f64_range(rng, -1.0, 1.0),
                0.0,
            );
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Mirror `v` about the plane with unit normal `n`.
    pub fn reflect(v: &Self, n: &Self) -> Self {
        *v - 2.0 * v.dot(*n) * *n
    }

    /// Snell refraction of the unit vector `uv` through a surface with unit
    /// normal `n` (facing against `uv`).
    pub fn refract(uv: &Self, n: &Self, etai_over_etat: f64) -> Self {
        let cos_theta = (-*uv).dot(*n).min(1.0);
        let r_out_perp = etai_over_etat * (*uv + cos_theta * *n);
        let r_out_parallel = -((1.0 - r_out_perp.length_squared()).abs().sqrt()) * *n;
        r_out_perp + r_out_parallel
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Self {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Self::Output {
        vec * self
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        self * (1.0 / scalar)
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, scalar: f64) {
        *self *= 1.0 / scalar;
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

pub type Point3 = Vec3;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPS: f64 = 1e-12;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_dot_and_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_near_zero() {
        assert!(Vec3::new(1e-9, -1e-9, 0.0).near_zero());
        assert!(!Vec3::new(1e-9, 1e-7, 0.0).near_zero());
    }

    #[test]
    fn test_reflect_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let v = Vec3::random_interval(&mut rng, -5.0, 5.0);
            let n = Vec3::random_unit_vector(&mut rng);
            let twice = Vec3::reflect(&Vec3::reflect(&v, &n), &n);
            assert!((twice - v).length() < 1e-9, "{twice} != {v}");
        }
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        assert!(approx_eq(Vec3::reflect(&v, &n), Vec3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn test_refract_straight_through() {
        let uv = Vec3::new(0.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r = Vec3::refract(&uv, &n, 1.0 / 1.5);
        assert!(approx_eq(r, uv));
    }

    #[test]
    fn test_refract_same_medium_keeps_direction() {
        let uv = Vec3::new(1.0, -1.0, 0.0).normalized();
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r = Vec3::refract(&uv, &n, 1.0);
        assert!((r - uv).length() < 1e-9);
    }

    #[test]
    fn test_random_samplers_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            assert!(Vec3::random_in_unit_sphere(&mut rng).length_squared() < 1.0);
            assert!((Vec3::random_unit_vector(&mut rng).length() - 1.0).abs() < 1e-9);
            let d = Vec3::random_in_unit_disk(&mut rng);
            assert!(d.length_squared() < 1.0);
            assert_eq!(d.z, 0.0);
        }
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_normalizing_zero_panics_in_debug() {
        let _ = Vec3::zero().normalized();
    }
}
