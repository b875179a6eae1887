use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use cgmath::Vector3;

use crate::error::{Error, Result};
use crate::geom::Transform;

/// The local axis of the instanced mesh that points "up" in its authoring
/// convention. Instances are rotated so that this axis follows the surface normal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UpAxis {
    X,
    Y,
    Z
}

impl UpAxis {
    /// Fixed rotation applied to each placement before jitter.
    pub fn pre_rotation(&self) -> Transform {
        match *self {
            UpAxis::X => Transform::from_axis_angle(Vector3::unit_z(), -PI * 0.5),
            UpAxis::Y => Transform::identity(),
            UpAxis::Z => Transform::from_axis_angle(Vector3::unit_x(), -PI * 0.5)
        }
    }
}

impl Default for UpAxis {
    fn default() -> UpAxis {
        UpAxis::Y
    }
}

impl FromStr for UpAxis {
    type Err = String;

    fn from_str(s: &str) -> ::std::result::Result<UpAxis, String> {
        match s.to_ascii_lowercase().as_str() {
            "x" | "0" => Ok(UpAxis::X),
            "y" | "1" => Ok(UpAxis::Y),
            "z" | "2" => Ok(UpAxis::Z),
            other => Err(format!("Expected up axis x, y or z, got {:?}", other))
        }
    }
}

impl fmt::Display for UpAxis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            UpAxis::X => "x",
            UpAxis::Y => "y",
            UpAxis::Z => "z"
        };
        write!(f, "{}", name)
    }
}

/// Parameters of one scattering run.
///
/// Set up with the consuming builder methods:
///
/// ```
/// use scatter::{ScatterConfig, UpAxis};
///
/// let config = ScatterConfig::new()
///     .up_axis(UpAxis::Z)
///     .random_rotation(1.0)
///     .random_tilt(0.05)
///     .scale(0.5)
///     .random_scale(0.1)
///     .amount(1000);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScatterConfig {
    pub up_axis: UpAxis,
    /// Fraction of a half turn of jitter around the y axis of the placed
    /// basis, 0..1. That axis is the surface normal only for `UpAxis::Y`.
    /// With `UpAxis::Z` it is the first triangle edge, with `UpAxis::X` the
    /// tangent perpendicular to it.
    pub random_rotation: f32,
    /// Fraction of a half turn of jitter around the z and x axes of the placed basis, 0..1
    pub random_tilt: f32,
    /// Scale varies by up to this much around `scale`
    pub random_scale: f32,
    pub scale: f32,
    pub amount: usize
}

impl Default for ScatterConfig {
    fn default() -> ScatterConfig {
        ScatterConfig::new()
    }
}

impl ScatterConfig {
    /// Unjittered, unscaled and empty.
    pub fn new() -> ScatterConfig {
        ScatterConfig {
            up_axis: UpAxis::Y,
            random_rotation: 0.0,
            random_tilt: 0.0,
            random_scale: 0.0,
            scale: 1.0,
            amount: 0
        }
    }

    pub fn up_axis(mut self, up_axis: UpAxis) -> ScatterConfig {
        self.up_axis = up_axis;
        self
    }

    pub fn random_rotation(mut self, random_rotation: f32) -> ScatterConfig {
        self.random_rotation = random_rotation;
        self
    }

    pub fn random_tilt(mut self, random_tilt: f32) -> ScatterConfig {
        self.random_tilt = random_tilt;
        self
    }

    pub fn random_scale(mut self, random_scale: f32) -> ScatterConfig {
        self.random_scale = random_scale;
        self
    }

    pub fn scale(mut self, scale: f32) -> ScatterConfig {
        self.scale = scale;
        self
    }

    pub fn amount(mut self, amount: usize) -> ScatterConfig {
        self.amount = amount;
        self
    }

    /// Checks that jitter ranges are within their documented bounds.
    pub fn validate(&self) -> Result<()> {
        check_range("random_rotation", self.random_rotation, 0.0, 1.0)?;
        check_range("random_tilt", self.random_tilt, 0.0, 1.0)?;
        check_range("random_scale", self.random_scale, 0.0, ::std::f32::INFINITY)?;

        if !self.scale.is_finite() {
            return Err(Error::InvalidParameter { name: "scale", value: self.scale });
        }

        Ok(())
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<()> {
    // also rejects NaN
    if value >= min && value <= max && !value.is_infinite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cgmath::InnerSpace;

    #[test]
    fn default_is_valid() {
        assert!(ScatterConfig::default().validate().is_ok());
        assert_eq!(ScatterConfig::default().amount, 0);
        assert_eq!(ScatterConfig::default().up_axis, UpAxis::Y);
    }

    #[test]
    fn rejects_out_of_range_jitter() {
        let too_much_tilt = ScatterConfig::new().random_tilt(1.5);
        match too_much_tilt.validate() {
            Err(Error::InvalidParameter { name, value }) => {
                assert_eq!(name, "random_tilt");
                assert_eq!(value, 1.5);
            },
            other => panic!("Expected invalid tilt, got {:?}", other)
        }

        assert!(ScatterConfig::new().random_rotation(-0.1).validate().is_err());
        assert!(ScatterConfig::new().random_scale(::std::f32::NAN).validate().is_err());
        assert!(ScatterConfig::new().scale(::std::f32::INFINITY).validate().is_err());
        assert!(ScatterConfig::new().random_scale(100.0).validate().is_ok());
    }

    #[test]
    fn parse_up_axis() {
        assert_eq!("z".parse::<UpAxis>(), Ok(UpAxis::Z));
        assert_eq!("X".parse::<UpAxis>(), Ok(UpAxis::X));
        assert_eq!("1".parse::<UpAxis>(), Ok(UpAxis::Y));
        assert!("w".parse::<UpAxis>().is_err());
        assert_eq!(UpAxis::Z.to_string(), "z");
    }

    #[test]
    fn z_up_maps_mesh_z_onto_y() {
        let rot = UpAxis::Z.pre_rotation();
        let mapped = rot.transform_vector(Vector3::unit_z());

        assert!((mapped - Vector3::unit_y()).magnitude() < 1e-6);
    }

    #[test]
    fn x_up_maps_mesh_x_onto_negative_y() {
        let rot = UpAxis::X.pre_rotation();
        let mapped = rot.transform_vector(Vector3::unit_x());

        assert!((mapped + Vector3::unit_y()).magnitude() < 1e-6);
    }
}
