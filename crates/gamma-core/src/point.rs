//! Control points and ordered control sets.

use crate::error::{Error, Result};
use crate::profile::DeviceProfile;

/// A user-specified (input, output) pair the curve must pass through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlPoint {
    /// Input brightness level.
    pub input: u16,
    /// Output brightness level.
    pub output: u16,
}

impl ControlPoint {
    /// Create a new control point.
    #[inline]
    pub fn new(input: u16, output: u16) -> Self {
        Self { input, output }
    }
}

/// An ordered sequence of control points with strictly increasing inputs.
///
/// The set keeps itself sorted; every edit re-checks the device range and
/// input uniqueness. Endpoints at input 0 and `max_input` may be left
/// implicit, derivation extends the curve flat to cover them. A set may
/// transiently hold fewer than two points during editing; derivation is
/// where the minimum count is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSet {
    points: Vec<ControlPoint>,
}

impl ControlSet {
    /// The identity mapping for a profile: `(0, 0)` to `(max_input, peak)`.
    pub fn identity(profile: &DeviceProfile) -> Self {
        Self {
            points: vec![
                ControlPoint::new(0, 0),
                ControlPoint::new(profile.max_input, profile.peak),
            ],
        }
    }

    /// Build a set from caller-supplied points.
    ///
    /// Points are sorted by input; a duplicate input or a point outside the
    /// profile's range fails with [`Error::InvalidControlPoint`].
    pub fn from_points(points: Vec<ControlPoint>, profile: &DeviceProfile) -> Result<Self> {
        let mut points = points;
        points.sort_unstable_by_key(|p| p.input);
        for (i, p) in points.iter().enumerate() {
            check_range(*p, profile)?;
            if i > 0 && points[i - 1].input == p.input {
                return Err(Error::invalid_point(format!("duplicate input {}", p.input)));
            }
        }
        Ok(Self { points })
    }

    /// Insert a new point, keeping the set sorted.
    ///
    /// Fails with [`Error::InvalidControlPoint`] when the point is outside
    /// the profile's range or its input collides with an existing point.
    pub fn insert(&mut self, point: ControlPoint, profile: &DeviceProfile) -> Result<()> {
        check_range(point, profile)?;
        match self.position(point.input) {
            Ok(_) => Err(Error::invalid_point(format!(
                "duplicate input {}",
                point.input
            ))),
            Err(at) => {
                self.points.insert(at, point);
                Ok(())
            }
        }
    }

    /// Remove the point at the given input level and return it.
    pub fn remove(&mut self, input: u16) -> Result<ControlPoint> {
        match self.position(input) {
            Ok(at) => Ok(self.points.remove(at)),
            Err(_) => Err(Error::invalid_point(format!("no point at input {input}"))),
        }
    }

    /// Move the point at `input` to a new position, re-sorting the set.
    ///
    /// The destination must stay inside the profile's range and must not
    /// collide with another point's input.
    pub fn move_point(
        &mut self,
        input: u16,
        to: ControlPoint,
        profile: &DeviceProfile,
    ) -> Result<()> {
        check_range(to, profile)?;
        let at = self
            .position(input)
            .map_err(|_| Error::invalid_point(format!("no point at input {input}")))?;
        if to.input != input && self.position(to.input).is_ok() {
            return Err(Error::invalid_point(format!("duplicate input {}", to.input)));
        }
        self.points.remove(at);
        let at = self.position(to.input).unwrap_err();
        self.points.insert(at, to);
        Ok(())
    }

    /// The points in input order.
    #[inline]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of points in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the set holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The lowest-input point, if any.
    #[inline]
    pub fn first(&self) -> Option<ControlPoint> {
        self.points.first().copied()
    }

    /// The highest-input point, if any.
    #[inline]
    pub fn last(&self) -> Option<ControlPoint> {
        self.points.last().copied()
    }

    fn position(&self, input: u16) -> std::result::Result<usize, usize> {
        self.points.binary_search_by_key(&input, |p| p.input)
    }
}

fn check_range(point: ControlPoint, profile: &DeviceProfile) -> Result<()> {
    if point.input > profile.max_input {
        return Err(Error::invalid_point(format!(
            "input {} outside 0..={}",
            point.input, profile.max_input
        )));
    }
    if point.output > profile.peak {
        return Err(Error::invalid_point(format!(
            "output {} outside 0..={}",
            point.output, profile.peak
        )));
    }
    Ok(())
}
