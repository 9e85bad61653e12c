use std::f64::consts::{FRAC_PI_4, PI};

use super::Vec3;

/// Mean Earth radius (kilometers), spherical model.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Latitude clamp applied before the stretched-latitude transform. The
/// transform diverges at the poles; exact poles are a boundary condition,
/// not a crash.
pub const MAX_MERCATOR_LAT_DEG: f64 = 89.9999;
/// Below this |Δψ| a rhumb line is treated as due east-west and the
/// L'Hôpital limit `q = cos(φ1)` applies.
pub const RHUMB_EW_EPSILON: f64 = 1e-11;
/// Default sample count for loxodromic polylines.
pub const DEFAULT_RHUMB_SEGMENTS: usize = 50;

/// A geographic position in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinates {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CoordinatesError {
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl std::fmt::Display for CoordinatesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinatesError::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} outside [-90, 90]")
            }
            CoordinatesError::LongitudeOutOfRange(lon) => {
                write!(f, "longitude {lon} outside [-180, 180]")
            }
        }
    }
}

impl std::error::Error for CoordinatesError {}

impl Coordinates {
    /// Validating constructor for externally supplied positions.
    pub fn new(lat_deg: f64, lon_deg: f64) -> Result<Self, CoordinatesError> {
        if !(-90.0..=90.0).contains(&lat_deg) || lat_deg.is_nan() {
            return Err(CoordinatesError::LatitudeOutOfRange(lat_deg));
        }
        if !(-180.0..=180.0).contains(&lon_deg) || lon_deg.is_nan() {
            return Err(CoordinatesError::LongitudeOutOfRange(lon_deg));
        }
        Ok(Self { lat_deg, lon_deg })
    }

    /// Non-validating constructor. Seam-adjusted path samples intentionally
    /// carry longitudes beyond ±180° so a polyline never jumps across the
    /// antimeridian.
    pub fn unchecked(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    pub fn lat_rad(self) -> f64 {
        self.lat_deg.to_radians()
    }

    pub fn lon_rad(self) -> f64 {
        self.lon_deg.to_radians()
    }
}

/// An ordered sequence of positions describing a path on the sphere.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoPath {
    points: Vec<Coordinates>,
}

impl GeoPath {
    pub fn new(points: Vec<Coordinates>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Clamp a latitude (degrees) away from the pole singularity.
pub fn clamp_mercator_lat(lat_deg: f64) -> f64 {
    lat_deg.clamp(-MAX_MERCATOR_LAT_DEG, MAX_MERCATOR_LAT_DEG)
}

/// Mercator stretched latitude `ln(tan(π/4 + φ/2))`, pole-clamped.
pub fn stretched_latitude(lat_rad: f64) -> f64 {
    let clamped = clamp_mercator_lat(lat_rad.to_degrees()).to_radians();
    (FRAC_PI_4 + clamped / 2.0).tan().ln()
}

/// Shortest-wrap longitude difference in radians, result in (-π, π].
pub fn wrap_longitude_rad(delta: f64) -> f64 {
    if delta > PI {
        delta - 2.0 * PI
    } else if delta <= -PI {
        delta + 2.0 * PI
    } else {
        delta
    }
}

/// Central angle between two positions (radians), by the haversine form.
/// `atan2` keeps this stable near antipodal pairs where `acos` collapses.
pub fn central_angle_rad(p1: Coordinates, p2: Coordinates) -> f64 {
    let phi1 = p1.lat_rad();
    let phi2 = p2.lat_rad();
    let dphi = phi2 - phi1;
    let dlam = p2.lon_rad() - p1.lon_rad();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlam / 2.0).sin().powi(2);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance in kilometers.
pub fn orthodromic_distance_km(p1: Coordinates, p2: Coordinates) -> f64 {
    EARTH_RADIUS_KM * central_angle_rad(p1, p2)
}

/// Rhumb-line distance in kilometers, antimeridian-corrected.
pub fn loxodromic_distance_km(p1: Coordinates, p2: Coordinates) -> f64 {
    let phi1 = p1.lat_rad();
    let phi2 = p2.lat_rad();
    let dphi = phi2 - phi1;
    let dlam = wrap_longitude_rad(p2.lon_rad() - p1.lon_rad());
    let dpsi = stretched_latitude(phi2) - stretched_latitude(phi1);
    let q = if dpsi.abs() > RHUMB_EW_EPSILON {
        dphi / dpsi
    } else {
        phi1.cos()
    };
    EARTH_RADIUS_KM * (dphi * dphi + q * q * dlam * dlam).sqrt()
}

/// Sample the rhumb line between two positions.
///
/// Samples are linear in latitude with longitude solved through stretched
/// latitude, which is the defining property of a constant-bearing track.
/// The seam-adjusted end longitude is used throughout so consecutive
/// samples never differ by more than half a turn.
pub fn loxodromic_path(p1: Coordinates, p2: Coordinates, segments: usize) -> GeoPath {
    let segments = segments.max(1);
    let phi1 = p1.lat_rad();
    let phi2 = p2.lat_rad();
    let lam1 = p1.lon_rad();
    let dlam = wrap_longitude_rad(p2.lon_rad() - lam1);

    let psi1 = stretched_latitude(phi1);
    let dpsi = stretched_latitude(phi2) - psi1;
    let east_west = dpsi.abs() <= RHUMB_EW_EPSILON;

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let phi = phi1 + t * (phi2 - phi1);
        let lam = if east_west {
            lam1 + t * dlam
        } else {
            lam1 + dlam * (stretched_latitude(phi) - psi1) / dpsi
        };
        points.push(Coordinates::unchecked(phi.to_degrees(), lam.to_degrees()));
    }
    GeoPath::new(points)
}

/// Unit sphere vector for a position.
pub fn unit_vector(c: Coordinates) -> Vec3 {
    let phi = c.lat_rad();
    let lam = c.lon_rad();
    Vec3::new(phi.cos() * lam.cos(), phi.cos() * lam.sin(), phi.sin())
}

fn from_unit_vector(v: Vec3) -> Coordinates {
    let lat = v.z.clamp(-1.0, 1.0).asin().to_degrees();
    let lon = v.y.atan2(v.x).to_degrees();
    Coordinates::unchecked(lat, lon)
}

fn slerp_unit(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    let omega = a.dot(b).clamp(-1.0, 1.0).acos();
    if omega < 1e-9 {
        // Nearly coincident; chord interpolation is exact enough.
        return (a * (1.0 - t) + b * t).normalize();
    }
    let sin_omega = omega.sin();
    (a * (((1.0 - t) * omega).sin() / sin_omega) + b * ((t * omega).sin() / sin_omega)).normalize()
}

/// Spherical interpolation along the great circle from `p1` to `p2`.
///
/// For antipodal endpoints the great circle is not unique; the path is
/// routed through a fixed waypoint (the north pole, or the equator origin
/// when the start is itself a pole) so the result stays deterministic.
pub fn great_circle_interpolate(p1: Coordinates, p2: Coordinates, t: f64) -> Coordinates {
    let a = unit_vector(p1);
    let b = unit_vector(p2);
    let omega = a.dot(b).clamp(-1.0, 1.0).acos();
    if omega < 1e-12 {
        return p1;
    }
    if PI - omega < 1e-9 {
        let way = if a.z.abs() < 0.9999 {
            Vec3::new(0.0, 0.0, 1.0)
        } else {
            Vec3::new(1.0, 0.0, 0.0)
        };
        return if t <= 0.5 {
            from_unit_vector(slerp_unit(a, way, t * 2.0))
        } else {
            from_unit_vector(slerp_unit(way, b, t * 2.0 - 1.0))
        };
    }
    from_unit_vector(slerp_unit(a, b, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn coord(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon).unwrap()
    }

    #[test]
    fn rejects_out_of_range_input() {
        assert!(matches!(
            Coordinates::new(90.1, 0.0),
            Err(CoordinatesError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Coordinates::new(0.0, -180.5),
            Err(CoordinatesError::LongitudeOutOfRange(_))
        ));
        assert!(Coordinates::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn orthodromic_distance_identity_and_symmetry() {
        let paris = coord(48.8566, 2.3522);
        let ny = coord(40.7128, -74.0060);
        assert_eq!(orthodromic_distance_km(paris, paris), 0.0);
        assert_close(
            orthodromic_distance_km(paris, ny),
            orthodromic_distance_km(ny, paris),
            1e-9,
        );
    }

    #[test]
    fn orthodromic_distance_paris_new_york() {
        let paris = coord(48.8566, 2.3522);
        let ny = coord(40.7128, -74.0060);
        let d = orthodromic_distance_km(paris, ny);
        // Reference value ~5837 km, tolerance 1%.
        assert!((d - 5837.0).abs() / 5837.0 < 0.01, "got {d}");
    }

    #[test]
    fn orthodromic_distance_stable_near_antipodes() {
        let p1 = coord(0.0, 0.0);
        let p2 = coord(0.0, 179.999_999);
        let d = orthodromic_distance_km(p1, p2);
        assert!(d.is_finite());
        assert_close(d, EARTH_RADIUS_KM * PI, 1.0);
    }

    #[test]
    fn loxodromic_never_shorter_than_orthodromic() {
        let pairs = [
            (coord(48.8566, 2.3522), coord(40.7128, -74.0060)),
            (coord(-33.8688, 151.2093), coord(35.6762, 139.6503)),
            (coord(60.0, -45.0), coord(-10.0, 100.0)),
            (coord(10.0, 170.0), coord(20.0, -170.0)),
        ];
        for (a, b) in pairs {
            let lox = loxodromic_distance_km(a, b);
            let ortho = orthodromic_distance_km(a, b);
            assert!(lox >= ortho - 1e-6, "lox {lox} < ortho {ortho}");
        }
    }

    #[test]
    fn loxodromic_distance_east_west_limit() {
        // Equal latitudes hit the |Δψ| guard; distance is along the parallel.
        let a = coord(30.0, 0.0);
        let b = coord(30.0, 90.0);
        let expected = EARTH_RADIUS_KM * 30f64.to_radians().cos() * 90f64.to_radians();
        assert_close(loxodromic_distance_km(a, b), expected, 1e-6);
    }

    #[test]
    fn loxodromic_path_crosses_antimeridian_without_jump() {
        let path = loxodromic_path(coord(0.0, 170.0), coord(0.0, -170.0), 50);
        assert_eq!(path.len(), 51);
        let pts = path.points();
        for pair in pts.windows(2) {
            let step = pair[1].lon_deg - pair[0].lon_deg;
            assert!(step > 0.0, "longitude not monotonic: {step}");
            assert!(step.abs() < 180.0, "seam jump: {step}");
        }
        assert_close(pts[50].lon_deg, 190.0, 1e-9);
    }

    #[test]
    fn loxodromic_path_holds_latitude_on_a_parallel() {
        let path = loxodromic_path(coord(45.0, -10.0), coord(45.0, 40.0), 20);
        for p in path.points() {
            assert_close(p.lat_deg, 45.0, 1e-12);
        }
    }

    #[test]
    fn stretched_latitude_finite_at_pole() {
        let psi = stretched_latitude(90f64.to_radians());
        assert!(psi.is_finite());
        // Clamp makes the pole and the clamp boundary agree.
        assert_close(psi, stretched_latitude(MAX_MERCATOR_LAT_DEG.to_radians()), 1e-12);
    }

    #[test]
    fn great_circle_midpoint_on_equator() {
        let mid = great_circle_interpolate(coord(0.0, 0.0), coord(0.0, 90.0), 0.5);
        assert_close(mid.lat_deg, 0.0, 1e-9);
        assert_close(mid.lon_deg, 45.0, 1e-9);
    }

    #[test]
    fn great_circle_interpolation_endpoints() {
        let a = coord(48.8566, 2.3522);
        let b = coord(40.7128, -74.0060);
        let s = great_circle_interpolate(a, b, 0.0);
        let e = great_circle_interpolate(a, b, 1.0);
        assert_close(s.lat_deg, a.lat_deg, 1e-9);
        assert_close(e.lat_deg, b.lat_deg, 1e-9);
        assert_close(e.lon_deg, b.lon_deg, 1e-9);
    }

    #[test]
    fn great_circle_antipodal_is_deterministic() {
        let a = coord(0.0, 0.0);
        let b = coord(0.0, 180.0);
        let m1 = great_circle_interpolate(a, b, 0.5);
        let m2 = great_circle_interpolate(a, b, 0.5);
        assert_eq!(m1, m2);
        // Routed over the north pole.
        assert_close(m1.lat_deg, 90.0, 1e-6);
    }

    #[test]
    fn wrap_longitude_prefers_short_direction() {
        assert_close(wrap_longitude_rad(340f64.to_radians()), -20f64.to_radians(), 1e-12);
        assert_close(wrap_longitude_rad(-340f64.to_radians()), 20f64.to_radians(), 1e-12);
        assert_close(wrap_longitude_rad(10f64.to_radians()), 10f64.to_radians(), 1e-12);
    }
}
