#![allow(dead_code)]

use std::f64::consts::TAU;

/// Shortest distance between two angles on the circle [radians]
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(TAU);
    d.min(TAU - d)
}

/// Equatorial (hour angle, declination) back from horizontal (azimuth from north, altitude).
pub fn horizontal_to_hadec(az: f64, alt: f64, lat: f64) -> (f64, f64) {
    let az_south = az - std::f64::consts::PI;
    let ha = az_south
        .sin()
        .atan2(az_south.cos() * lat.sin() + alt.tan() * lat.cos());
    let dec = (lat.sin() * alt.sin() + lat.cos() * alt.cos() * az.cos()).asin();
    (ha, dec)
}

pub fn assert_angle_close(actual: f64, expected: f64, epsilon: f64) {
    let d = circular_distance(actual, expected);
    assert!(
        d <= epsilon,
        "angles differ by {d}: actual={actual}, expected={expected}"
    );
}
