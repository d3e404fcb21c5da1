//! # Equatorial → horizontal coordinate conversion
//!
//! This module turns a pair of equatorial coordinates (right ascension α, declination δ)
//! into horizontal coordinates (azimuth A, altitude h) for an observer at geographic
//! latitude φ and east-positive longitude λ, at a Julian date in UT.
//!
//! ## Pipeline
//!
//! ```text
//! jd_ut ─► ERA ─► GMST ─(+λ)─► LST ─(−α)─► H ─┬─► A = atan2(sin H, cos H·sin φ − tan δ·cos φ) + π
//!                                             └─► h = asin(sin φ·sin δ + cos φ·cos δ·cos H)
//! ```
//!
//! ## Conventions
//!
//! - All angles are **radians**.
//! - Azimuth is measured from **north, increasing eastward**, in [0, 2π).
//! - The hour angle is positive **west** of the meridian.
//!
//! ## Numerical behaviour
//!
//! [`ra_dec_to_alt_az`] is the raw transform and is kept formula-for-formula, modulo order
//! included. When rounding pushes the `asin` argument slightly past ±1 (typically for an
//! object exactly at the zenith) the raw altitude is `NaN`. The typed surface
//! ([`EquatorialCoord::to_horizontal`], [`Observer::to_horizontal`](crate::observers::Observer::to_horizontal))
//! clamps that argument and returns ±π/2 instead.

use serde::{Deserialize, Serialize};

use crate::constants::{JulianDate, Radian, DPI};
use crate::time::local_sidereal_time;

use std::f64::consts::PI;

/// Right ascension and declination, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoord {
    /// Right ascension [radians]
    pub ra: Radian,
    /// Declination [radians]
    pub dec: Radian,
}

/// Azimuth and altitude, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoord {
    /// Azimuth from north, eastward [radians]
    pub az: Radian,
    /// Altitude above the horizon [radians]
    pub alt: Radian,
}

impl EquatorialCoord {
    pub fn new(ra: Radian, dec: Radian) -> Self {
        Self { ra, dec }
    }

    pub fn new_degrees(ra: f64, dec: f64) -> Self {
        Self::new(ra.to_radians(), dec.to_radians())
    }

    /// Horizontal coordinates of this position for a site at (`lat`, `lon`) and `jd_ut`.
    ///
    /// Same transform as [`ra_dec_to_alt_az`], with the altitude clamped to [-π/2, π/2].
    pub fn to_horizontal(&self, lat: Radian, lon: Radian, jd_ut: JulianDate) -> HorizontalCoord {
        let lst = local_sidereal_time(jd_ut, lon);
        let h = hour_angle(lst, self.ra);
        HorizontalCoord {
            az: azimuth(h, self.dec, lat),
            alt: sin_altitude(h, self.dec, lat).clamp(-1.0, 1.0).asin(),
        }
    }
}

impl HorizontalCoord {
    pub fn new(az: Radian, alt: Radian) -> Self {
        Self { az, alt }
    }

    pub fn new_degrees(az: f64, alt: f64) -> Self {
        Self::new(az.to_radians(), alt.to_radians())
    }

    /// `(azimuth, altitude)` in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.az.to_degrees(), self.alt.to_degrees())
    }

    /// Zenith distance, `π/2 − alt`.
    pub fn zenith_distance(&self) -> Radian {
        std::f64::consts::FRAC_PI_2 - self.alt
    }

    /// True when the position is strictly above the geometric horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.alt > 0.0
    }
}

/// Hour angle from a local sidereal time and a right ascension.
///
/// ```text
/// H = ((LST − α + π) mod 2π) − π
/// ```
///
/// The remainder keeps the sign of its dividend, so `H` lies in [-π, π) whenever
/// `LST − α > −π`; otherwise it is an equivalent angle below −π.
#[inline]
pub fn hour_angle(lst: Radian, ra: Radian) -> Radian {
    (lst - ra + PI) % DPI - PI
}

/// Azimuth from north, eastward, normalized to [0, 2π).
#[inline]
fn azimuth(h: Radian, dec: Radian, lat: Radian) -> Radian {
    let az = (h.sin()).atan2(h.cos() * lat.sin() - dec.tan() * lat.cos()) + PI;
    az % DPI
}

/// Sine of the altitude, before `asin`.
#[inline]
fn sin_altitude(h: Radian, dec: Radian, lat: Radian) -> f64 {
    lat.sin() * dec.sin() + lat.cos() * dec.cos() * h.cos()
}

/// Convert equatorial coordinates to horizontal coordinates.
///
/// Arguments
/// ---------
/// * `ra`: right ascension [radians]
/// * `dec`: declination [radians]
/// * `lat`: observer latitude [radians]
/// * `lon`: observer longitude, east positive [radians]
/// * `jd_ut`: Julian date (UT)
///
/// Return
/// ------
/// * `(az, alt)`: azimuth from north eastward in [0, 2π), altitude in [-π/2, π/2] [radians]
///
/// The function is pure and never panics. Out-of-domain inputs, or rounding that takes the
/// `asin` argument outside [-1, 1], give a `NaN` altitude.
pub fn ra_dec_to_alt_az(
    ra: Radian,
    dec: Radian,
    lat: Radian,
    lon: Radian,
    jd_ut: JulianDate,
) -> (Radian, Radian) {
    let lst = local_sidereal_time(jd_ut, lon);
    let h = hour_angle(lst, ra);
    (azimuth(h, dec, lat), sin_altitude(h, dec, lat).asin())
}
