use hifitime::Epoch;
use std::str::FromStr;

use crate::altaz_errors::AltAzError;
use crate::constants::{
    JulianDate, Radian, DAYS_PER_JULIAN_CENTURY, DPI, ERA_J2000, ERA_RATE, J2000_JD,
};

use std::f64::consts::PI;

/// Julian date of an epoch, read on the UTC scale.
///
/// UTC stays within 0.9 s of UT1, which is well below the precision of the
/// sidereal time model used by this crate, so the result is used directly as `jd_ut`.
pub fn epoch_to_jd_ut(epoch: &Epoch) -> JulianDate {
    epoch.to_jde_utc_days()
}

/// Transformation from a date string to a julian date (UT)
///
/// Argument
/// --------
/// * `date`: a date understood by hifitime, e.g. `2024-03-20T21:30:00` (UTC when no scale is given)
///
/// Return
/// ------
/// * the julian date of `date`, or [`AltAzError::InvalidDate`] if it cannot be parsed
pub fn date_to_jd_ut(date: &str) -> Result<JulianDate, AltAzError> {
    let epoch =
        Epoch::from_str(date.trim()).map_err(|e| AltAzError::InvalidDate(format!("{date}: {e}")))?;
    Ok(epoch_to_jd_ut(&epoch))
}

/// Normalize an angle to [0, 2π), tolerating a negative remainder.
#[inline]
fn normalize_positive(angle: Radian) -> Radian {
    (angle % DPI + DPI) % DPI
}

/// Compute the Earth Rotation Angle (ERA) in radians for a Julian date (UT).
///
/// The ERA is the linear IAU 2000 expression
///
/// ```text
/// θ = 2π · (frac(jd) + 0.7790572732640 + 0.00273781191135448 · (jd − 2451545.0))
/// ```
///
/// normalized to [0, 2π). The fractional day is taken separately to keep the
/// large integer part of the date out of the multiplication.
pub fn earth_rotation_angle(jd: JulianDate) -> Radian {
    let t = jd - J2000_JD;
    let theta = DPI * ((jd % 1.0) + ERA_J2000 + ERA_RATE * t);
    normalize_positive(theta)
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Julian Date (UT).
///
/// # Details
/// GMST is the Earth Rotation Angle plus the accumulated precession in right
/// ascension, a quintic polynomial in Julian centuries `T` since J2000.0 with
/// coefficients in arcseconds:
///
/// ```text
/// GMST = θ(jd) + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///                 − 0.000029956·T⁴ − 0.0000000368·T⁵) · π / 648000
/// ```
///
/// The result is normalized to [0, 2π). The arcsecond sum is multiplied by π and then
/// divided by 648000, in that order; folding the two into one factor changes the last bit
/// of some results.
///
/// # Validity
/// The polynomial is a fixed-epoch fit around J2000. Results further than about
/// one century from J2000 have not been checked against a reference.
pub fn gmst(jd: JulianDate) -> Radian {
    let t = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let gmst = earth_rotation_angle(jd)
        + (0.014506 + 4612.156534 * t + 1.3915817 * t * t
            - 0.00000044 * t * t * t
            - 0.000029956 * t * t * t * t
            - 0.0000000368 * t * t * t * t * t)
            * PI
            / 648000.0;
    normalize_positive(gmst)
}

/// Local Sidereal Time in radians for an east-positive longitude (radians).
///
/// The remainder is not made positive: a western longitude larger than GMST
/// gives a negative LST, which is the same angle on the circle.
pub fn local_sidereal_time(jd: JulianDate, lon: Radian) -> Radian {
    (gmst(jd) + lon) % DPI
}
