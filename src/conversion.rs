use crate::altaz_errors::AltAzError;
use crate::constants::{Degree, Radian, RADEG};

/// Split a sexagesimal field list, accepting spaces or colons as separators.
fn split_fields(angle: &str) -> Vec<&str> {
    angle
        .split(|c: char| c.is_whitespace() || c == ':')
        .filter(|f| !f.is_empty())
        .collect()
}

/// Parse the minute and second fields, both expected in [0, 60).
fn parse_min_sec(m: &str, s: &str) -> Option<(f64, f64)> {
    let m: f64 = m.parse().ok()?;
    let s: f64 = s.parse().ok()?;
    ((0.0..60.0).contains(&m) && (0.0..60.0).contains(&s)).then_some((m, s))
}

/// Parse a right ascension string to degrees
///
/// Arguments
/// ---------
/// * `ra`: either `HH MM SS.SS` (spaces or colons) or a single value in decimal degrees
///
/// Returns
/// -------
/// * The right ascension in degrees, in [0, 360) for the sexagesimal form.
pub fn parse_ra_to_deg(ra: &str) -> Result<Degree, AltAzError> {
    let invalid = || AltAzError::InvalidRightAscension(ra.to_string());

    match split_fields(ra).as_slice() {
        [deg] => {
            let deg: f64 = deg.parse().map_err(|_| invalid())?;
            deg.is_finite().then_some(deg).ok_or_else(invalid)
        }
        [h, m, s] => {
            let h: f64 = h.parse().map_err(|_| invalid())?;
            if !(0.0..24.0).contains(&h) {
                return Err(invalid());
            }
            let (m, s) = parse_min_sec(m, s).ok_or_else(invalid)?;
            Ok((h + m / 60.0 + s / 3600.0) * 15.0)
        }
        _ => Err(invalid()),
    }
}

/// Parse a declination string to degrees
///
/// Arguments
/// ---------
/// * `dec`: either `±DD MM SS.SS` (spaces or colons) or a single value in decimal degrees
///
/// Returns
/// -------
/// * The declination in degrees, rejected when outside [-90, 90].
pub fn parse_dec_to_deg(dec: &str) -> Result<Degree, AltAzError> {
    let invalid = || AltAzError::InvalidDeclination(dec.to_string());

    let dec_deg = match split_fields(dec).as_slice() {
        [deg] => deg.parse::<f64>().map_err(|_| invalid())?,
        [d, m, s] => {
            // The sign lives on the degree field and also covers "-00"
            let sign = if d.starts_with('-') { -1.0 } else { 1.0 };
            let d: f64 = d
                .trim_start_matches(&['-', '+'][..])
                .parse()
                .map_err(|_| invalid())?;
            let (m, s) = parse_min_sec(m, s).ok_or_else(invalid)?;
            sign * (d + m / 60.0 + s / 3600.0)
        }
        _ => return Err(invalid()),
    };

    if (-90.0..=90.0).contains(&dec_deg) {
        Ok(dec_deg)
    } else {
        Err(invalid())
    }
}

/// Parse a right ascension string to radians. See [`parse_ra_to_deg`].
pub fn parse_ra(ra: &str) -> Result<Radian, AltAzError> {
    parse_ra_to_deg(ra).map(|deg| deg * RADEG)
}

/// Parse a declination string to radians. See [`parse_dec_to_deg`].
pub fn parse_dec(dec: &str) -> Result<Radian, AltAzError> {
    parse_dec_to_deg(dec).map(|deg| deg * RADEG)
}
