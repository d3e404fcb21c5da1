//! # Observing site
//!
//! An [`Observer`] is a validated geographic site. Coordinates are given in **degrees**
//! (longitude east positive) and stored in **radians**, ready for
//! [`ra_dec_to_alt_az`](crate::horizontal::ra_dec_to_alt_az).
//!
//! ```rust
//! use altaz::horizontal::EquatorialCoord;
//! use altaz::observers::Observer;
//!
//! let site = Observer::new(2.3522, 48.8566, Some("Paris".into()))?;
//! let betelgeuse = EquatorialCoord::new_degrees(88.7929, 7.4071);
//! let hor = site.to_horizontal(&betelgeuse, 2460390.5);
//! assert!((0.0..std::f64::consts::TAU).contains(&hor.az));
//! # Ok::<(), altaz::altaz_errors::AltAzError>(())
//! ```

use hifitime::Epoch;
use log::debug;

use crate::altaz_errors::AltAzError;
use crate::constants::{Degree, JulianDate, Radian};
use crate::horizontal::{hour_angle, EquatorialCoord, HorizontalCoord};
use crate::time::{epoch_to_jd_ut, local_sidereal_time};

#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    /// Site name, if any
    pub name: Option<String>,
    /// Geographic longitude, east positive, in (-π, π] [radians]
    pub longitude: Radian,
    /// Geographic latitude [radians]
    pub latitude: Radian,
}

/// Wrap a longitude in degrees to (-180, 180].
fn wrap_longitude(longitude: Degree) -> Degree {
    let lon = longitude.rem_euclid(360.0);
    if lon > 180.0 {
        lon - 360.0
    } else {
        lon
    }
}

impl Observer {
    /// Create a new observing site.
    ///
    /// Arguments
    /// -----------------
    /// * `longitude`: geographic longitude, east positive [degrees]
    /// * `latitude`: geographic latitude [degrees]
    /// * `name`: optional site name
    ///
    /// Return
    /// ----------
    /// * The site with angles stored in radians and the longitude wrapped to (-180°, 180°].
    ///
    /// Errors
    /// ----------
    /// * [`AltAzError::NonFiniteSiteCoordinate`] if either coordinate is NaN or infinite.
    /// * [`AltAzError::InvalidLatitude`] if the latitude is outside [-90°, 90°].
    pub fn new(
        longitude: Degree,
        latitude: Degree,
        name: Option<String>,
    ) -> Result<Observer, AltAzError> {
        if !longitude.is_finite() {
            return Err(AltAzError::NonFiniteSiteCoordinate("longitude"));
        }
        if !latitude.is_finite() {
            return Err(AltAzError::NonFiniteSiteCoordinate("latitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AltAzError::InvalidLatitude(latitude));
        }

        let longitude = wrap_longitude(longitude);
        debug!(
            "observer {}: lon={longitude}° lat={latitude}°",
            name.as_deref().unwrap_or("<unnamed>")
        );

        Ok(Observer {
            name,
            longitude: longitude.to_radians(),
            latitude: latitude.to_radians(),
        })
    }

    /// `(longitude, latitude)` in degrees.
    pub fn geodetic_degrees(&self) -> (Degree, Degree) {
        (self.longitude.to_degrees(), self.latitude.to_degrees())
    }

    /// Local sidereal time at this site [radians]
    pub fn local_sidereal_time(&self, jd_ut: JulianDate) -> Radian {
        local_sidereal_time(jd_ut, self.longitude)
    }

    /// Hour angle of `target` at this site, positive west of the meridian [radians]
    pub fn hour_angle(&self, target: &EquatorialCoord, jd_ut: JulianDate) -> Radian {
        hour_angle(self.local_sidereal_time(jd_ut), target.ra)
    }

    /// Horizontal coordinates of `target` seen from this site at `jd_ut`.
    pub fn to_horizontal(&self, target: &EquatorialCoord, jd_ut: JulianDate) -> HorizontalCoord {
        target.to_horizontal(self.latitude, self.longitude, jd_ut)
    }

    /// Horizontal coordinates of `target` seen from this site at `epoch`.
    pub fn to_horizontal_at(&self, target: &EquatorialCoord, epoch: &Epoch) -> HorizontalCoord {
        self.to_horizontal(target, epoch_to_jd_ut(epoch))
    }
}

#[cfg(test)]
mod observer_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_observer_constructor() {
        let observer = Observer::new(0.0, 0.0, None).unwrap();
        assert_eq!(observer.longitude, 0.0);
        assert_eq!(observer.latitude, 0.0);
        assert_eq!(observer.name, None);

        let observer = Observer::new(289.25058, -30.2446, Some("Rubin".into())).unwrap();
        assert_eq!(observer.name.as_deref(), Some("Rubin"));
        let (lon, lat) = observer.geodetic_degrees();
        assert_abs_diff_eq!(lon, -70.74942, epsilon = 1e-9);
        assert_abs_diff_eq!(lat, -30.2446, epsilon = 1e-9);
    }

    #[test]
    fn test_observer_rejects_bad_coordinates() {
        assert_eq!(
            Observer::new(0.0, 90.5, None),
            Err(AltAzError::InvalidLatitude(90.5))
        );
        assert_eq!(
            Observer::new(f64::NAN, 10.0, None),
            Err(AltAzError::NonFiniteSiteCoordinate("longitude"))
        );
        assert_eq!(
            Observer::new(10.0, f64::INFINITY, None),
            Err(AltAzError::NonFiniteSiteCoordinate("latitude"))
        );
    }

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(-180.0), 180.0);
        assert_eq!(wrap_longitude(190.0), -170.0);
        assert_eq!(wrap_longitude(-10.0), -10.0);
        assert_eq!(wrap_longitude(720.0), 0.0);
    }

    #[test]
    fn test_transit_at_zenith() {
        let site = Observer::new(-17.8792, 28.7606, Some("La Palma".into())).unwrap();
        let jd = 2460390.5;
        let target = EquatorialCoord::new(site.local_sidereal_time(jd), site.latitude);

        assert_eq!(site.hour_angle(&target, jd), 0.0);
        let hor = site.to_horizontal(&target, jd);
        assert_abs_diff_eq!(hor.alt, FRAC_PI_2, epsilon = 1e-7);
    }

    #[test]
    fn test_to_horizontal_at_epoch() {
        let site = Observer::new(2.3522, 48.8566, None).unwrap();
        let target = EquatorialCoord::new_degrees(101.2875, -16.7161);
        let epoch = Epoch::from_jde_utc(2460390.75);

        let from_epoch = site.to_horizontal_at(&target, &epoch);
        let from_jd = site.to_horizontal(&target, epoch_to_jd_ut(&epoch));
        assert_eq!(from_epoch, from_jd);
    }
}
