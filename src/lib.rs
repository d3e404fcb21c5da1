pub mod altaz_errors;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod horizontal;
pub mod observers;
pub mod time;

pub use horizontal::{ra_dec_to_alt_az, EquatorialCoord, HorizontalCoord};
pub use observers::Observer;
