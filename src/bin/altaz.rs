use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use log::{debug, error};

use altaz::altaz_errors::AltAzError;
use altaz::config::SiteConfig;
use altaz::constants::{DPI, RADH};
use altaz::conversion::{parse_dec, parse_ra};
use altaz::horizontal::EquatorialCoord;
use altaz::observers::Observer;
use altaz::time::date_to_jd_ut;

#[derive(Parser, Debug)]
#[command(
    name = "altaz",
    version,
    about = "Convert right ascension / declination to azimuth / altitude"
)]
struct Cli {
    /// Right ascension, "HH MM SS.S" / "HH:MM:SS.S" or decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    ra: String,

    /// Declination, "±DD MM SS.S" / "±DD:MM:SS.S" or decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    dec: String,

    /// Julian date (UT)
    #[arg(long, conflicts_with = "date", required_unless_present = "date")]
    jd: Option<f64>,

    /// Calendar date, e.g. 2024-03-20T21:30:00 (UTC unless a scale is given)
    #[arg(long)]
    date: Option<String>,

    /// TOML file describing the observing site
    #[arg(long, conflicts_with_all = ["lon", "lat"])]
    site: Option<Utf8PathBuf>,

    /// Site longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,

    /// Site latitude in degrees
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    /// Print angles in radians instead of degrees
    #[arg(long)]
    radians: bool,
}

fn observer(cli: &Cli) -> Result<Observer, AltAzError> {
    match (&cli.site, cli.lon, cli.lat) {
        (Some(path), _, _) => SiteConfig::from_file(path)?.observer(),
        (None, Some(lon), Some(lat)) => Observer::new(lon, lat, None),
        _ => Err(AltAzError::MissingSite),
    }
}

fn run(cli: &Cli) -> Result<(), AltAzError> {
    let site = observer(cli)?;
    let target = EquatorialCoord::new(parse_ra(&cli.ra)?, parse_dec(&cli.dec)?);

    let jd_ut = match (cli.jd, &cli.date) {
        (Some(jd), _) => jd,
        (None, Some(date)) => date_to_jd_ut(date)?,
        (None, None) => return Err(AltAzError::InvalidDate("missing --jd or --date".into())),
    };
    debug!("jd_ut={jd_ut} target={target:?} site={site:?}");

    let hor = site.to_horizontal(&target, jd_ut);
    let lst = site.local_sidereal_time(jd_ut).rem_euclid(DPI);

    if cli.radians {
        println!("az  = {:.9}", hor.az);
        println!("alt = {:.9}", hor.alt);
        println!("lst = {lst:.9}");
    } else {
        let (az, alt) = hor.to_degrees();
        println!("az  = {az:.6}°");
        println!("alt = {alt:.6}°");
        println!("lst = {:.6}h", lst / RADH);
    }
    if !hor.is_above_horizon() {
        println!("(below horizon)");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("altaz: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod cli_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn parse(args: &[&str]) -> Cli {
        let argv = ["altaz", "--ra", "05 55 10.3", "--dec", "+07 24 25", "--jd", "2451545.0"];
        Cli::try_parse_from(argv.iter().chain(args)).unwrap()
    }

    #[test]
    fn test_observer_from_site_file() {
        let cli = parse(&["--site", "tests/data/pic_du_midi.toml"]);
        let site = observer(&cli).unwrap();
        assert_eq!(site.name.as_deref(), Some("Pic du Midi"));
        let (lon, lat) = site.geodetic_degrees();
        assert_abs_diff_eq!(lon, 0.142, epsilon = 1e-12);
        assert_abs_diff_eq!(lat, 42.936, epsilon = 1e-12);
    }

    #[test]
    fn test_observer_from_lon_lat() {
        let cli = parse(&["--lon", "-70.74942", "--lat", "-30.2446"]);
        let site = observer(&cli).unwrap();
        assert_eq!(site.name, None);
        let (lon, lat) = site.geodetic_degrees();
        assert_abs_diff_eq!(lon, -70.74942, epsilon = 1e-12);
        assert_abs_diff_eq!(lat, -30.2446, epsilon = 1e-12);
    }

    #[test]
    fn test_observer_missing() {
        let cli = parse(&[]);
        assert_eq!(observer(&cli), Err(AltAzError::MissingSite));
        assert_eq!(run(&cli), Err(AltAzError::MissingSite));
    }

    #[test]
    fn test_observer_bad_site_file() {
        let cli = parse(&["--site", "tests/data/missing.toml"]);
        assert!(matches!(observer(&cli), Err(AltAzError::IoError(_))));
    }

    #[test]
    fn test_conflicting_site_arguments_are_rejected() {
        let argv = ["altaz", "--ra", "10", "--dec", "20", "--jd", "2451545.0"];
        let with = |extra: &[&str]| Cli::try_parse_from(argv.iter().chain(extra)).is_err();

        assert!(with(&["--lon", "10.0"]));
        assert!(with(&["--site", "a.toml", "--lon", "1", "--lat", "2"]));
        assert!(with(&["--date", "2024-01-01T00:00:00"]));
    }

    #[test]
    fn test_run_reports_bad_coordinates() {
        let cli = Cli::try_parse_from([
            "altaz", "--ra", "25 00 00", "--dec", "0", "--jd", "2451545.0", "--lon", "0", "--lat",
            "0",
        ])
        .unwrap();
        assert_eq!(
            run(&cli),
            Err(AltAzError::InvalidRightAscension("25 00 00".into()))
        );
    }
}
