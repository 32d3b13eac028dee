//! Pulls a latitude/longitude pair out of loosely formatted text.
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Plain decimal pair: `28.6139, 77.2090`
static DECIMAL_PAIR: OnceLock<Regex> = OnceLock::new();

/// Direction after the number: `11.2342° N, 78.8807° E`
static DIRECTION_SUFFIX: OnceLock<Regex> = OnceLock::new();

/// Direction before the number: `N 11.2342, E 78.8807`
static DIRECTION_PREFIX: OnceLock<Regex> = OnceLock::new();

/// Matchers in priority order; the first hit wins.
const STRATEGIES: &[fn(&str) -> Option<GeoPoint>] = &[match_decimal_pair, match_direction_suffix, match_direction_prefix];

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
  pub latitude: f64,
  pub longitude: f64,
}

impl fmt::Display for GeoPoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}, {}", self.latitude, self.longitude)
  }
}

fn decimal_pair() -> &'static Regex {
  DECIMAL_PAIR.get_or_init(|| Regex::new(r"(-?[0-9]{1,3}\.[0-9]+)[,\s]+(-?[0-9]{1,3}\.[0-9]+)").expect("valid coordinate pattern"))
}

fn direction_suffix() -> &'static Regex {
  DIRECTION_SUFFIX
    .get_or_init(|| Regex::new(r"([0-9.]+)\s*°?\s*([NnSs]),?\s*[,;]?\s*([0-9.]+)\s*°?\s*([EeWw])").expect("valid coordinate pattern"))
}

fn direction_prefix() -> &'static Regex {
  DIRECTION_PREFIX.get_or_init(|| Regex::new(r"([NnSs])\s*([0-9.]+)[,\s]+([EeWw])\s*([0-9.]+)").expect("valid coordinate pattern"))
}

/// Extracts the first coordinate pair found in `text`.
///
/// Accepts `&str` or `Option<&str>`; empty or absent input yields `None`, as does
/// text with no recognisable pair. Never panics on arbitrary input.
pub fn extract_geo_point<'a>(text: impl Into<Option<&'a str>>) -> Option<GeoPoint> {
  let text = text.into()?;
  if text.is_empty() {
    return None;
  }
  STRATEGIES.iter().find_map(|strategy| strategy(text))
}

fn match_decimal_pair(text: &str) -> Option<GeoPoint> {
  let caps = decimal_pair().captures(text)?;
  Some(GeoPoint {
    latitude: caps[1].parse().ok()?,
    longitude: caps[2].parse().ok()?,
  })
}

fn match_direction_suffix(text: &str) -> Option<GeoPoint> {
  let caps = direction_suffix().captures(text)?;
  Some(GeoPoint {
    latitude: signed(&caps[1], &caps[2], "S")?,
    longitude: signed(&caps[3], &caps[4], "W")?,
  })
}

fn match_direction_prefix(text: &str) -> Option<GeoPoint> {
  let caps = direction_prefix().captures(text)?;
  Some(GeoPoint {
    latitude: signed(&caps[2], &caps[1], "S")?,
    longitude: signed(&caps[4], &caps[3], "W")?,
  })
}

/// Parses `number` and negates it when `direction` is the `negative` hemisphere.
fn signed(number: &str, direction: &str, negative: &str) -> Option<f64> {
  // `[0-9.]+` also admits things like `1.2.3`; those are treated as no match
  let value: f64 = number.parse().ok()?;
  if direction.eq_ignore_ascii_case(negative) {
    Some(-value)
  } else {
    Some(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn point(latitude: f64, longitude: f64) -> Option<GeoPoint> {
    Some(GeoPoint { latitude, longitude })
  }

  #[test]
  fn test_decimal_pair() {
    assert_eq!(extract_geo_point("28.6139, 77.2090"), point(28.6139, 77.2090));
    assert_eq!(extract_geo_point("28.6139 77.2090"), point(28.6139, 77.2090));
    assert_eq!(extract_geo_point("-33.8688,151.2093"), point(-33.8688, 151.2093));
  }

  #[test]
  fn test_decimal_pair_inside_text() {
    let text = "Village office located at 23.2599, 77.4126 near the main road";
    assert_eq!(extract_geo_point(text), point(23.2599, 77.4126));
  }

  #[test]
  fn test_first_pair_wins() {
    assert_eq!(extract_geo_point("10.5, 20.5 and 30.5, 40.5"), point(10.5, 20.5));
  }

  #[test]
  fn test_degree_suffix() {
    assert_eq!(extract_geo_point("11.2342° N, 78.8807° E"), point(11.2342, 78.8807));
    assert_eq!(extract_geo_point("11.2342° S, 78.8807° W"), point(-11.2342, -78.8807));
  }

  #[test]
  fn test_suffix_without_degree_sign_and_lowercase() {
    assert_eq!(extract_geo_point("11.2342 n; 78.8807 w"), point(11.2342, -78.8807));
    assert_eq!(extract_geo_point("11.2342S 78.8807E"), point(-11.2342, 78.8807));
  }

  #[test]
  fn test_degree_prefix() {
    assert_eq!(extract_geo_point("N 11.2342, E 78.8807"), point(11.2342, 78.8807));
    assert_eq!(extract_geo_point("s 11.2342 w 78.8807"), point(-11.2342, -78.8807));
  }

  #[test]
  fn test_decimal_pair_beats_earlier_suffix_form() {
    assert_eq!(extract_geo_point("12.5° N, 77.25° E then 1.5, 2.5"), point(1.5, 2.5));
  }

  #[test]
  fn test_suffix_form_beats_earlier_prefix_form() {
    assert_eq!(extract_geo_point("N 10.5, E 20.5 or 30.5 N, 40.5 E"), point(30.5, 40.5));
  }

  #[test]
  fn test_no_match() {
    assert_eq!(extract_geo_point(""), None);
    assert_eq!(extract_geo_point(None::<&str>), None);
    assert_eq!(extract_geo_point("no coordinates here"), None);
    assert_eq!(extract_geo_point("28, 77"), None);
  }

  #[test]
  fn test_unparseable_number_falls_through() {
    // `1.2.3` passes the suffix pattern but is not a number; the prefix form still matches
    assert_eq!(extract_geo_point("1.2.3 N, 4.5 E"), None);
    assert_eq!(extract_geo_point("1.2.3 N, 4.5 E or N 12.5, E 77.25"), point(12.5, 77.25));
  }

  #[test]
  fn test_display() {
    let p = GeoPoint {
      latitude: 11.5,
      longitude: -78.25,
    };
    assert_eq!(p.to_string(), "11.5, -78.25");
  }
}
