//! Column type detection
//!
//! Every non-empty body value votes for one [`ColumnType`]; the type with the
//! most votes wins, ties going to the earlier type in [`ColumnType::ALL`].
//! Numeric winners are refined to `lat`/`lon` from the header text.

use lazy_regex::{lazy_regex, Lazy};
use regex::Regex;

use crate::column::ColumnType;
use crate::geo::GeoDictionary;

/// Numbers as pasted from spreadsheets: `1 234,5`, `-12.5`, `1.234,5`
static NUMERIC_VOTE: Lazy<Regex> = lazy_regex!(r"^-?([0-9,\s]+(\.[0-9]+)?|[0-9.\s]+(,[0-9]+))$");

/// Same as [`NUMERIC_VOTE`] but also accepts `1.234`-style grouping
static NUMERIC_CHECK: Lazy<Regex> = lazy_regex!(r"^-?([0-9,\s]+(\.[0-9]+)?|[0-9.\s]+(,[0-9]+)?)$");

static COORDINATE_CHECK: Lazy<Regex> = lazy_regex!(r"^-?[0-9,\s]+(\.[0-9]+)?$");

static DMS: Lazy<Regex> = lazy_regex!(
    r#"^(-)?\s*([0-9]{1,3}(?:[.,][0-9]+)?)\s*°\s*(?:([0-9]{1,2})\s*['′]\s*)?(?:([0-9]{1,2}(?:[.,][0-9]+)?)\s*(?:["″]|''|′′)\s*)?([NSEWnsew])?$"#
);

static LON_HEADER: Lazy<Regex> = lazy_regex!(r"^(?:lon(?:g?\.|gitude)?|lng|x)$"i);

static LAT_HEADER: Lazy<Regex> = lazy_regex!(r"^(?:y|lat(?:\.|itude)?)$"i);

static WHITESPACE: Lazy<Regex> = lazy_regex!(r"\s+");

/// Compass direction of a DMS coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// North or south
    pub fn is_latitude(&self) -> bool {
        matches!(self, Hemisphere::North | Hemisphere::South)
    }

    fn sign(&self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

/// A degrees/minutes/seconds coordinate such as `48°51'24"N`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub hemisphere: Option<Hemisphere>,
    pub negative: bool,
}

impl Dms {
    /// Parse DMS notation, rejecting out-of-range parts
    pub fn parse(value: &str) -> Option<Dms> {
        let caps = DMS.captures(value.trim())?;

        let number = |i: usize| -> Option<f64> {
            caps.get(i)
                .map_or(Some(0.0), |m| m.as_str().replace(',', ".").parse().ok())
        };

        let dms = Dms {
            degrees: number(2)?,
            minutes: number(3)?,
            seconds: number(4)?,
            hemisphere: caps
                .get(5)
                .and_then(|m| m.as_str().chars().next())
                .and_then(Hemisphere::from_char),
            negative: caps.get(1).is_some(),
        };

        if dms.negative && dms.hemisphere.is_some() {
            return None;
        }
        if dms.minutes >= 60.0 || dms.seconds >= 60.0 || dms.magnitude() > 180.0 {
            return None;
        }
        Some(dms)
    }

    fn magnitude(&self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }

    /// Signed decimal degrees; south and west are negative
    pub fn to_decimal(&self) -> f64 {
        let sign = match (self.negative, self.hemisphere) {
            (true, _) => -1.0,
            (false, Some(h)) => h.sign(),
            (false, None) => 1.0,
        };
        sign * self.magnitude()
    }

    /// Whether the value reads as a latitude
    ///
    /// Without a hemisphere letter, anything above 90 degrees must be a
    /// longitude.
    pub fn reads_as_latitude(&self) -> bool {
        match self.hemisphere {
            Some(h) => h.is_latitude(),
            None => self.magnitude() <= 90.0,
        }
    }
}

/// Parse a number the way pasted spreadsheet data writes it
///
/// Whitespace groups thousands. When both `.` and `,` appear the last one is
/// the decimal separator; a separator repeated several times groups
/// thousands; a single one is decimal. The longest numeric prefix is used.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let compact = WHITESPACE.replace_all(value.trim(), "");
    let last_dot = compact.rfind('.');
    let last_comma = compact.rfind(',');

    let normalized = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if dot > comma => compact.replace(',', ""),
        (Some(_), Some(_)) => compact.replace('.', "").replace(',', "."),
        (None, Some(_)) if compact.matches(',').count() == 1 => compact.replace(',', "."),
        (None, Some(_)) => compact.replace(',', ""),
        (Some(_), None) if compact.matches('.').count() > 1 => compact.replace('.', ""),
        _ => compact.into_owned(),
    };
    parse_float_prefix(&normalized)
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut digits = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when digits follow it
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'-' | b'+') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Vote counts per type, indexed like [`ColumnType::ALL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Votes([usize; 7]);

impl Votes {
    fn add(&mut self, ty: ColumnType) {
        self.0[ty.position()] += 1;
    }

    /// Votes for a type
    pub fn get(&self, ty: ColumnType) -> usize {
        self.0[ty.position()]
    }

    /// Type with the most votes; earlier types win ties
    pub fn winner(&self) -> ColumnType {
        let mut best = ColumnType::Text;
        for ty in ColumnType::ALL {
            if self.get(ty) > self.get(best) {
                best = ty;
            }
        }
        best
    }
}

/// Outcome of type inference for one column
#[derive(Debug, Clone, PartialEq)]
pub struct Inference {
    /// Inferred type
    pub column_type: ColumnType,
    /// Votes cast by the body values
    pub votes: Votes,
    /// Number of non-empty body values
    pub sample_size: usize,
}

impl Inference {
    /// Share of the values that voted for a type
    pub fn share(&self, ty: ColumnType) -> f64 {
        if self.sample_size == 0 {
            0.0
        } else {
            self.votes.get(ty) as f64 / self.sample_size as f64
        }
    }
}

enum HeaderHint {
    Lat,
    Lon,
}

fn header_hint(header: Option<&str>) -> Option<HeaderHint> {
    let header = header?.trim();
    if LON_HEADER.is_match(header) {
        Some(HeaderHint::Lon)
    } else if LAT_HEADER.is_match(header) {
        Some(HeaderHint::Lat)
    } else {
        None
    }
}

/// Type a single value votes for
pub fn classify(value: &str, dictionary: &GeoDictionary) -> ColumnType {
    if NUMERIC_VOTE.is_match(value) {
        ColumnType::Numeric
    } else if dictionary.matches(value) {
        ColumnType::Geo
    } else if let Some(dms) = Dms::parse(value) {
        if dms.reads_as_latitude() {
            ColumnType::LatDms
        } else {
            ColumnType::LonDms
        }
    } else {
        ColumnType::Text
    }
}

/// Infer a column type from its header and body values
pub fn infer<'a, I>(header: Option<&str>, values: I, dictionary: &GeoDictionary) -> Inference
where
    I: IntoIterator<Item = &'a str>,
{
    let mut votes = Votes::default();
    let mut sample_size = 0;
    let mut hemisphere_seen = false;

    for value in values.into_iter().filter(|v| !is_blank(v)) {
        let ty = classify(value, dictionary);
        if matches!(ty, ColumnType::LatDms | ColumnType::LonDms) {
            hemisphere_seen |= Dms::parse(value).map_or(false, |d| d.hemisphere.is_some());
        }
        votes.add(ty);
        sample_size += 1;
    }

    let column_type = match (votes.winner(), header_hint(header)) {
        (ColumnType::Numeric, Some(HeaderHint::Lon)) => ColumnType::Lon,
        (ColumnType::Numeric, Some(HeaderHint::Lat)) => ColumnType::Lat,
        (ColumnType::LatDms | ColumnType::LonDms, Some(HeaderHint::Lon)) if !hemisphere_seen => {
            ColumnType::LonDms
        }
        (ColumnType::LatDms | ColumnType::LonDms, Some(HeaderHint::Lat)) if !hemisphere_seen => {
            ColumnType::LatDms
        }
        (winner, _) => winner,
    };

    tracing::trace!(%column_type, sample_size, "inferred column type");

    Inference {
        column_type,
        votes,
        sample_size,
    }
}

/// Whether a raw value fits a column type
pub fn accepts(ty: ColumnType, value: &str, dictionary: &GeoDictionary) -> bool {
    match ty {
        ColumnType::Text => true,
        ColumnType::Numeric => NUMERIC_CHECK.is_match(value),
        ColumnType::Lat => coordinate_within(value, 90.0),
        ColumnType::Lon => coordinate_within(value, 180.0),
        ColumnType::Geo => dictionary.matches(value),
        ColumnType::LatDms => Dms::parse(value).map_or(false, |d| {
            !matches!(d.hemisphere, Some(Hemisphere::East | Hemisphere::West))
                && d.magnitude() <= 90.0
        }),
        ColumnType::LonDms => Dms::parse(value).map_or(false, |d| {
            !matches!(d.hemisphere, Some(Hemisphere::North | Hemisphere::South))
        }),
    }
}

fn coordinate_within(value: &str, bound: f64) -> bool {
    COORDINATE_CHECK.is_match(value)
        && parse_decimal(value).map_or(false, |v| v.abs() <= bound)
}

/// Values made only of whitespace carry no information
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn world() -> std::sync::Arc<GeoDictionary> {
        GeoDictionary::world()
    }

    #[test]
    fn test_classify_values() {
        let dict = world();
        assert_eq!(classify("12", &dict), ColumnType::Numeric);
        assert_eq!(classify("-1 234,5", &dict), ColumnType::Numeric);
        assert_eq!(classify("1.234,5", &dict), ColumnType::Numeric);
        assert_eq!(classify("Germany", &dict), ColumnType::Geo);
        assert_eq!(classify("48°51'24\"N", &dict), ColumnType::LatDms);
        assert_eq!(classify("2°21'E", &dict), ColumnType::LonDms);
        assert_eq!(classify("120°30'", &dict), ColumnType::LonDms);
        assert_eq!(classify("hello", &dict), ColumnType::Text);
    }

    #[test]
    fn test_only_ascii_digits_count() {
        let dict = world();
        assert_eq!(classify("١٢٣", &dict), ColumnType::Text);
        assert_eq!(classify("４８°５１'N", &dict), ColumnType::Text);
        assert!(!accepts(ColumnType::Numeric, "١٢", &dict));
        assert!(!accepts(ColumnType::Lat, "٤٨", &dict));
        assert!(Dms::parse("４８°N").is_none());
    }

    #[test]
    fn test_dms_parse() {
        let dms = Dms::parse("48°51'24\"N").unwrap();
        assert_eq!(dms.degrees, 48.0);
        assert_eq!(dms.minutes, 51.0);
        assert_eq!(dms.seconds, 24.0);
        assert_eq!(dms.hemisphere, Some(Hemisphere::North));
        assert!((dms.to_decimal() - 48.856_666).abs() < 1e-5);

        let west = Dms::parse("73° 59′ 8″ W").unwrap();
        assert!(west.to_decimal() < 0.0);

        assert!((Dms::parse("-33°52'").unwrap().to_decimal() + 33.866_666).abs() < 1e-5);
        assert!((Dms::parse("12,5°").unwrap().to_decimal() - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_dms_rejects_out_of_range() {
        assert!(Dms::parse("48°75'").is_none());
        assert!(Dms::parse("48°10'61\"").is_none());
        assert!(Dms::parse("181°").is_none());
        assert!(Dms::parse("-48°10'N").is_none());
        assert!(Dms::parse("48 10 N").is_none());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("12,5"), Some(12.5));
        assert_eq!(parse_decimal("1 234.5"), Some(1234.5));
        assert_eq!(parse_decimal("1,234.5"), Some(1234.5));
        assert_eq!(parse_decimal("1.234,5"), Some(1234.5));
        assert_eq!(parse_decimal("1 234,5"), Some(1234.5));
        assert_eq!(parse_decimal("1.234.567"), Some(1_234_567.0));
        assert_eq!(parse_decimal("1,234,567"), Some(1_234_567.0));
        assert_eq!(parse_decimal("-3.25"), Some(-3.25));
        assert_eq!(parse_decimal("2.5e3"), Some(2500.0));
        assert_eq!(parse_decimal("7km"), Some(7.0));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_majority_vote() {
        let dict = world();
        let inference = infer(Some("pop"), ["1", "2", "3", "n/a"], &dict);
        assert_eq!(inference.column_type, ColumnType::Numeric);
        assert_eq!(inference.sample_size, 4);
        assert_eq!(inference.votes.get(ColumnType::Text), 1);
        assert!((inference.share(ColumnType::Numeric) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_ties_prefer_earlier_type() {
        let dict = world();
        let inference = infer(None, ["1", "abc"], &dict);
        assert_eq!(inference.column_type, ColumnType::Text);

        let inference = infer(None, ["1", "France"], &dict);
        assert_eq!(inference.column_type, ColumnType::Numeric);
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let dict = world();
        let inference = infer(None, ["", "  ", "France"], &dict);
        assert_eq!(inference.column_type, ColumnType::Geo);
        assert_eq!(inference.sample_size, 1);

        let inference = infer(None, std::iter::empty(), &dict);
        assert_eq!(inference.column_type, ColumnType::Text);
        assert_eq!(inference.share(ColumnType::Text), 0.0);
    }

    #[test]
    fn test_header_hint_turns_numbers_into_coordinates() {
        let dict = world();
        for header in ["lon", "Long.", "longitude", "LNG", "x"] {
            assert_eq!(infer(Some(header), ["2.35"], &dict).column_type, ColumnType::Lon);
        }
        for header in ["lat", "Lat.", "Latitude", "Y"] {
            assert_eq!(infer(Some(header), ["48.85"], &dict).column_type, ColumnType::Lat);
        }
        assert_eq!(infer(Some("year"), ["2020"], &dict).column_type, ColumnType::Numeric);
        assert_eq!(infer(Some("lon"), ["Paris?"], &dict).column_type, ColumnType::Text);
    }

    #[test]
    fn test_header_hint_for_dms_without_hemisphere() {
        let dict = world();
        assert_eq!(
            infer(Some("longitude"), ["2°21'", "3°10'"], &dict).column_type,
            ColumnType::LonDms
        );
        assert_eq!(
            infer(Some("longitude"), ["48°51'N"], &dict).column_type,
            ColumnType::LatDms
        );
    }

    #[test]
    fn test_accepts() {
        let dict = world();
        assert!(accepts(ColumnType::Text, "anything", &dict));
        assert!(accepts(ColumnType::Numeric, "1.234", &dict));
        assert!(!accepts(ColumnType::Numeric, "12a", &dict));
        assert!(accepts(ColumnType::Lat, "48,85", &dict));
        assert!(!accepts(ColumnType::Lat, "120.5", &dict));
        assert!(accepts(ColumnType::Lon, "120.5", &dict));
        assert!(!accepts(ColumnType::Lon, "1,5e3", &dict));
        assert!(accepts(ColumnType::Geo, "Japan", &dict));
        assert!(!accepts(ColumnType::Geo, "Atlantis", &dict));
        assert!(accepts(ColumnType::LatDms, "-33°52'", &dict));
        assert!(!accepts(ColumnType::LatDms, "2°21'E", &dict));
        assert!(accepts(ColumnType::LonDms, "120°30'W", &dict));
        assert!(!accepts(ColumnType::LonDms, "48°51'N", &dict));
    }
}
