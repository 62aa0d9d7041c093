//! Place dictionary used to recognise geographic names in cells
//!
//! A value matches when it is one of the dictionary's ISO codes (exact, upper
//! case) or one of its names and aliases (case, accent and punctuation
//! insensitive). Matching codes only in upper case keeps ordinary words such as
//! "in" or "no" out of `geo` columns.

mod countries;

use std::sync::Arc;

use ahash::AHashMap;
use once_cell::sync::Lazy;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A named place with its codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Primary code (ISO 3166 alpha-3 for countries)
    pub code: String,
    /// Secondary short code (ISO 3166 alpha-2 for countries)
    pub alpha2: Option<String>,
    /// Display name
    pub name: String,
    /// Alternative spellings
    pub aliases: Vec<String>,
}

impl Place {
    /// Create a place with a code and name
    pub fn new<C: Into<String>, N: Into<String>>(code: C, name: N) -> Self {
        Self {
            code: code.into(),
            alpha2: None,
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    /// Set the short code
    pub fn with_alpha2<S: Into<String>>(mut self, alpha2: S) -> Self {
        self.alpha2 = Some(alpha2.into());
        self
    }

    /// Add an alias
    pub fn with_alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.aliases.push(alias.into());
        self
    }
}

static WORLD: Lazy<Arc<GeoDictionary>> = Lazy::new(|| {
    let dictionary = GeoDictionary::from_places(countries::WORLD.iter().map(
        |&(code, alpha2, name, aliases)| Place {
            code: code.to_string(),
            alpha2: Some(alpha2.to_string()),
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        },
    ));
    tracing::debug!(places = dictionary.len(), "built world place dictionary");
    Arc::new(dictionary)
});

/// Lookup table of places
#[derive(Debug, Clone, Default)]
pub struct GeoDictionary {
    places: Vec<Place>,
    codes: AHashMap<String, usize>,
    names: AHashMap<String, usize>,
}

impl GeoDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from places; later places win on key collisions
    pub fn from_places<I: IntoIterator<Item = Place>>(places: I) -> Self {
        let mut dictionary = Self::new();
        for place in places {
            dictionary.insert(place);
        }
        dictionary
    }

    /// The built-in country dictionary
    pub fn world() -> Arc<GeoDictionary> {
        Arc::clone(&WORLD)
    }

    /// Add a place, replacing whatever its keys pointed to before
    pub fn insert(&mut self, place: Place) {
        let index = self.places.len();

        self.codes.insert(place.code.trim().to_uppercase(), index);
        if let Some(alpha2) = &place.alpha2 {
            self.codes.insert(alpha2.trim().to_uppercase(), index);
        }

        for name in std::iter::once(&place.name).chain(place.aliases.iter()) {
            let key = normalize(name);
            if !key.is_empty() {
                self.names.insert(key, index);
            }
        }

        self.places.push(place);
    }

    /// Add every place of another dictionary
    pub fn extend(&mut self, other: &GeoDictionary) {
        for place in &other.places {
            self.insert(place.clone());
        }
    }

    /// Find the place a cell value refers to
    pub fn lookup(&self, value: &str) -> Option<&Place> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        if is_code_like(value) {
            if let Some(&index) = self.codes.get(value) {
                return self.places.get(index);
            }
        }

        self.names
            .get(&normalize(value))
            .and_then(|&index| self.places.get(index))
    }

    /// Check whether a value refers to a known place
    pub fn matches(&self, value: &str) -> bool {
        self.lookup(value).is_some()
    }

    /// Number of places
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Check if the dictionary holds no places
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Iterate over places in insertion order
    pub fn places(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }
}

fn is_code_like(value: &str) -> bool {
    (2..=3).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_uppercase())
}

/// Fold a place name into its lookup key
///
/// Accents are stripped, case is lowered, `.`, `'`, `-` and `,` become spaces and
/// whitespace runs collapse to one space.
pub fn normalize(value: &str) -> String {
    let folded: String = value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            '.' | '\'' | '’' | '-' | ',' => ' ',
            other => other,
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Côte d'Ivoire "), "cote d ivoire");
        assert_eq!(normalize("SAINT-MARTIN"), "saint martin");
        assert_eq!(normalize("U.S.A."), "u s a");
    }

    #[test]
    fn test_world_lookup_by_name_and_code() {
        let world = GeoDictionary::world();

        assert_eq!(world.lookup("France").map(|p| p.code.as_str()), Some("FRA"));
        assert_eq!(world.lookup("france").map(|p| p.code.as_str()), Some("FRA"));
        assert_eq!(world.lookup("FR").map(|p| p.code.as_str()), Some("FRA"));
        assert_eq!(world.lookup("DEU").map(|p| p.code.as_str()), Some("DEU"));
        assert_eq!(
            world.lookup("cote d'ivoire").map(|p| p.code.as_str()),
            Some("CIV")
        );
    }

    #[test]
    fn test_lowercase_codes_do_not_match() {
        let world = GeoDictionary::world();
        assert!(world.lookup("in").is_none());
        assert!(world.lookup("no").is_none());
        assert!(world.lookup("IN").is_some());
    }

    #[test]
    fn test_custom_places_override() {
        let mut dictionary = GeoDictionary::new();
        dictionary.insert(Place::new("75", "Paris").with_alias("Lutèce"));
        dictionary.insert(Place::new("13", "Bouches-du-Rhône"));

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.lookup("lutece").map(|p| p.code.as_str()), Some("75"));
        assert_eq!(
            dictionary.lookup("bouches du rhone").map(|p| p.name.as_str()),
            Some("Bouches-du-Rhône")
        );
        assert!(dictionary.lookup("Lyon").is_none());
        assert!(!dictionary.matches("   "));
    }
}
