//! Profile directory scanning and the country/city/protocol index.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::constants;
use crate::logger::{self, LogLevel};
use crate::state::{ProfileRef, Protocol};

/// Country, city and protocol encoded in a profile file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedName {
    pub country: String,
    pub city: String,
    pub protocol: Protocol,
}

/// Parse `<Country>-<City>[-TCP].<ext>`.
///
/// Returns `None` for names that do not follow the convention: wrong
/// extension or fewer than two hyphen-separated segments. Segments may be
/// empty. Underscores become spaces.
pub fn parse_profile_name(file_name: &str, extension: &str) -> Option<ParsedName> {
    let stem = file_name.strip_suffix(extension)?.strip_suffix('.')?;

    let (base, protocol) = match stem.strip_suffix(constants::TCP_MARKER) {
        Some(base) => (base, Protocol::Tcp),
        None => (stem, Protocol::Udp),
    };

    let mut parts = base.split(constants::SEGMENT_SEPARATOR);
    let country = parts.next()?;
    let city = parts.next()?;

    Some(ParsedName {
        country: country.replace('_', " "),
        city: city.replace('_', " "),
        protocol,
    })
}

/// Protocols available for one city, in directory-encounter order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CityProfiles {
    entries: Vec<(Protocol, ProfileRef)>,
}

impl CityProfiles {
    /// Insert or replace; a replaced protocol keeps its original position.
    fn insert(&mut self, protocol: Protocol, profile: ProfileRef) {
        if let Some(slot) = self.entries.iter_mut().find(|(p, _)| *p == protocol) {
            slot.1 = profile;
        } else {
            self.entries.push((protocol, profile));
        }
    }

    pub fn protocols(&self) -> Vec<Protocol> {
        self.entries.iter().map(|(p, _)| *p).collect()
    }

    pub fn get(&self, protocol: Protocol) -> Option<&ProfileRef> {
        self.entries
            .iter()
            .find(|(p, _)| *p == protocol)
            .map(|(_, profile)| profile)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Country → city → protocol → profile.
///
/// Countries and cities iterate in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileIndex {
    countries: BTreeMap<String, BTreeMap<String, CityProfiles>>,
}

impl ProfileIndex {
    /// Build the index from directory entry names.
    ///
    /// Names that don't parse are skipped. When the same country/city/protocol
    /// shows up twice, the later name wins.
    pub fn from_file_names<I, S>(dir: &Path, extension: &str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for name in names {
            let name = name.as_ref();
            let Some(parsed) = parse_profile_name(name, extension) else {
                if name.ends_with(extension) {
                    logger::log(
                        LogLevel::Debug,
                        "INDEX",
                        format!("Skipped '{name}': does not match <Country>-<City>"),
                    );
                    skipped += 1;
                }
                continue;
            };

            let city = index
                .countries
                .entry(parsed.country)
                .or_default()
                .entry(parsed.city)
                .or_default();
            city.insert(parsed.protocol, ProfileRef::new(dir, name));
        }

        logger::log(
            LogLevel::Info,
            "INDEX",
            format!(
                "Indexed {} profiles in {} countries{}",
                index.len(),
                index.countries.len(),
                if skipped > 0 {
                    format!(", {skipped} skipped")
                } else {
                    String::new()
                }
            ),
        );

        index
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Total number of indexed profiles.
    pub fn len(&self) -> usize {
        self.countries
            .values()
            .flat_map(BTreeMap::values)
            .map(CityProfiles::len)
            .sum()
    }

    pub fn countries(&self) -> Vec<String> {
        self.countries.keys().cloned().collect()
    }

    pub fn cities(&self, country: &str) -> Vec<String> {
        self.countries
            .get(country)
            .map(|cities| cities.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn city(&self, country: &str, city: &str) -> Option<&CityProfiles> {
        self.countries.get(country)?.get(city)
    }

    pub fn protocols(&self, country: &str, city: &str) -> Vec<Protocol> {
        self.city(country, city)
            .map(CityProfiles::protocols)
            .unwrap_or_default()
    }

    pub fn get(&self, country: &str, city: &str, protocol: Protocol) -> Option<&ProfileRef> {
        self.city(country, city)?.get(protocol)
    }

    /// Every entry as `(country, city, protocol, profile)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, Protocol, &ProfileRef)> {
        self.countries.iter().flat_map(|(country, cities)| {
            cities.iter().flat_map(move |(city, profiles)| {
                profiles
                    .entries
                    .iter()
                    .map(move |(p, r)| (country.as_str(), city.as_str(), *p, r))
            })
        })
    }
}

/// Scan `dir` and build the profile index.
///
/// Directories are ignored even if their name matches. An empty index is a
/// valid result; callers report it separately from a listing failure.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn load_index(dir: &Path, extension: &str) -> std::io::Result<ProfileIndex> {
    logger::log(
        LogLevel::Debug,
        "INDEX",
        format!("Scanning {} for .{extension} profiles", dir.display()),
    );

    let entries = fs::read_dir(dir).map_err(|e| {
        logger::log(
            LogLevel::Error,
            "INDEX",
            format!("Failed to list {}: {e}", dir.display()),
        );
        e
    })?;

    let names: Vec<String> = entries
        .flatten()
        .filter(|entry| !entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    Ok(ProfileIndex::from_file_names(dir, extension, names))
}
