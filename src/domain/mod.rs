//! Domain types for country records.
//!
//! A [`Country`] is deserialized verbatim from the REST Countries API and
//! never mutated locally. The API does not guarantee every field, so the
//! nested name/flag fields are all optional; callers go through the
//! accessor methods rather than reaching into the raw structure.

use serde::{Deserialize, Serialize};

/// A single country record as returned by the REST Countries API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Name block (`name.common` is the display name).
    #[serde(default)]
    pub name: Option<CountryName>,
    /// Flag image URLs.
    #[serde(default)]
    pub flags: Option<CountryFlags>,
    /// Geographic region (e.g. "Europe").
    #[serde(default)]
    pub region: Option<String>,
}

/// The name block of a country record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    /// Common display name (e.g. "France").
    #[serde(default)]
    pub common: Option<String>,
    /// Official long-form name (e.g. "French Republic").
    #[serde(default)]
    pub official: Option<String>,
}

/// Flag image references for a country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryFlags {
    /// PNG flag URL.
    #[serde(default)]
    pub png: Option<String>,
    /// SVG flag URL.
    #[serde(default)]
    pub svg: Option<String>,
    /// Alt text describing the flag.
    #[serde(default)]
    pub alt: Option<String>,
}

impl Country {
    /// The common display name, if the record carries one.
    ///
    /// Records without a name are excluded by the search filter, so a
    /// missing name is expected to be rare in rendered output.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_ref()?.common.as_deref()
    }

    /// URL of the flag image, preferring the PNG rendition.
    pub fn flag_url(&self) -> Option<&str> {
        let flags = self.flags.as_ref()?;
        flags.png.as_deref().or(flags.svg.as_deref())
    }

    /// Geographic region, empty when the record omits it.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or("")
    }
}
