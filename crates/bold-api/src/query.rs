//! Public data query parameters and query-string serialization
//!
//! BOLD expects raw `key=value` pairs joined with `&`, with multi-value
//! parameters joined by `|`. Nothing is percent-encoded here; the transport
//! encodes whatever the URL grammar requires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter between values of a multi-value parameter
pub const VALUE_DELIMITER: &str = "|";

/// Wire names of parameters that are not public data filters
pub mod param {
    pub const FORMAT: &str = "format";
    pub const DATA_TYPE: &str = "dataType";
    pub const MARKER: &str = "marker";
    pub const DB: &str = "db";
    pub const SEQUENCE: &str = "sequence";
    pub const TAX_ID: &str = "taxId";
    pub const DATA_TYPES: &str = "dataTypes";
    pub const INCLUDE_TREE: &str = "includeTree";
    pub const TAX_NAME: &str = "taxName";
    pub const FUZZY: &str = "fuzzy";
}

/// Ordered list of `name=value` pairs making up a query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single pair
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.pairs.push((name, value.into()));
    }

    /// Append a multi-value pair. Empty lists contribute nothing.
    pub fn push_list<S: AsRef<str>>(&mut self, name: &'static str, values: &[S]) {
        if values.is_empty() {
            return;
        }
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(VALUE_DELIMITER);
        self.push(name, joined);
    }

    /// Append a boolean as lowercase `true` / `false`
    pub fn push_bool(&mut self, name: &'static str, value: bool) {
        self.push(name, if value { "true" } else { "false" });
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

/// Filter fields of a public data query, in serialization order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicField {
    Taxon,
    Ids,
    Bin,
    Container,
    Institutions,
    Researchers,
    Geo,
}

impl PublicField {
    pub const ALL: [PublicField; 7] = [
        PublicField::Taxon,
        PublicField::Ids,
        PublicField::Bin,
        PublicField::Container,
        PublicField::Institutions,
        PublicField::Researchers,
        PublicField::Geo,
    ];

    /// Parameter name in the BOLD query grammar
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Taxon => "taxon",
            Self::Ids => "ids",
            Self::Bin => "bin",
            Self::Container => "container",
            Self::Institutions => "institutions",
            Self::Researchers => "researchers",
            Self::Geo => "geo",
        }
    }
}

/// Filters shared by the public data endpoints (stats, specimen, sequence,
/// combined, trace)
///
/// Output format, summary data type and markers are endpoint arguments and
/// are not part of this bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicDataQuery {
    /// Taxon names at any rank
    pub taxon: Option<Vec<String>>,
    /// Sample IDs, process IDs, museum IDs or field IDs
    pub ids: Option<Vec<String>>,
    /// Barcode Index Numbers, e.g. `BOLD:AAA0001`
    #[serde(rename = "bin")]
    pub bin_ids: Option<Vec<String>>,
    /// Project or dataset codes
    pub container: Option<Vec<String>>,
    pub institutions: Option<Vec<String>>,
    pub researchers: Option<Vec<String>>,
    /// Countries or provinces/states
    pub geo: Option<Vec<String>>,
}

fn collect<I, S>(values: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Some(values.into_iter().map(Into::into).collect())
}

impl PublicDataQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn taxon<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.taxon = collect(values);
        self
    }

    pub fn ids<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.ids = collect(values);
        self
    }

    pub fn bin<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.bin_ids = collect(values);
        self
    }

    pub fn container<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.container = collect(values);
        self
    }

    pub fn institutions<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.institutions = collect(values);
        self
    }

    pub fn researchers<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.researchers = collect(values);
        self
    }

    pub fn geo<I: IntoIterator<Item = S>, S: Into<String>>(mut self, values: I) -> Self {
        self.geo = collect(values);
        self
    }

    /// Values stored for `field`
    pub fn get(&self, field: PublicField) -> Option<&[String]> {
        match field {
            PublicField::Taxon => self.taxon.as_deref(),
            PublicField::Ids => self.ids.as_deref(),
            PublicField::Bin => self.bin_ids.as_deref(),
            PublicField::Container => self.container.as_deref(),
            PublicField::Institutions => self.institutions.as_deref(),
            PublicField::Researchers => self.researchers.as_deref(),
            PublicField::Geo => self.geo.as_deref(),
        }
    }

    /// True when no filter would reach the query string
    pub fn is_empty(&self) -> bool {
        PublicField::ALL
            .iter()
            .all(|field| self.get(*field).map_or(true, |values| values.is_empty()))
    }

    /// Serialize the filters as query pairs
    pub fn query_pairs(&self) -> QueryString {
        let mut query = QueryString::new();
        for field in PublicField::ALL {
            if let Some(values) = self.get(field) {
                query.push_list(field.wire_name(), values);
            }
        }
        query
    }

    /// Serialize the filters as a query-string fragment (no leading `?`)
    pub fn to_query_string(&self) -> String {
        self.query_pairs().to_string()
    }
}
