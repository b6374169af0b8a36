//! Enumerated request values and their wire strings
//!
//! Every variant maps to exactly one string understood by the BOLD query
//! grammar, so an invalid wire value can never be constructed.

use crate::error::BoldError;
use crate::query::param;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output formats understood by the public data API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReturnFormat {
    Json,
    Xml,
    Tsv,
    /// Darwin Core archive
    Dwc,
    Fasta,
}

impl ReturnFormat {
    pub const ALL: [ReturnFormat; 5] = [
        ReturnFormat::Json,
        ReturnFormat::Xml,
        ReturnFormat::Tsv,
        ReturnFormat::Dwc,
        ReturnFormat::Fasta,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Tsv => "tsv",
            Self::Dwc => "dwc",
            Self::Fasta => "fasta",
        }
    }
}

/// Level of detail for the summary statistics endpoint
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SummaryDataType {
    Overview,
    #[default]
    DrillDown,
}

impl SummaryDataType {
    pub const ALL: [SummaryDataType; 2] = [SummaryDataType::Overview, SummaryDataType::DrillDown];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::DrillDown => "drill_down",
        }
    }
}

/// Data sections that can be requested from the taxonomy ID service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaxonDataType {
    #[serde(rename = "basic")]
    Basic,
    #[serde(rename = "stats")]
    Stats,
    #[serde(rename = "geo")]
    Geo,
    #[serde(rename = "images")]
    Images,
    #[serde(rename = "sequencinglabs")]
    SequencingLabs,
    #[serde(rename = "depository")]
    Depository,
    #[serde(rename = "thirdparty")]
    ThirdParty,
    #[serde(rename = "all")]
    All,
}

impl TaxonDataType {
    pub const ALL: [TaxonDataType; 8] = [
        TaxonDataType::Basic,
        TaxonDataType::Stats,
        TaxonDataType::Geo,
        TaxonDataType::Images,
        TaxonDataType::SequencingLabs,
        TaxonDataType::Depository,
        TaxonDataType::ThirdParty,
        TaxonDataType::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Stats => "stats",
            Self::Geo => "geo",
            Self::Images => "images",
            Self::SequencingLabs => "sequencinglabs",
            Self::Depository => "depository",
            Self::ThirdParty => "thirdparty",
            Self::All => "all",
        }
    }
}

/// Reference libraries searchable by the identification engine
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IdEngineDatabase {
    /// Every COI barcode record, including those without species names
    #[default]
    #[serde(rename = "COX1")]
    Cox1,
    /// COI records identified to species level
    #[serde(rename = "COX1_SPECIES")]
    Cox1Species,
    /// Published COI records identified to species level
    #[serde(rename = "COX1_SPECIES_PUBLIC")]
    Cox1SpeciesPublic,
    /// COI records with at least 640bp
    #[serde(rename = "COX1_L640bp")]
    Cox1L640bp,
}

impl IdEngineDatabase {
    pub const ALL: [IdEngineDatabase; 4] = [
        IdEngineDatabase::Cox1,
        IdEngineDatabase::Cox1Species,
        IdEngineDatabase::Cox1SpeciesPublic,
        IdEngineDatabase::Cox1L640bp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cox1 => "COX1",
            Self::Cox1Species => "COX1_SPECIES",
            Self::Cox1SpeciesPublic => "COX1_SPECIES_PUBLIC",
            Self::Cox1L640bp => "COX1_L640bp",
        }
    }
}

/// Parse a value by matching it (case-insensitively) against the wire strings of `all`
fn parse_wire<T: Copy>(
    argument: &'static str,
    s: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
) -> Result<T, BoldError> {
    all.iter()
        .copied()
        .find(|v| as_str(*v).eq_ignore_ascii_case(s))
        .ok_or_else(|| {
            let accepted: Vec<&'static str> = all.iter().map(|v| as_str(*v)).collect();
            BoldError::invalid_argument(argument, s, &accepted)
        })
}

impl FromStr for ReturnFormat {
    type Err = BoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(param::FORMAT, s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for SummaryDataType {
    type Err = BoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(param::DATA_TYPE, s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for TaxonDataType {
    type Err = BoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(param::DATA_TYPES, s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for IdEngineDatabase {
    type Err = BoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(param::DB, s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for ReturnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SummaryDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaxonDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for IdEngineDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
