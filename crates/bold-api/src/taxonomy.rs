//! Taxonomy API query parameters

use crate::query::{param, QueryString};
use crate::types::TaxonDataType;
use serde::{Deserialize, Serialize};

/// Lookup of taxa by BOLD taxon ID (`API_Tax/TaxonData`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonIdQuery {
    pub tax_ids: Option<Vec<String>>,
    pub data_types: Option<Vec<TaxonDataType>>,
    /// Also return every taxon below the requested ones
    pub include_tree: bool,
}

impl TaxonIdQuery {
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(tax_ids: I) -> Self {
        Self {
            tax_ids: Some(tax_ids.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    pub fn data_types<I: IntoIterator<Item = TaxonDataType>>(mut self, data_types: I) -> Self {
        self.data_types = Some(data_types.into_iter().collect());
        self
    }

    pub fn include_tree(mut self, include_tree: bool) -> Self {
        self.include_tree = include_tree;
        self
    }

    pub fn query_pairs(&self) -> QueryString {
        let mut query = QueryString::new();
        if let Some(ids) = &self.tax_ids {
            query.push_list(param::TAX_ID, ids.as_slice());
        }
        if let Some(types) = &self.data_types {
            let wire: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
            query.push_list(param::DATA_TYPES, wire.as_slice());
        }
        query.push_bool(param::INCLUDE_TREE, self.include_tree);
        query
    }

    pub fn to_query_string(&self) -> String {
        self.query_pairs().to_string()
    }
}

/// Lookup of taxa by scientific name (`API_Tax/TaxonSearch`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonNameQuery {
    pub names: Option<Vec<String>>,
    /// Allow approximate name matches
    pub fuzzy: Option<bool>,
}

impl TaxonNameQuery {
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(names: I) -> Self {
        Self {
            names: Some(names.into_iter().map(Into::into).collect()),
            fuzzy: None,
        }
    }

    pub fn fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = Some(fuzzy);
        self
    }

    pub fn query_pairs(&self) -> QueryString {
        let mut query = QueryString::new();
        if let Some(names) = &self.names {
            query.push_list(param::TAX_NAME, names.as_slice());
        }
        if let Some(fuzzy) = self.fuzzy {
            query.push_bool(param::FUZZY, fuzzy);
        }
        query
    }

    pub fn to_query_string(&self) -> String {
        self.query_pairs().to_string()
    }
}
