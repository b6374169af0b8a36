//! Rust client for the BOLD Systems (Barcode of Life Data) web services
//!
//! This crate turns typed query parameters into the query-string dialect
//! understood by BOLD, issues the GET request and hands back the raw
//! response (or parsed JSON where the service returns JSON).
//!
//! # Example
//!
//! ```no_run
//! use bold_api::{BoldClient, PublicDataQuery, ReturnFormat, SummaryDataType};
//!
//! # async fn example() -> Result<(), bold_api::BoldError> {
//! let client = BoldClient::new();
//! let query = PublicDataQuery::new().taxon(["Bombus"]).geo(["France"]);
//!
//! // Summary statistics as JSON
//! let stats = client
//!     .summary_stats(&query, Some(ReturnFormat::Json), SummaryDataType::DrillDown)
//!     .await?;
//! println!("{:?}", stats);
//!
//! // Specimen records as TSV (the default format)
//! let tsv = client.specimens(&query, None).await?;
//! println!("{}", String::from_utf8_lossy(&tsv));
//!
//! // COI-5P sequences written to disk
//! client
//!     .download_sequences(&query, &["COI-5P".to_string()], "bombus.fasta")
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! ## Public data API
//! - `GET /API_Public/stats` - Summary statistics
//! - `GET /API_Public/specimen` - Specimen records
//! - `GET /API_Public/sequence` - Sequences (FASTA)
//! - `GET /API_Public/combined` - Specimen records with sequences
//! - `GET /API_Public/trace` - Trace file archive
//!
//! ## Taxonomy API
//! - `GET /API_Tax/TaxonData` - Taxon lookup by ID
//! - `GET /API_Tax/TaxonSearch` - Taxon lookup by name
//!
//! ## Identification engine
//! - `GET /Ids_xml` - Identify a COI sequence

mod client;
mod config;
mod error;
mod query;
mod taxonomy;
mod transport;
mod types;

pub use client::{BoldClient, Endpoint, SummaryStats};
pub use config::{ClientConfig, TimeoutClass, DEFAULT_BASE_URL};
pub use error::{BoldError, Result};
pub use query::{param, PublicDataQuery, PublicField, QueryString, VALUE_DELIMITER};
pub use taxonomy::{TaxonIdQuery, TaxonNameQuery};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use types::{IdEngineDatabase, ReturnFormat, SummaryDataType, TaxonDataType};
