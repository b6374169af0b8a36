//! BOLD API HTTP client

use crate::config::{ClientConfig, TimeoutClass};
use crate::error::{BoldError, Result};
use crate::query::{param, PublicDataQuery, QueryString};
use crate::taxonomy::{TaxonIdQuery, TaxonNameQuery};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{IdEngineDatabase, ReturnFormat, SummaryDataType};
use std::path::Path;
use tracing::{debug, warn};

/// IUPAC nucleotide codes accepted by the identification engine, plus gap
const NUCLEOTIDE_CODES: [char; 17] = [
    'A', 'C', 'G', 'T', 'U', 'R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V', 'N', '-',
];
const NUCLEOTIDE_CODES_HINT: &str = "IUPAC nucleotide codes (ACGTURYSWKMBDHVN) or -";

/// One remote operation of the BOLD web services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Summary,
    Specimen,
    Sequence,
    Combined,
    Trace,
    TaxonData,
    TaxonSearch,
    IdEngine,
}

impl Endpoint {
    /// Path below the configured base URL
    pub fn path(self) -> &'static str {
        match self {
            Self::Summary => "API_Public/stats",
            Self::Specimen => "API_Public/specimen",
            Self::Sequence => "API_Public/sequence",
            Self::Combined => "API_Public/combined",
            Self::Trace => "API_Public/trace",
            Self::TaxonData => "API_Tax/TaxonData",
            Self::TaxonSearch => "API_Tax/TaxonSearch",
            Self::IdEngine => "Ids_xml",
        }
    }

    pub fn timeout_class(self) -> TimeoutClass {
        match self {
            Self::Sequence | Self::Combined | Self::Trace => TimeoutClass::Long,
            _ => TimeoutClass::Short,
        }
    }

    /// Output formats the endpoint accepts; empty when it takes no format
    pub fn accepted_formats(self) -> &'static [ReturnFormat] {
        use ReturnFormat::*;
        match self {
            Self::Summary => &[Json, Xml],
            Self::Specimen | Self::Combined => &[Tsv, Xml, Json, Dwc],
            _ => &[],
        }
    }

    pub fn default_format(self) -> Option<ReturnFormat> {
        match self {
            Self::Summary => Some(ReturnFormat::Json),
            Self::Specimen | Self::Combined => Some(ReturnFormat::Tsv),
            _ => None,
        }
    }

    /// Pick the requested format, or the endpoint default, and reject
    /// formats the endpoint does not serve
    pub fn resolve_format(self, requested: Option<ReturnFormat>) -> Result<ReturnFormat> {
        let accepted = self.accepted_formats();
        let format = requested
            .or(self.default_format())
            .ok_or_else(|| BoldError::invalid_argument(param::FORMAT, "<none>", &[]))?;

        if !accepted.contains(&format) {
            let names: Vec<&'static str> = accepted.iter().map(|f| f.as_str()).collect();
            return Err(BoldError::invalid_argument(param::FORMAT, format, &names));
        }
        Ok(format)
    }

    /// Full request URL for `query`
    pub fn url(self, base_url: &str, query: &QueryString) -> String {
        if query.is_empty() {
            return format!("{}/{}", base_url, self.path());
        }
        format!("{}/{}?{}", base_url, self.path(), query)
    }
}

/// Response of the summary statistics endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryStats {
    Json(serde_json::Value),
    /// XML body exactly as sent, in whatever encoding the service used
    Xml(Vec<u8>),
}

/// Client for the BOLD public data, taxonomy and identification APIs
///
/// Every call is a single GET; the client keeps no state between calls and
/// can be shared freely across tasks.
pub struct BoldClient<T = ReqwestTransport> {
    transport: T,
    config: ClientConfig,
}

impl BoldClient<ReqwestTransport> {
    /// Create a new client with default settings
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client backed by `reqwest` with custom settings
    pub fn with_config(config: ClientConfig) -> Self {
        let transport = ReqwestTransport::new(&config.user_agent);
        Self { transport, config }
    }
}

impl Default for BoldClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> BoldClient<T> {
    /// Create a client on top of any [`Transport`]
    pub fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue the GET for `endpoint` and return the body of a successful response
    async fn fetch(&self, endpoint: Endpoint, query: &QueryString) -> Result<Vec<u8>> {
        let url = endpoint.url(&self.config.base_url, query);
        let timeout = self.config.timeout_for(endpoint.timeout_class());
        debug!(url = %url, timeout_secs = timeout.as_secs(), "Querying BOLD");

        let response = self.transport.get(&url, timeout).await?;

        if !response.is_success() {
            warn!(status = response.status, url = %url, "BOLD returned error status");
            return Err(BoldError::Http {
                status: response.status,
                body: response.body,
            });
        }

        debug!(url = %url, size = response.body.len(), "BOLD request succeeded");
        Ok(response.body)
    }

    async fn fetch_json(
        &self,
        endpoint: Endpoint,
        query: &QueryString,
    ) -> Result<serde_json::Value> {
        let body = self.fetch(endpoint, query).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Identify a COI sequence against a reference library
    ///
    /// Whitespace inside `sequence` is removed, so multi-line input is fine.
    /// Returns the XML match list as sent by the engine.
    ///
    /// # Arguments
    /// * `sequence` - Nucleotide sequence in IUPAC codes
    /// * `db` - Reference library to search
    pub async fn identify(&self, sequence: &str, db: IdEngineDatabase) -> Result<Vec<u8>> {
        let sequence: String = sequence.split_whitespace().collect();
        let valid = !sequence.is_empty()
            && sequence
                .chars()
                .all(|c| NUCLEOTIDE_CODES.contains(&c.to_ascii_uppercase()));
        if !valid {
            return Err(BoldError::invalid_argument(
                param::SEQUENCE,
                &sequence,
                &[NUCLEOTIDE_CODES_HINT],
            ));
        }

        let mut query = QueryString::new();
        query.push(param::DB, db.as_str());
        query.push(param::SEQUENCE, sequence);
        self.fetch(Endpoint::IdEngine, &query).await
    }

    /// Get summary statistics for the records matching `query`
    ///
    /// # Arguments
    /// * `format` - JSON or XML; defaults to JSON
    /// * `data_type` - Overview counts or a drill-down per category
    pub async fn summary_stats(
        &self,
        query: &PublicDataQuery,
        format: Option<ReturnFormat>,
        data_type: SummaryDataType,
    ) -> Result<SummaryStats> {
        let format = Endpoint::Summary.resolve_format(format)?;

        let mut params = query.query_pairs();
        params.push(param::FORMAT, format.as_str());
        params.push(param::DATA_TYPE, data_type.as_str());

        match format {
            ReturnFormat::Json => Ok(SummaryStats::Json(
                self.fetch_json(Endpoint::Summary, &params).await?,
            )),
            _ => Ok(SummaryStats::Xml(
                self.fetch(Endpoint::Summary, &params).await?,
            )),
        }
    }

    /// Get specimen records (no sequences)
    ///
    /// # Arguments
    /// * `format` - TSV, XML, JSON or Darwin Core; defaults to TSV
    pub async fn specimens(
        &self,
        query: &PublicDataQuery,
        format: Option<ReturnFormat>,
    ) -> Result<Vec<u8>> {
        let format = Endpoint::Specimen.resolve_format(format)?;

        let mut params = query.query_pairs();
        params.push(param::FORMAT, format.as_str());
        self.fetch(Endpoint::Specimen, &params).await
    }

    /// Get sequences in FASTA format
    ///
    /// # Arguments
    /// * `markers` - Gene markers to restrict to, e.g. `COI-5P`; empty for all
    pub async fn sequences(&self, query: &PublicDataQuery, markers: &[String]) -> Result<Vec<u8>> {
        let mut params = query.query_pairs();
        params.push_list(param::MARKER, markers);
        self.fetch(Endpoint::Sequence, &params).await
    }

    /// Get specimen records together with their sequences
    ///
    /// # Arguments
    /// * `markers` - Gene markers to restrict to; empty for all
    /// * `format` - TSV, XML, JSON or Darwin Core; defaults to TSV
    pub async fn combined(
        &self,
        query: &PublicDataQuery,
        markers: &[String],
        format: Option<ReturnFormat>,
    ) -> Result<Vec<u8>> {
        let format = Endpoint::Combined.resolve_format(format)?;

        let mut params = query.query_pairs();
        params.push(param::FORMAT, format.as_str());
        params.push_list(param::MARKER, markers);
        self.fetch(Endpoint::Combined, &params).await
    }

    /// Get a tar archive of trace files
    pub async fn traces(&self, query: &PublicDataQuery, markers: &[String]) -> Result<Vec<u8>> {
        let mut params = query.query_pairs();
        params.push_list(param::MARKER, markers);
        self.fetch(Endpoint::Trace, &params).await
    }

    /// Download sequences to `path`, returning the number of bytes written
    pub async fn download_sequences(
        &self,
        query: &PublicDataQuery,
        markers: &[String],
        path: impl AsRef<Path>,
    ) -> Result<u64> {
        let body = self.sequences(query, markers).await?;
        write_file(path.as_ref(), &body).await
    }

    /// Download combined records to `path`, returning the number of bytes written
    pub async fn download_combined(
        &self,
        query: &PublicDataQuery,
        markers: &[String],
        format: Option<ReturnFormat>,
        path: impl AsRef<Path>,
    ) -> Result<u64> {
        let body = self.combined(query, markers, format).await?;
        write_file(path.as_ref(), &body).await
    }

    /// Download the trace archive to `path`, returning the number of bytes written
    pub async fn download_traces(
        &self,
        query: &PublicDataQuery,
        markers: &[String],
        path: impl AsRef<Path>,
    ) -> Result<u64> {
        let body = self.traces(query, markers).await?;
        write_file(path.as_ref(), &body).await
    }

    /// Look up taxa by BOLD taxon ID
    pub async fn taxon_by_id(&self, query: &TaxonIdQuery) -> Result<serde_json::Value> {
        self.fetch_json(Endpoint::TaxonData, &query.query_pairs()).await
    }

    /// Look up taxa by scientific name
    pub async fn taxon_by_name(&self, query: &TaxonNameQuery) -> Result<serde_json::Value> {
        self.fetch_json(Endpoint::TaxonSearch, &query.query_pairs()).await
    }
}

async fn write_file(path: &Path, body: &[u8]) -> Result<u64> {
    tokio::fs::write(path, body).await?;
    debug!(path = %path.display(), size = body.len(), "Wrote BOLD download");
    Ok(body.len() as u64)
}
