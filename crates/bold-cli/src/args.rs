//! Command line arguments

use crate::error::Result;
use bold_api::{IdEngineDatabase, PublicDataQuery, ReturnFormat, SummaryDataType, TaxonDataType};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bold",
    about = "Query the BOLD Systems public data, taxonomy and ID engine APIs",
    version
)]
pub struct Cli {
    /// Service root, overrides BOLD_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Identify a COI sequence with the ID engine
    Identify {
        /// Nucleotide sequence
        sequence: String,

        /// Reference library (COX1, COX1_SPECIES, COX1_SPECIES_PUBLIC, COX1_L640bp)
        #[arg(long, default_value = "COX1")]
        db: IdEngineDatabase,
    },

    /// Summary statistics
    Summary {
        #[command(flatten)]
        filters: Filters,

        /// json or xml
        #[arg(long)]
        format: Option<ReturnFormat>,

        /// overview or drill_down
        #[arg(long, default_value = "drill_down")]
        data_type: SummaryDataType,
    },

    /// Specimen records
    Specimen {
        #[command(flatten)]
        filters: Filters,

        /// tsv, xml, json or dwc
        #[arg(long)]
        format: Option<ReturnFormat>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sequences in FASTA format
    Sequence {
        #[command(flatten)]
        filters: Filters,

        #[arg(long)]
        marker: Vec<String>,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Specimen records with sequences
    Combined {
        #[command(flatten)]
        filters: Filters,

        #[arg(long)]
        marker: Vec<String>,

        /// tsv, xml, json or dwc
        #[arg(long)]
        format: Option<ReturnFormat>,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Trace file archive (tar)
    Trace {
        #[command(flatten)]
        filters: Filters,

        #[arg(long)]
        marker: Vec<String>,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Taxon lookup by BOLD taxon ID
    TaxonId {
        #[arg(required = true)]
        ids: Vec<String>,

        /// basic, stats, geo, images, sequencinglabs, depository, thirdparty or all
        #[arg(long)]
        data_type: Vec<TaxonDataType>,

        #[arg(long)]
        include_tree: bool,
    },

    /// Taxon lookup by name
    TaxonName {
        #[arg(required = true)]
        names: Vec<String>,

        #[arg(long)]
        fuzzy: bool,
    },
}

/// Record filters shared by the public data subcommands. Repeat a flag to
/// pass several values.
#[derive(Debug, Args)]
pub struct Filters {
    /// JSON file holding a query; flags given on the command line replace its fields
    #[arg(long)]
    pub query_file: Option<PathBuf>,

    #[arg(long)]
    pub taxon: Vec<String>,

    #[arg(long)]
    pub ids: Vec<String>,

    #[arg(long)]
    pub bin: Vec<String>,

    #[arg(long)]
    pub container: Vec<String>,

    #[arg(long)]
    pub institutions: Vec<String>,

    #[arg(long)]
    pub researchers: Vec<String>,

    #[arg(long)]
    pub geo: Vec<String>,
}

fn non_empty(values: Vec<String>, current: Option<Vec<String>>) -> Option<Vec<String>> {
    if values.is_empty() {
        current
    } else {
        Some(values)
    }
}

impl Filters {
    pub fn into_query(self) -> Result<PublicDataQuery> {
        let base = match &self.query_file {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => PublicDataQuery::default(),
        };

        Ok(PublicDataQuery {
            taxon: non_empty(self.taxon, base.taxon),
            ids: non_empty(self.ids, base.ids),
            bin_ids: non_empty(self.bin, base.bin_ids),
            container: non_empty(self.container, base.container),
            institutions: non_empty(self.institutions, base.institutions),
            researchers: non_empty(self.researchers, base.researchers),
            geo: non_empty(self.geo, base.geo),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_specimen_filters_build_query() {
        let cli = parse(&[
            "bold", "specimen", "--taxon", "Bombus", "--taxon", "Apis", "--geo", "France",
        ]);
        let Command::Specimen {
            filters, format, ..
        } = cli.command
        else {
            panic!("expected specimen command");
        };

        assert!(format.is_none());
        let query = filters.into_query().unwrap();
        assert_eq!(query.to_query_string(), "taxon=Bombus|Apis&geo=France");
    }

    #[test]
    fn test_enum_arguments_parse_wire_strings() {
        let cli = parse(&["bold", "summary", "--format", "xml", "--data-type", "overview"]);
        let Command::Summary {
            format, data_type, ..
        } = cli.command
        else {
            panic!("expected summary command");
        };
        assert_eq!(format, Some(ReturnFormat::Xml));
        assert_eq!(data_type, SummaryDataType::Overview);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["bold", "specimen", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_taxon_id_arguments() {
        let cli = parse(&[
            "bold",
            "--base-url",
            "http://localhost:9000",
            "taxon-id",
            "88898",
            "--data-type",
            "all",
            "--include-tree",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
        let Command::TaxonId {
            ids,
            data_type,
            include_tree,
        } = cli.command
        else {
            panic!("expected taxon-id command");
        };
        assert_eq!(ids, vec!["88898"]);
        assert_eq!(data_type, vec![TaxonDataType::All]);
        assert!(include_tree);
    }

    #[test]
    fn test_identify_default_database() {
        let cli = parse(&["bold", "identify", "ACGT"]);
        let Command::Identify { db, .. } = cli.command else {
            panic!("expected identify command");
        };
        assert_eq!(db, IdEngineDatabase::Cox1);
    }

    #[test]
    fn test_query_file_merges_with_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"taxon": ["Bombus"], "bin": ["BOLD:AAA0001"]}}"#).unwrap();

        let cli = parse(&[
            "bold",
            "trace",
            "--query-file",
            file.path().to_str().unwrap(),
            "--taxon",
            "Apis",
            "-o",
            "out.tar",
        ]);
        let Command::Trace { filters, .. } = cli.command else {
            panic!("expected trace command");
        };

        let query = filters.into_query().unwrap();
        assert_eq!(query.taxon, Some(vec!["Apis".to_string()]));
        assert_eq!(query.bin_ids, Some(vec!["BOLD:AAA0001".to_string()]));
    }

    #[test]
    fn test_bad_query_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let filters = Filters {
            query_file: Some(file.path().to_path_buf()),
            taxon: vec![],
            ids: vec![],
            bin: vec![],
            container: vec![],
            institutions: vec![],
            researchers: vec![],
            geo: vec![],
        };
        assert!(matches!(
            filters.into_query(),
            Err(CliError::Json(_))
        ));
    }
}
