//! CSV business dataset loading.

use std::io::Read;

use camino::Utf8Path;
use csv::{ReaderBuilder, StringRecord, Trim};
use dinewise_core::{Attributes, Business, parse_attribute_cell};
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::DatasetError;

/// Columns every dataset must provide. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "name",
    "address",
    "city",
    "stars",
    "review_count",
    "categories",
    "attributes",
    "is_open",
];

/// Counts gathered while loading a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Data rows read, excluding the header.
    pub rows: usize,
    /// Rows turned into businesses.
    pub loaded: usize,
    /// Malformed rows that were skipped.
    pub skipped: usize,
    /// Loaded businesses that are open restaurants.
    pub restaurants: usize,
    /// Loaded businesses whose attributes cell could not be parsed and was
    /// treated as empty.
    pub unparsed_attributes: usize,
}

/// Businesses read from a dataset together with load statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Every well-formed row, in file order.
    pub businesses: Vec<Business>,
    /// What happened while loading.
    pub summary: LoadSummary,
}

/// Load the dataset at `path`.
///
/// # Errors
/// Returns [`DatasetError::Open`] when the file cannot be opened, and the
/// errors of [`read_businesses`] otherwise.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use dinewise_data::load_businesses;
///
/// # fn main() -> Result<(), dinewise_data::DatasetError> {
/// let dataset = load_businesses(Utf8Path::new("data.csv"))?;
/// println!("{} restaurants", dataset.summary.restaurants);
/// # Ok(())
/// # }
/// ```
pub fn load_businesses(path: &Utf8Path) -> Result<Dataset, DatasetError> {
    let file = dinewise_fs::open_utf8_file(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_businesses(file, path)
}

/// Read businesses from CSV `input`; `origin` names the input in logs and
/// errors.
///
/// Rows with unreadable fields, a non-numeric rating or review count, or an
/// unrecognised `is_open` flag are skipped with a warning. An attributes
/// cell that is not a mapping literal yields empty attributes.
///
/// # Errors
/// Returns [`DatasetError::Header`] when the header row cannot be read,
/// [`DatasetError::MissingColumn`] when a [required
/// column](REQUIRED_COLUMNS) is absent, and [`DatasetError::Read`] when the
/// underlying reader fails.
pub fn read_businesses<R: Read>(input: R, origin: &Utf8Path) -> Result<Dataset, DatasetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(input);
    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Header {
            path: origin.to_path_buf(),
            source,
        })?
        .clone();
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(DatasetError::MissingColumn {
            path: origin.to_path_buf(),
            column,
        });
    }

    let mut dataset = Dataset::default();
    let mut record = StringRecord::new();
    loop {
        let line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                dataset.summary.rows += 1;
                match record.deserialize::<DatasetRow>(Some(&headers)) {
                    Ok(row) => match row.into_business(origin, line) {
                        Ok((business, attributes_parsed)) => {
                            dataset.push(business, attributes_parsed);
                        }
                        Err(err) => dataset.skip(origin, line, &err),
                    },
                    Err(err) => dataset.skip(origin, line, &RowError::Field(err)),
                }
            }
            Err(err) if err.is_io_error() => {
                return Err(DatasetError::Read {
                    path: origin.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                dataset.summary.rows += 1;
                dataset.skip(origin, line, &RowError::Field(err));
            }
        }
    }

    let summary = dataset.summary;
    info!(
        "loaded {} of {} rows from {origin} ({} skipped, {} open restaurants)",
        summary.loaded, summary.rows, summary.skipped, summary.restaurants
    );
    Ok(dataset)
}

impl Dataset {
    fn push(&mut self, business: Business, attributes_parsed: bool) {
        self.summary.loaded += 1;
        if business.is_open_restaurant() {
            self.summary.restaurants += 1;
        }
        if !attributes_parsed {
            self.summary.unparsed_attributes += 1;
        }
        self.businesses.push(business);
    }

    fn skip(&mut self, origin: &Utf8Path, line: u64, reason: &RowError) {
        self.summary.skipped += 1;
        warn!("skipping {origin} line {line}: {reason}");
    }
}

#[derive(Debug, Error)]
enum RowError {
    #[error("{0}")]
    Field(#[source] csv::Error),
    #[error("is_open value {0:?} is neither 0 nor 1")]
    OpenFlag(String),
    #[error("star rating {0} is not a finite number")]
    Stars(f64),
}

#[derive(Debug, Deserialize)]
struct DatasetRow {
    name: String,
    address: String,
    city: String,
    stars: f64,
    review_count: u32,
    categories: String,
    attributes: String,
    is_open: String,
}

impl DatasetRow {
    fn into_business(self, origin: &Utf8Path, line: u64) -> Result<(Business, bool), RowError> {
        let is_open = parse_open_flag(&self.is_open).ok_or(RowError::OpenFlag(self.is_open))?;
        if !self.stars.is_finite() {
            return Err(RowError::Stars(self.stars));
        }
        let (attributes, parsed) = match parse_attribute_cell(&self.attributes) {
            Ok(attributes) => (attributes, true),
            Err(err) => {
                warn!("{origin} line {line}: attributes cell is not a mapping ({err}); using none");
                (Attributes::new(), false)
            }
        };
        let business = Business::new(self.name, self.city)
            .with_address(self.address)
            .with_categories(self.categories)
            .with_rating(self.stars, self.review_count)
            .with_open(is_open)
            .with_attributes(attributes);
        Ok((business, parsed))
    }
}

/// Interpret an `is_open` cell; blank means closed.
fn parse_open_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "1.0" | "True" | "true" => Some(true),
        "0" | "0.0" | "False" | "false" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dinewise_core::FlatValue;
    use rstest::rstest;

    const HEADER: &str = concat!(
        "business_id,name,address,city,state,stars,review_count,is_open,",
        "attributes,categories\n",
    );

    fn read(body: &str) -> Result<Dataset, DatasetError> {
        let csv = format!("{HEADER}{body}");
        read_businesses(csv.as_bytes(), Utf8Path::new("inline.csv"))
    }

    fn loaded(body: &str) -> Dataset {
        match read(body) {
            Ok(dataset) => dataset,
            Err(err) => panic!("dataset should load: {err}"),
        }
    }

    #[rstest]
    fn loads_well_formed_rows() {
        let dataset = loaded(concat!(
            "b1,Sushi Zen,1 State St,Santa Barbara,CA,4.5,200,1,",
            "\"{'GoodForKids': 'True', ",
            "'BusinessParking': \"\"{'garage': False, 'lot': True}\"\"}\",",
            "\"Sushi Bars, Japanese, Restaurants\"\n",
        ));

        assert_eq!(
            dataset.summary,
            LoadSummary {
                rows: 1,
                loaded: 1,
                skipped: 0,
                restaurants: 1,
                unparsed_attributes: 0,
            }
        );
        let Some(business) = dataset.businesses.first() else {
            panic!("one business should load");
        };
        assert_eq!(business.name, "Sushi Zen");
        assert_eq!(business.address, "1 State St");
        assert_eq!(business.review_count, 200);
        assert!(business.is_open);
        assert_eq!(
            business.attributes.get("GoodForKids"),
            Some(&FlatValue::Bool(true))
        );
        assert_eq!(
            business.attributes.get("BusinessParking_lot"),
            Some(&FlatValue::Bool(true))
        );
    }

    #[rstest]
    fn skips_malformed_rows_and_keeps_going() {
        let dataset = loaded(concat!(
            "b1,Good,1 A St,Reno,NV,4.0,10,1,,Restaurants\n",
            "b2,Bad Stars,1 B St,Reno,NV,lots,10,1,,Restaurants\n",
            "b3,Bad Reviews,1 C St,Reno,NV,4.0,-3,1,,Restaurants\n",
            "b4,Bad Flag,1 D St,Reno,NV,4.0,10,maybe,,Restaurants\n",
            "b5,NaN Stars,1 E St,Reno,NV,NaN,10,1,,Restaurants\n",
            "b6,Closed,1 F St,Reno,NV,4.0,10,0,,Restaurants\n",
        ));

        assert_eq!(dataset.summary.rows, 6);
        assert_eq!(dataset.summary.loaded, 2);
        assert_eq!(dataset.summary.skipped, 4);
        assert_eq!(dataset.summary.restaurants, 1);
        let names: Vec<_> = dataset
            .businesses
            .iter()
            .map(|business| business.name.as_str())
            .collect();
        assert_eq!(names, ["Good", "Closed"]);
    }

    #[rstest]
    fn non_mapping_attributes_become_empty() {
        let dataset = loaded("b1,Odd,1 A St,Reno,NV,4.0,10,1,\"['WiFi']\",Restaurants\n");

        assert_eq!(dataset.summary.loaded, 1);
        assert_eq!(dataset.summary.unparsed_attributes, 1);
        assert!(
            dataset
                .businesses
                .first()
                .is_some_and(|business| business.attributes.is_empty())
        );
    }

    #[rstest]
    fn missing_columns_are_fatal() {
        let result = read_businesses(
            "name,city,stars\nA,Reno,4.0\n".as_bytes(),
            Utf8Path::new("thin.csv"),
        );
        assert!(matches!(
            result,
            Err(DatasetError::MissingColumn {
                column: "address",
                ..
            })
        ));
    }

    #[rstest]
    fn header_only_dataset_is_empty() {
        let dataset = loaded("");
        assert!(dataset.businesses.is_empty());
        assert_eq!(dataset.summary, LoadSummary::default());
    }

    #[rstest]
    #[case("1", Some(true))]
    #[case(" 1.0 ", Some(true))]
    #[case("True", Some(true))]
    #[case("0", Some(false))]
    #[case("", Some(false))]
    #[case("yes", None)]
    fn open_flags(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_open_flag(raw), expected);
    }
}
