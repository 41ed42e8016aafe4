//! Directory lookups and the shaping of their payloads into picker options.
//!
//! The directory itself is abstracted behind [`DirectoryService`] so the
//! screen can be driven by the real HTTP client or by an in-memory fake.

use super::errors::DirectoryResult;
use super::models::{PlaceRecord, RegionRecord};

/// Source of regions and of the places scoped to a region.
///
/// Implementations block the calling thread; callers are expected to run
/// them off the UI thread.
pub trait DirectoryService {
    fn fetch_regions(&self) -> DirectoryResult<Vec<RegionRecord>>;

    /// `region` may be empty; the request is still issued.
    fn fetch_places(&self, region: &str) -> DirectoryResult<Vec<PlaceRecord>>;
}

/// Maps region records to their codes, sorted ascending.
///
/// # Examples
///
/// ```
/// use coleta::domain::{region_codes, RegionRecord};
///
/// let records = ["SP", "RJ", "AC"]
///     .iter()
///     .map(|c| RegionRecord { code: c.to_string() })
///     .collect();
/// assert_eq!(region_codes(records), vec!["AC", "RJ", "SP"]);
/// ```
pub fn region_codes(records: Vec<RegionRecord>) -> Vec<String> {
    let mut codes: Vec<String> = records.into_iter().map(|r| r.code).collect();
    codes.sort();
    codes
}

/// Maps place records to their names, keeping response order.
pub fn place_names(records: Vec<PlaceRecord>) -> Vec<String> {
    records.into_iter().map(|p| p.name).collect()
}

/// A lookup the screen wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Regions,
    /// `seq` identifies the request so that superseded responses can be
    /// told apart from the latest one.
    Places { region: String, seq: u64 },
}

/// The completed counterpart of a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Regions(DirectoryResult<Vec<String>>),
    Places {
        region: String,
        seq: u64,
        result: DirectoryResult<Vec<String>>,
    },
}

/// Performs a request against `service` and shapes the payload.
pub fn run_request<S: DirectoryService + ?Sized>(service: &S, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::Regions => FetchOutcome::Regions(service.fetch_regions().map(region_codes)),
        FetchRequest::Places { region, seq } => {
            let result = service.fetch_places(&region).map(place_names);
            FetchOutcome::Places { region, seq, result }
        }
    }
}
