use serde::{Deserialize, Serialize};

/// A region (state) as returned by the directory service.
///
/// Only the code is kept; every other field in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionRecord {
    #[serde(rename = "sigla")]
    pub code: String,
}

/// A place (city) scoped to a region.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceRecord {
    #[serde(rename = "nome")]
    pub name: String,
}

/// Parameters handed to the points screen.
///
/// Empty strings are valid and mean "match everything".
///
/// # Examples
///
/// ```
/// use coleta::domain::Destination;
///
/// let dest = Destination::new("MG", "Uberlândia");
/// assert_eq!(dest.region, "MG");
/// assert_eq!(dest.place, "Uberlândia");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub region: String,
    pub place: String,
}

impl Destination {
    pub fn new(region: impl Into<String>, place: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            place: place.into(),
        }
    }

    pub fn matches_everything(&self) -> bool {
        self.region.is_empty() && self.place.is_empty()
    }
}

/// Which of the two pickers an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    Region,
    Place,
}

impl PickerKind {
    pub fn label(self) -> &'static str {
        match self {
            PickerKind::Region => "State (UF)",
            PickerKind::Place => "City",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            PickerKind::Region => "Select a state",
            PickerKind::Place => "Select a city",
        }
    }
}
