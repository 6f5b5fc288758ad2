use crate::error::CriteriaError;
use crate::types::project::{Sector, Service};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the visible projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "brand-az")]
    BrandAscending,
    #[serde(rename = "brand-za")]
    BrandDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::BrandAscending,
        SortKey::BrandDescending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::BrandAscending => "brand-az",
            SortKey::BrandDescending => "brand-za",
        }
    }

    /// Text shown in the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "New first",
            SortKey::Oldest => "Old first",
            SortKey::BrandAscending => "Brand A–Z",
            SortKey::BrandDescending => "Brand Z–A",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CriteriaError::UnknownSortKey(s.to_string()))
    }
}

/// Year facet: either every year or one exact year.
///
/// Serialized as the string `"all"` or as a bare integer, matching the
/// values of the year dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    pub fn admits(&self, year: i32) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(selected) => *selected == year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str("all"),
            YearFilter::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for YearFilter {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(YearFilter::All);
        }
        trimmed
            .parse::<i32>()
            .map(YearFilter::Year)
            .map_err(|_| CriteriaError::InvalidYear(s.to_string()))
    }
}

impl From<i32> for YearFilter {
    fn from(year: i32) -> Self {
        YearFilter::Year(year)
    }
}

impl Serialize for YearFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            YearFilter::All => serializer.serialize_str("all"),
            YearFilter::Year(year) => serializer.serialize_i32(*year),
        }
    }
}

impl<'de> Deserialize<'de> for YearFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Year(i32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Year(year) => Ok(YearFilter::Year(year)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// User-controlled filter and sort configuration for the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub sectors: BTreeSet<Sector>,
    #[serde(default)]
    pub services: BTreeSet<Service>,
    #[serde(default)]
    pub year: YearFilter,
    #[serde(default)]
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_sectors(mut self, sectors: impl IntoIterator<Item = Sector>) -> Self {
        self.sectors = sectors.into_iter().collect();
        self
    }

    pub fn with_services(mut self, services: impl IntoIterator<Item = Service>) -> Self {
        self.services = services.into_iter().collect();
        self
    }

    pub fn with_year(mut self, year: impl Into<YearFilter>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// True when no facet narrows the catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.query.trim().is_empty()
            && self.sectors.is_empty()
            && self.services.is_empty()
            && self.year == YearFilter::All
    }
}

/// Text form of [`FilterCriteria`] as it arrives in a query string or on
/// the command line. Facet lists are comma-separated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CriteriaParams {
    #[serde(default, alias = "query")]
    pub q: Option<String>,
    pub sectors: Option<String>,
    pub services: Option<String>,
    pub year: Option<String>,
    pub sort: Option<String>,
}

impl CriteriaParams {
    pub fn into_criteria(self) -> Result<FilterCriteria, CriteriaError> {
        Ok(FilterCriteria {
            query: self.q.unwrap_or_default(),
            sectors: parse_list(self.sectors.as_deref())?,
            services: parse_list(self.services.as_deref())?,
            year: match self.year.as_deref() {
                Some(year) => year.parse()?,
                None => YearFilter::All,
            },
            sort: match self.sort.as_deref() {
                Some(sort) => sort.parse()?,
                None => SortKey::default(),
            },
        })
    }
}

fn parse_list<T>(csv: Option<&str>) -> Result<BTreeSet<T>, CriteriaError>
where
    T: FromStr<Err = CriteriaError> + Ord,
{
    csv.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse::<T>)
            .collect()
    })
    .unwrap_or_else(|| Ok(BTreeSet::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_into_criteria() {
        let params = CriteriaParams {
            q: Some("seo".to_string()),
            sectors: Some("Website Design, branding".to_string()),
            services: Some("SEO,,video".to_string()),
            year: Some("2024".to_string()),
            sort: Some("brand-az".to_string()),
        };
        let criteria = params.into_criteria().unwrap();
        assert_eq!(criteria.query, "seo");
        assert_eq!(
            criteria.sectors,
            [Sector::WebsiteDesign, Sector::Branding].into_iter().collect()
        );
        assert_eq!(
            criteria.services,
            [Service::Seo, Service::Video].into_iter().collect()
        );
        assert_eq!(criteria.year, YearFilter::Year(2024));
        assert_eq!(criteria.sort, SortKey::BrandAscending);

        assert_eq!(
            CriteriaParams::default().into_criteria().unwrap(),
            FilterCriteria::default()
        );
    }

    #[test]
    fn test_params_reject_unknown_values() {
        let params = CriteriaParams {
            year: Some("2024-ish".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.into_criteria(),
            Err(CriteriaError::InvalidYear("2024-ish".to_string()))
        );

        let params = CriteriaParams {
            services: Some("SEO,Print".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.into_criteria(),
            Err(CriteriaError::UnknownService("Print".to_string()))
        );
    }

    #[test]
    fn test_defaults_match_page_state() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.query, "");
        assert!(criteria.sectors.is_empty());
        assert!(criteria.services.is_empty());
        assert_eq!(criteria.year, YearFilter::All);
        assert_eq!(criteria.sort, SortKey::Newest);
        assert!(criteria.is_unrestricted());
    }

    #[test]
    fn test_year_filter_parsing() {
        assert_eq!("all".parse::<YearFilter>().unwrap(), YearFilter::All);
        assert_eq!("ALL".parse::<YearFilter>().unwrap(), YearFilter::All);
        assert_eq!(
            " 2024 ".parse::<YearFilter>().unwrap(),
            YearFilter::Year(2024)
        );
        assert!(matches!(
            "last-year".parse::<YearFilter>(),
            Err(CriteriaError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_criteria_json_compatibility() {
        let json = r#"{
            "query": "seo",
            "sectors": ["Website Design"],
            "services": ["SEO", "Social"],
            "year": 2025,
            "sort": "brand-za"
        }"#;

        let criteria: FilterCriteria = serde_json::from_str(json).unwrap();
        assert_eq!(criteria.year, YearFilter::Year(2025));
        assert_eq!(criteria.sort, SortKey::BrandDescending);
        assert!(criteria.services.contains(&Service::Seo));

        let all: FilterCriteria = serde_json::from_str(r#"{ "year": "all" }"#).unwrap();
        assert_eq!(all.year, YearFilter::All);

        let bad = serde_json::from_str::<FilterCriteria>(r#"{ "year": "soon" }"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_sort_key_round_trips_through_text() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("popular".parse::<SortKey>().is_err());
    }
}
