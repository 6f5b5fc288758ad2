use crate::error::CriteriaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business sector a project was delivered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Website Design")]
    WebsiteDesign,
    #[serde(rename = "Social Media Management")]
    SocialMediaManagement,
    #[serde(rename = "Content Creation")]
    ContentCreation,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Others")]
    Others,
}

impl Sector {
    /// Chip order used on the portfolio page.
    pub const ALL: [Sector; 5] = [
        Sector::WebsiteDesign,
        Sector::ContentCreation,
        Sector::SocialMediaManagement,
        Sector::Branding,
        Sector::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sector::WebsiteDesign => "Website Design",
            Sector::SocialMediaManagement => "Social Media Management",
            Sector::ContentCreation => "Content Creation",
            Sector::Branding => "Branding",
            Sector::Others => "Others",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Sector::WebsiteDesign => "website-design",
            Sector::SocialMediaManagement => "social-media-management",
            Sector::ContentCreation => "content-creation",
            Sector::Branding => "branding",
            Sector::Others => "others",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = CriteriaError;

    /// Accepts either the display label ("Website Design") or the slug
    /// ("website-design"), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Sector::ALL
            .into_iter()
            .find(|sector| {
                sector.label().eq_ignore_ascii_case(needle)
                    || sector.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| CriteriaError::UnknownSector(s.to_string()))
    }
}

/// Service line offered by the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Service {
    Branding,
    Performance,
    Social,
    #[serde(rename = "SEO")]
    Seo,
    Video,
    Web,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::Branding,
        Service::Performance,
        Service::Social,
        Service::Seo,
        Service::Video,
        Service::Web,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Service::Branding => "Branding",
            Service::Performance => "Performance",
            Service::Social => "Social",
            Service::Seo => "SEO",
            Service::Video => "Video",
            Service::Web => "Web",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Service {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Service::ALL
            .into_iter()
            .find(|service| service.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CriteriaError::UnknownService(s.to_string()))
    }
}

/// Headline metric shown on a project card, e.g. `CTR` / `3.9%`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: String,
}

/// A portfolio case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub sector: Sector,
    pub services: Vec<Service>,
    pub year: i32,
    pub cover: String,
    #[serde(default)]
    pub kpi: Vec<Kpi>,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Project {
    pub fn has_video(&self) -> bool {
        self.video_url.is_some()
    }

    pub fn offers(&self, service: Service) -> bool {
        self.services.contains(&service)
    }

    /// Whether the already lower-cased `needle` occurs in the title, brand,
    /// summary or space-joined tags.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.brand.to_lowercase().contains(needle)
            || self.tags.join(" ").to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
    }
}
