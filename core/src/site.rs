use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: String,
    pub href: String,
    /// Brand color used for the icon hover state.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
}

/// Static chrome around the pages: header navigation, footer and contact bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub name: String,
    pub navigation: Vec<NavLink>,
    pub footer_links: Vec<NavLink>,
    pub socials: Vec<SocialLink>,
    pub highlights: Vec<String>,
    pub contact: ContactDetails,
}

/// A navigation entry with its highlighted state resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem<'a> {
    #[serde(flatten)]
    pub link: &'a NavLink,
    pub active: bool,
}

impl SiteProfile {
    /// The navigation link whose href equals `path`. No prefix matching:
    /// `/our-work/p1` does not activate `/our-work`.
    pub fn active_link(&self, path: &str) -> Option<&NavLink> {
        self.navigation.iter().find(|link| link.href == path)
    }

    pub fn navigation_for(&self, path: &str) -> Vec<NavItem<'_>> {
        self.navigation
            .iter()
            .map(|link| NavItem {
                link,
                active: link.href == path,
            })
            .collect()
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        let social = |network: &str, href: &str, color: &str| SocialLink {
            network: network.to_string(),
            href: href.to_string(),
            color: color.to_string(),
        };

        Self {
            name: "Zentrok".to_string(),
            navigation: vec![
                NavLink::new("Home", "/home"),
                NavLink::new("About", "/about"),
                NavLink::new("Services", "/services"),
                NavLink::new("Our Work", "/our-work"),
                NavLink::new("Contact", "/contact"),
            ],
            footer_links: vec![
                NavLink::new("Home", "/"),
                NavLink::new("About Us", "/about"),
                NavLink::new("Services", "/services"),
                NavLink::new("Our Work", "/our-work"),
                NavLink::new("Contact", "/contact"),
            ],
            socials: vec![
                social(
                    "Facebook",
                    "https://www.facebook.com/profile.php?id=61579906194112",
                    "#1877F2",
                ),
                social("X", "https://x.com/Zentrok_05", "#ffffff"),
                social(
                    "Instagram",
                    "https://www.instagram.com/zentrok_?igsh=d3Bsb2U5b3dkYWg0",
                    "#E4405F",
                ),
                social(
                    "LinkedIn",
                    "http://www.linkedin.com/in/zentrok-private-limited",
                    "#0077B5",
                ),
                social(
                    "YouTube",
                    "https://youtube.com/@zentrokpvtltd-s5l?si=1cID75lxCF2YDpr5",
                    "#F54927",
                ),
            ],
            highlights: ["Ads", "Analytics", "SEO", "Engagement"]
                .into_iter()
                .map(String::from)
                .collect(),
            contact: ContactDetails {
                phone: "+919211870764".to_string(),
                email: "support@zentrok.com".to_string(),
            },
        }
    }
}
