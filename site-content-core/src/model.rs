//! View-models handed to sections. Every field is already normalized: links are
//! renderable strings, optional assets are `Option`, orders are integers.

use serde::Serialize;

use crate::field::UNRESOLVED_HREF;

/// Call-to-action text plus a target that is always renderable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    pub text: String,
    pub href: String,
}

impl LinkTarget {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        let href = href.into();
        Self {
            text: text.into(),
            href: if href.is_empty() {
                UNRESOLVED_HREF.to_string()
            } else {
                href
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub title: String,
    pub link_url: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub description: Option<String>,
    pub cta: LinkTarget,
    pub gradient: String,
    pub display_order: i64,
}

/// A logo without `logo_url` renders as a text placeholder of `company_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyLogo {
    pub company_name: String,
    pub logo_url: Option<String>,
    pub company_url: Option<String>,
    pub display_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSection {
    pub title: String,
    pub badge_text: String,
    /// Rich text, passed through untouched.
    pub description: String,
    pub primary_cta: LinkTarget,
    pub secondary_cta: LinkTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub cta: LinkTarget,
    pub icon: Option<String>,
    pub is_featured: bool,
    pub display_order: i64,
}

/// Headline number of a customer story. Value and label only exist together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

impl Metric {
    pub fn pair(value: Option<String>, label: Option<String>) -> Option<Self> {
        match (value, label) {
            (Some(value), Some(label)) => Some(Self { value, label }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStory {
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub image: Option<String>,
    pub metric: Option<Metric>,
    pub cta: LinkTarget,
    pub is_featured: bool,
    pub display_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub title: String,
    pub tag: String,
    pub description: String,
    pub image: Option<String>,
    pub content: String,
    pub cta: LinkTarget,
    pub download_file: Option<String>,
    pub publish_date: String,
}

/// Page a CTA section is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLocation {
    Home,
    Platform,
    Both,
}

impl SectionLocation {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Some(SectionLocation::Home),
            "platform" => Some(SectionLocation::Platform),
            "both" => Some(SectionLocation::Both),
            _ => None,
        }
    }

    /// Whether a section stored with `self` shows up on a `requested` page.
    /// Asking for `Both` returns every section.
    pub fn shows_on(self, requested: SectionLocation) -> bool {
        requested == SectionLocation::Both
            || self == SectionLocation::Both
            || self == requested
    }
}

impl std::str::FromStr for SectionLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionLocation::parse(s).ok_or_else(|| format!("unknown section location: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSection {
    pub section_title: String,
    pub title: String,
    pub description: String,
    pub primary_cta: LinkTarget,
    pub secondary_cta: LinkTarget,
    pub background_style: String,
    pub section_location: SectionLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformFeature {
    pub title: String,
    pub description: String,
    pub bullets: Vec<String>,
    pub cta: LinkTarget,
    pub gradient: String,
    pub icon: Option<String>,
    pub display_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub title: String,
    pub description: String,
    pub cta: LinkTarget,
    pub icon: Option<String>,
    pub display_order: i64,
}

/// Items that can claim the distinguished slot of a grid.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

impl Featured for Feature {
    fn is_featured(&self) -> bool {
        self.is_featured
    }
}

/// A resolved list split into the one featured item and the rest, both in
/// their original order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedSplit<T> {
    pub featured: Option<T>,
    pub rest: Vec<T>,
}

impl<T: Featured> From<Vec<T>> for FeaturedSplit<T> {
    /// The first item flagged as featured wins; otherwise the first item.
    fn from(mut items: Vec<T>) -> Self {
        if items.is_empty() {
            return Self {
                featured: None,
                rest: items,
            };
        }
        let index = items.iter().position(Featured::is_featured).unwrap_or(0);
        let featured = items.remove(index);
        Self {
            featured: Some(featured),
            rest: items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(title: &str, is_featured: bool, display_order: i64) -> Feature {
        Feature {
            title: title.to_string(),
            description: String::new(),
            cta: LinkTarget::new("Learn more", "#"),
            icon: None,
            is_featured,
            display_order,
        }
    }

    #[test]
    fn flagged_feature_takes_the_featured_slot() {
        let split = FeaturedSplit::from(vec![
            feature("a", false, 1),
            feature("b", true, 2),
            feature("c", true, 3),
        ]);
        assert_eq!(split.featured.map(|f| f.title), Some("b".to_string()));
        let rest: Vec<_> = split.rest.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(rest, vec!["a", "c"]);
    }

    #[test]
    fn first_feature_is_featured_when_none_flagged() {
        let split = FeaturedSplit::from(vec![feature("a", false, 1), feature("b", false, 2)]);
        assert_eq!(split.featured.map(|f| f.title), Some("a".to_string()));
        assert_eq!(split.rest.len(), 1);
    }

    #[test]
    fn location_matching() {
        use SectionLocation::*;
        assert!(Home.shows_on(Home));
        assert!(Both.shows_on(Platform));
        assert!(!Platform.shows_on(Home));
        assert!(Platform.shows_on(Both));
        assert_eq!("PLATFORM".parse::<SectionLocation>(), Ok(Platform));
        assert!("footer".parse::<SectionLocation>().is_err());
    }

    #[test]
    fn metric_requires_both_halves() {
        assert!(Metric::pair(Some("80%".into()), None).is_none());
        assert!(Metric::pair(None, Some("Faster".into())).is_none());
        assert!(Metric::pair(Some("80%".into()), Some("Faster".into())).is_some());
    }
}
