//! Page loaders: every section of a page resolved concurrently.
//!
//! Resolvers never fail, so joining them always completes with a full page.

use serde::Serialize;
use tracing::info;

use crate::contract::ContentSource;
use crate::model::{
    Banner, CompanyLogo, CtaSection, CustomerStory, Feature, FeaturedSplit, HeroSlide, Insight,
    PlatformFeature, PlatformSection, Role, SectionLocation,
};
use crate::resolve::ContentResolver;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub banner: Option<Banner>,
    pub hero_slides: Vec<HeroSlide>,
    pub company_logos: Vec<CompanyLogo>,
    pub platform_section: Option<PlatformSection>,
    pub features: FeaturedSplit<Feature>,
    pub customer_stories: Vec<CustomerStory>,
    pub insights: Vec<Insight>,
    pub cta_sections: Vec<CtaSection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformPage {
    pub platform_features: Vec<PlatformFeature>,
    pub roles: Vec<Role>,
    pub customer_stories: Vec<CustomerStory>,
    pub cta_sections: Vec<CtaSection>,
}

pub async fn load_home_page<S>(resolver: &ContentResolver<S>) -> HomePage
where
    S: ContentSource + ?Sized,
{
    let (
        banner,
        hero_slides,
        company_logos,
        platform_section,
        features,
        customer_stories,
        insights,
        cta_sections,
    ) = futures::join!(
        resolver.get_top_banner(),
        resolver.get_hero_slides(),
        resolver.get_company_logos(),
        resolver.get_platform_section(),
        resolver.get_features_split(),
        resolver.get_customer_stories(),
        resolver.get_insights(),
        resolver.get_cta_sections(SectionLocation::Home),
    );
    info!(
        banner = banner.is_some(),
        hero_slides = hero_slides.len(),
        company_logos = company_logos.len(),
        "Home page resolved"
    );
    HomePage {
        banner,
        hero_slides,
        company_logos,
        platform_section,
        features,
        customer_stories,
        insights,
        cta_sections,
    }
}

/// Issues the four platform-page queries at once and waits for all of them.
pub async fn load_platform_page<S>(resolver: &ContentResolver<S>) -> PlatformPage
where
    S: ContentSource + ?Sized,
{
    let (platform_features, roles, customer_stories, cta_sections) = futures::join!(
        resolver.get_platform_features(),
        resolver.get_roles(),
        resolver.get_customer_stories(),
        resolver.get_cta_sections(SectionLocation::Platform),
    );
    info!(
        platform_features = platform_features.len(),
        roles = roles.len(),
        "Platform page resolved"
    );
    PlatformPage {
        platform_features,
        roles,
        customer_stories,
        cta_sections,
    }
}
