//! Content resolvers: one per content category.
//!
//! Each resolver queries one content type, maps the raw entries into
//! view-models and falls back to static defaults. The contract towards
//! sections is that a resolver always produces a value:
//!   - entries found: mapped, in the requested order
//!   - zero entries: the category fallback (logged at debug)
//!   - query failure: the same fallback (logged as a warning)
//!
//! Malformed entries never abort a batch; missing or mistyped fields take the
//! defaults of the field accessors.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::contract::{ContentQuery, ContentSource, Record};
use crate::fallback;
use crate::field::{resolve_image, resolve_link, RecordExt};
use crate::model::{
    Banner, CompanyLogo, CtaSection, CustomerStory, Feature, FeaturedSplit, HeroSlide, Insight,
    LinkTarget, Metric, PlatformFeature, PlatformSection, Role, SectionLocation,
};

pub const TOP_BANNER: &str = "top_banner";
pub const HERO_SLIDE: &str = "hero_slide";
pub const COMPANY_LOGO: &str = "company_logo";
pub const PLATFORM_SECTION: &str = "platform_section";
pub const FEATURE: &str = "feature";
pub const CUSTOMER_STORY: &str = "customer_story";
pub const INSIGHT: &str = "insight";
pub const CTA_SECTION: &str = "cta_section";
pub const PLATFORM_FEATURE: &str = "platform_feature";
pub const ROLE: &str = "role";

const DISPLAY_ORDER: &str = "display_order";
const PUBLISH_DATE: &str = "publish_date";
const LEARN_MORE: &str = "Learn more";

enum Fetched {
    Found(Vec<Record>),
    Empty,
    Failed,
}

/// Resolves every content category against one shared [`ContentSource`].
///
/// Cheap to clone; clones share the source handle.
pub struct ContentResolver<S: ?Sized> {
    source: Arc<S>,
}

impl<S: ?Sized> Clone for ContentResolver<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> ContentResolver<S>
where
    S: ContentSource + ?Sized,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    async fn fetch(&self, query: &ContentQuery) -> Fetched {
        match self.source.find(query).await {
            Ok(records) if records.is_empty() => {
                debug!(content_type = %query.content_type, "No entries returned");
                Fetched::Empty
            }
            Ok(records) => {
                debug!(
                    content_type = %query.content_type,
                    count = records.len(),
                    "Fetched entries"
                );
                Fetched::Found(records)
            }
            Err(e) => {
                warn!(
                    content_type = %query.content_type,
                    error = %e,
                    "Content query failed, serving fallback"
                );
                Fetched::Failed
            }
        }
    }

    async fn resolve_list<T>(
        &self,
        query: ContentQuery,
        map: fn(&Record) -> T,
        fallback: fn() -> Vec<T>,
    ) -> Vec<T> {
        match self.fetch(&query).await {
            Fetched::Found(records) => records.iter().map(map).collect(),
            Fetched::Empty | Fetched::Failed => fallback(),
        }
    }

    /// The active top banner, if one is currently scheduled.
    pub async fn get_top_banner(&self) -> Option<Banner> {
        self.get_top_banner_at(Utc::now()).await
    }

    /// Same as [`get_top_banner`](Self::get_top_banner) with an explicit clock.
    pub async fn get_top_banner_at(&self, now: DateTime<Utc>) -> Option<Banner> {
        let query = ContentQuery::new(TOP_BANNER).where_eq("is_active", true);
        let Fetched::Found(records) = self.fetch(&query).await else {
            return None;
        };
        let record = records.first()?;
        if !record.flag("is_active") {
            info!("Top banner is inactive");
            return None;
        }

        if let Some(publish) = record.text(PUBLISH_DATE).as_deref().and_then(parse_date) {
            if publish > now {
                info!(%publish, "Top banner not yet published");
                return None;
            }
        }
        if let Some(expiry) = record.text("expiry_date").as_deref().and_then(parse_date) {
            if expiry <= now {
                info!(%expiry, "Top banner expired");
                return None;
            }
        }

        Some(Banner {
            title: record.text_or("title", ""),
            link_url: resolve_link(record.get("link_url")),
            is_active: record.flag("is_active"),
        })
    }

    pub async fn get_hero_slides(&self) -> Vec<HeroSlide> {
        let query = ContentQuery::new(HERO_SLIDE)
            .where_eq("is_active", true)
            .ascending(DISPLAY_ORDER);
        let mut slides = self
            .resolve_list(query, map_hero_slide, fallback::hero_slides)
            .await;
        slides.sort_by_key(|s| s.display_order);
        slides
    }

    pub async fn get_company_logos(&self) -> Vec<CompanyLogo> {
        let query = ContentQuery::new(COMPANY_LOGO)
            .where_eq("is_active", true)
            .ascending(DISPLAY_ORDER);
        let mut logos = self
            .resolve_list(query, map_company_logo, fallback::company_logos)
            .await;
        logos.sort_by_key(|l| l.display_order);
        logos
    }

    /// The platform section singleton: first entry only, absent when there is none.
    pub async fn get_platform_section(&self) -> Option<PlatformSection> {
        let query = ContentQuery::new(PLATFORM_SECTION);
        match self.fetch(&query).await {
            Fetched::Found(records) => records.first().map(map_platform_section),
            Fetched::Empty | Fetched::Failed => None,
        }
    }

    pub async fn get_features(&self) -> Vec<Feature> {
        let query = ContentQuery::new(FEATURE).ascending(DISPLAY_ORDER);
        let mut features = self
            .resolve_list(query, map_feature, fallback::features)
            .await;
        features.sort_by_key(|f| f.display_order);
        features
    }

    /// Features with the featured one separated for the headline slot.
    pub async fn get_features_split(&self) -> FeaturedSplit<Feature> {
        FeaturedSplit::from(self.get_features().await)
    }

    pub async fn get_customer_stories(&self) -> Vec<CustomerStory> {
        let query = ContentQuery::new(CUSTOMER_STORY)
            .where_eq("is_featured", true)
            .ascending(DISPLAY_ORDER);
        let mut stories = self
            .resolve_list(query, map_customer_story, fallback::customer_stories)
            .await;
        stories.sort_by_key(|s| s.display_order);
        stories
    }

    /// Featured insights, newest first.
    pub async fn get_insights(&self) -> Vec<Insight> {
        let query = ContentQuery::new(INSIGHT)
            .where_eq("is_featured", true)
            .descending(PUBLISH_DATE);
        let mut insights = self
            .resolve_list(query, map_insight, fallback::insights)
            .await;
        // Newest instant first; empty or unparseable dates sink to the end.
        insights.sort_by_cached_key(|i| {
            std::cmp::Reverse(quiet_parse_date(&i.publish_date))
        });
        insights
    }

    /// CTA sections for one page. The query is unfiltered; location matching
    /// happens here so `both` entries land on every page.
    pub async fn get_cta_sections(&self, location: SectionLocation) -> Vec<CtaSection> {
        let query = ContentQuery::new(CTA_SECTION);
        let sections = match self.fetch(&query).await {
            Fetched::Found(records) => records.iter().filter_map(map_cta_section).collect(),
            Fetched::Empty | Fetched::Failed => fallback::cta_sections(),
        };
        sections
            .into_iter()
            .filter(|cta| cta.section_location.shows_on(location))
            .collect()
    }

    pub async fn get_platform_features(&self) -> Vec<PlatformFeature> {
        let query = ContentQuery::new(PLATFORM_FEATURE).ascending(DISPLAY_ORDER);
        let mut features = self
            .resolve_list(query, map_platform_feature, fallback::platform_features)
            .await;
        features.sort_by_key(|f| f.display_order);
        features
    }

    pub async fn get_roles(&self) -> Vec<Role> {
        let query = ContentQuery::new(ROLE).ascending(DISPLAY_ORDER);
        let mut roles = self.resolve_list(query, map_role, fallback::roles).await;
        roles.sort_by_key(|r| r.display_order);
        roles
    }
}

/// Accepts RFC 3339 timestamps and plain dates (midnight UTC).
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Err(_) => {
            warn!(value = raw, "Ignoring unparseable schedule date");
            None
        }
    }
}

fn quiet_parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        None
    } else {
        parse_date(raw)
    }
}

fn cta(record: &Record, text_field: &str, default_text: &str, link_field: &str) -> LinkTarget {
    LinkTarget::new(
        record.text_or(text_field, default_text),
        resolve_link(record.get(link_field)),
    )
}

fn map_hero_slide(record: &Record) -> HeroSlide {
    HeroSlide {
        title: record.text_or("title", ""),
        subtitle: record.text_or("subtitle", ""),
        description: record.text("description"),
        cta: cta(record, "cta_text", LEARN_MORE, "cta_link"),
        gradient: record.text_or("background_gradient", fallback::DEFAULT_GRADIENT),
        display_order: record.order(DISPLAY_ORDER),
    }
}

fn map_company_logo(record: &Record) -> CompanyLogo {
    CompanyLogo {
        company_name: record.text_or("company_name", ""),
        logo_url: resolve_image(record.get("logo")),
        company_url: crate::field::LinkField::from(record.get("company_url"))
            .href()
            .map(str::to_string),
        display_order: record.order(DISPLAY_ORDER),
    }
}

fn map_platform_section(record: &Record) -> PlatformSection {
    PlatformSection {
        title: record.text_or("title", ""),
        badge_text: record.text_or("badge_text", "Our platform"),
        description: record.text_or("description", ""),
        primary_cta: cta(
            record,
            "primary_cta_text",
            "Explore our platform",
            "primary_cta_link",
        ),
        secondary_cta: cta(
            record,
            "secondary_cta_text",
            "Try for free",
            "secondary_cta_link",
        ),
    }
}

fn map_feature(record: &Record) -> Feature {
    Feature {
        title: record.text_or("title", ""),
        description: record.text_or("description", ""),
        cta: cta(record, "cta_text", LEARN_MORE, "cta_link"),
        icon: resolve_image(record.get("icon")),
        is_featured: record.flag("is_featured"),
        display_order: record.order(DISPLAY_ORDER),
    }
}

fn map_customer_story(record: &Record) -> CustomerStory {
    CustomerStory {
        title: record.text_or("title", ""),
        company_name: record.text_or("company_name", ""),
        description: record.text_or("description", ""),
        image: resolve_image(record.get("featured_image")),
        metric: Metric::pair(record.text("metric_value"), record.text("metric_label")),
        cta: LinkTarget::new("Read more", resolve_link(record.get("case_study_url"))),
        is_featured: record.flag("is_featured"),
        display_order: record.order(DISPLAY_ORDER),
    }
}

fn map_insight(record: &Record) -> Insight {
    Insight {
        title: record.text_or("title", ""),
        tag: record.text_or("resource_type", "Resource"),
        description: record.text_or("description", ""),
        image: resolve_image(record.get("featured_image")),
        content: record.text_or("content", ""),
        cta: cta(record, "cta_text", "Read more", "resource_url"),
        download_file: resolve_image(record.get("download_file")),
        publish_date: record.text_or(PUBLISH_DATE, ""),
    }
}

/// Entries with an unrecognised `section_location` are dropped.
fn map_cta_section(record: &Record) -> Option<CtaSection> {
    let section_location = match record.text("section_location") {
        None => SectionLocation::Home,
        Some(raw) => match SectionLocation::parse(&raw) {
            Some(location) => location,
            None => {
                debug!(location = %raw, "Skipping CTA section with unknown location");
                return None;
            }
        },
    };
    Some(CtaSection {
        section_title: record.text_or("section_title", ""),
        title: record.text_or("title", ""),
        description: record.text_or("description", ""),
        primary_cta: cta(record, "primary_cta_text", "", "primary_cta_link"),
        secondary_cta: cta(record, "secondary_cta_text", "", "secondary_cta_link"),
        background_style: record.text_or("background_style", "default"),
        section_location,
    })
}

fn map_platform_feature(record: &Record) -> PlatformFeature {
    PlatformFeature {
        title: record.text_or("title", ""),
        description: record.text_or("description", ""),
        bullets: record.text_list("feature_bullets"),
        cta: cta(record, "cta_text", LEARN_MORE, "cta_link"),
        gradient: record.text_or("background_gradient", ""),
        icon: resolve_image(record.get("icon")),
        display_order: record.order(DISPLAY_ORDER),
    }
}

fn map_role(record: &Record) -> Role {
    Role {
        title: record.text_or("title", ""),
        description: record.text_or("description", ""),
        cta: cta(record, "cta_text", LEARN_MORE, "cta_link"),
        icon: resolve_image(record.get("icon")),
        display_order: record.order(DISPLAY_ORDER),
    }
}
