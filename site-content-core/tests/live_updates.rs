use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use site_content_core::config::{PreviewConfig, Region, StackConfig};
use site_content_core::contract::MockContentSource;
use site_content_core::live::{EntryChange, LiveUpdates};
use site_content_core::site::Site;

fn counter_callback(counter: &Arc<AtomicUsize>) -> impl Fn() + Send + Sync + 'static {
    let counter = Arc::clone(counter);
    move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

fn stack_config(preview: Option<PreviewConfig>) -> StackConfig {
    StackConfig {
        api_key: "blt-api-key".to_string(),
        delivery_token: "cs-delivery".to_string(),
        environment: "production".to_string(),
        region: Region::Us,
        host: None,
        preview,
    }
}

#[test]
fn test_every_callback_fires_on_every_change() {
    let live = LiveUpdates::init(true);
    let banner = Arc::new(AtomicUsize::new(0));
    let stories = Arc::new(AtomicUsize::new(0));
    live.on_entry_change(counter_callback(&banner));
    live.on_entry_change(counter_callback(&stories));
    assert_eq!(live.subscriber_count(), 2);

    // No filtering by content type: an insight edit refreshes banner and stories too.
    assert_eq!(live.notify_entry_change(&EntryChange::new("insight")), 2);
    assert_eq!(live.notify_entry_change(&EntryChange::new("top_banner")), 2);

    assert_eq!(banner.load(Ordering::SeqCst), 2);
    assert_eq!(stories.load(Ordering::SeqCst), 2);
}

#[test]
fn test_registrations_accumulate_including_duplicates() {
    let live = LiveUpdates::init(true);
    let hits = Arc::new(AtomicUsize::new(0));
    live.on_entry_change(counter_callback(&hits));
    live.on_entry_change(counter_callback(&hits));

    live.notify_entry_change(&EntryChange::new("hero_slide"));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn test_callback_may_register_another_callback() {
    let live = LiveUpdates::init(true);
    let inner = Arc::clone(&live);
    live.on_entry_change(move || inner.on_entry_change(|| {}));

    live.notify_entry_change(&EntryChange::new("role"));
    assert_eq!(live.subscriber_count(), 2);
}

#[test]
fn test_site_enables_live_updates_only_with_preview_token() {
    let without = Site::init(&stack_config(None), Arc::new(MockContentSource::new()));
    assert!(!without.live.is_enabled());

    let with = Site::init(
        &stack_config(Some(PreviewConfig {
            preview_token: "cs-preview".to_string(),
            management_token: String::new(),
            host: "rest-preview.contentstack.com".to_string(),
        })),
        Arc::new(MockContentSource::new()),
    );
    assert!(with.live.is_enabled());

    let hits = Arc::new(AtomicUsize::new(0));
    without.live.on_entry_change(counter_callback(&hits));
    with.live.on_entry_change(counter_callback(&hits));
    without.live.notify_entry_change(&EntryChange::new("feature"));
    with.live.notify_entry_change(&EntryChange::new("feature"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
