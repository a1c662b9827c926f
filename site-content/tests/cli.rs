use assert_cmd::prelude::OutputAssertExt;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::write;
use tempfile::NamedTempFile;

use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use tracing_subscriber::prelude::*; // needed for .with()
use tracing_subscriber::{layer::Context, Layer, Registry};

fn command() -> Command {
    let mut cmd = Command::cargo_bin("site-content").expect("Binary exists");
    cmd.env_remove("CONTENTSTACK_API_KEY")
        .env_remove("CONTENTSTACK_DELIVERY_TOKEN")
        .env_remove("CONTENTSTACK_PREVIEW_TOKEN")
        .env_remove("CONTENTSTACK_HOST")
        .env_remove("CONTENTSTACK_PREVIEW_HOST");
    cmd
}

#[test]
fn help_lists_every_command() {
    command()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("show")
                .and(predicate::str::contains("page"))
                .and(predicate::str::contains("watch")),
        );
}

#[test]
fn show_rejects_unknown_sections_and_locations() {
    command()
        .args(["show", "testimonials"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));

    command()
        .args(["show", "cta", "--location", "pricing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown section location"));
}

#[test]
fn show_fails_without_credentials() {
    command()
        .args(["show", "hero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONTENTSTACK_API_KEY"));
}

#[test]
fn page_fails_on_malformed_config_file() {
    let config = NamedTempFile::new().expect("Creating temp config file failed");
    write(config.path(), b"region: [not-a-region\n").expect("Writing temp config failed");

    command()
        .args(["page", "home", "--config"])
        .arg(config.path())
        .env("CONTENTSTACK_API_KEY", "blt-api-key")
        .env("CONTENTSTACK_DELIVERY_TOKEN", "cs-delivery")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config YAML"));
}

/// Serves a published role list, and a draft list to preview requests.
async fn role_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/content_types/role/entries"))
        .and(header("live_preview", "hash-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [{ "title": "Draft role", "display_order": 1 }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/content_types/role/entries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entries": [{ "title": "Published role", "display_order": 1 }]
        })))
        .mount(&server)
        .await;
    server
}

fn watch_roles(server: &MockServer, preview_token: Option<&str>) -> Command {
    let mut cmd = command();
    cmd.args(["watch", "roles"])
        .env("CONTENTSTACK_API_KEY", "blt-api-key")
        .env("CONTENTSTACK_DELIVERY_TOKEN", "cs-delivery")
        .env("CONTENTSTACK_HOST", server.uri())
        .env("CONTENTSTACK_PREVIEW_HOST", server.uri())
        .write_stdin("\nrole hash-1\n");
    if let Some(token) = preview_token {
        cmd.env("CONTENTSTACK_PREVIEW_TOKEN", token);
    }
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn watch_reprints_the_section_after_each_change_signal() {
    let server = role_server().await;
    let mut cmd = watch_roles(&server, Some("cs-preview"));

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .expect("watch command joined")
        .expect("watch command ran");
    output.assert().success().stdout(
        predicate::str::contains("Published role")
            .and(predicate::str::contains("Draft role"))
            .and(predicate::str::contains("\"title\"").count(2)),
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn watch_prints_only_the_initial_snapshot_without_preview_token() {
    let server = role_server().await;
    let mut cmd = watch_roles(&server, None);

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .expect("watch command joined")
        .expect("watch command ran");
    output
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Published role")
                .and(predicate::str::contains("Draft role").not()),
        )
        .stderr(predicate::str::contains("Live preview is not configured"));
}

/// Custom Layer to collect emitted event messages.
struct EventCollector {
    events: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for EventCollector
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.events.lock().unwrap().push(format!("{:?}", event));
    }
}

#[tokio::test]
async fn emits_trace_initialised_event() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = EventCollector {
        events: events.clone(),
    };
    let subscriber = Registry::default().with(collector);
    let _guard = tracing::subscriber::set_default(subscriber);

    use site_content::cli::{run, Cli, Commands, SectionKind};
    use site_content_core::model::SectionLocation;

    // A missing config file fails before any request is made.
    let cli = Cli {
        command: Commands::Show {
            section: SectionKind::Banner,
            location: SectionLocation::Home,
            config: Some(std::path::PathBuf::from("dummy.yaml")),
        },
    };

    let result = run(cli).await;
    assert!(result.is_err());

    let event_msgs = events.lock().unwrap();
    assert!(
        event_msgs.iter().any(|msg| msg.contains("trace_initialised")),
        "Expected a 'trace_initialised' trace event, got: {:?}",
        event_msgs
    );
}
