//! Unit tests for the local inventory listing.

use brigade_cli::application::services::inventory::{InventoryEntry, NO_DESCRIPTION, NOT_AVAILABLE};
use brigade_cli::domain::Manifest;

use crate::helpers::{FakeFs, Level, MockCommandRunner, RecordingReporter, manifest, orchestrator};

#[test]
fn builtin_inventory_lists_two_agents_in_order_without_calls() {
    let agents = Manifest::builtin();
    let runner = MockCommandRunner::always_ok();
    let fs = FakeFs::empty();
    let reporter = RecordingReporter::new();

    let entries = orchestrator(&agents, &runner, &fs, &reporter).list_agents();

    assert!(runner.calls().is_empty());
    assert_eq!(entries.len(), 2);
    assert_eq!(
        entries[0],
        InventoryEntry {
            name: "chef_agent".to_owned(),
            description: "Primary agent utilizing ChatGPT or Gemini or etc etc etc".to_owned(),
            image: "my_ai_agent_chef:latest".to_owned(),
            build: "prod".to_owned(),
            externals: "none".to_owned(),
        }
    );
    assert_eq!(entries[1].name, "sous_agent");

    assert!(reporter.has(Level::Info, "Total Agents: 2"));
    assert_eq!(reporter.messages(Level::Step), ["#1:", "#2:"]);
    let names: Vec<String> = reporter
        .messages(Level::Detail)
        .into_iter()
        .filter(|d| d.starts_with("Name: "))
        .collect();
    assert_eq!(names, ["Name: chef_agent", "Name: sous_agent"]);
}

#[test]
fn inventory_substitutes_placeholders_for_absent_fields() {
    let agents = manifest(r#"[{"name": "bare"}]"#);
    let runner = MockCommandRunner::always_ok();
    let fs = FakeFs::empty();
    let reporter = RecordingReporter::new();

    let entries = orchestrator(&agents, &runner, &fs, &reporter).list_agents();

    assert_eq!(entries[0].description, NO_DESCRIPTION);
    assert_eq!(entries[0].image, NOT_AVAILABLE);
    assert_eq!(entries[0].build, NOT_AVAILABLE);
    assert_eq!(entries[0].externals, NOT_AVAILABLE);
    assert_eq!(
        reporter.messages(Level::Detail),
        [
            "Name: bare",
            "Description: No description provided.",
            "Image: N/A",
            "Build: N/A",
            "Externals: N/A",
        ]
    );
}

#[test]
fn inventory_of_empty_manifest_says_so() {
    let agents = Manifest::default();
    let runner = MockCommandRunner::always_ok();
    let fs = FakeFs::empty();
    let reporter = RecordingReporter::new();

    let entries = orchestrator(&agents, &runner, &fs, &reporter).list_agents();

    assert!(entries.is_empty());
    assert!(reporter.has(Level::Info, "No agents are registered."));
    assert!(!reporter.has(Level::Info, "Total Agents"));
    assert_eq!(reporter.messages(Level::Footer), ["Inventory Complete"]);
}
