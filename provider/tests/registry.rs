//! Tests for `ProviderRegistry`.

use llm::{Generator, ProviderConfig, ProviderKind};
use provider::{ProviderRegistry, build_provider};

fn openai(key: &str) -> provider::Provider {
    build_provider(ProviderKind::OpenAI, ProviderConfig::new(key, "gpt-4o")).expect("provider")
}

fn ollama() -> provider::Provider {
    let mut config = ProviderConfig::new("", "llama3.1");
    config.base_url = Some("http://localhost:11434".into());
    build_provider(ProviderKind::Ollama, config).expect("provider")
}

#[test]
fn register_and_get() {
    let mut registry = ProviderRegistry::new();
    registry.register("main", openai("sk-1"), false);

    assert_eq!(registry.len(), 1);
    assert!(registry.get("main").is_some());
    assert!(registry.get("other").is_none());
}

#[test]
fn register_make_default_sets_pointer() {
    let mut registry = ProviderRegistry::new();
    registry.register("a", openai("sk-1"), false);
    assert!(registry.get_default().is_none());

    registry.register("b", ollama(), true);
    assert_eq!(registry.default_key(), Some("b"));
    assert_eq!(
        registry.get_default().map(|p| p.kind()),
        Some(ProviderKind::Ollama)
    );
}

#[test]
fn at_most_one_default_at_a_time() {
    let mut registry = ProviderRegistry::new();
    registry.register("a", openai("sk-1"), true);
    registry.register("b", ollama(), true);

    assert_eq!(registry.default_key(), Some("b"));
}

#[test]
fn reregister_replaces_in_place() {
    let mut registry = ProviderRegistry::new();
    registry.register("a", openai("sk-1"), false);
    registry.register("b", ollama(), false);
    registry.register("a", ollama(), false);

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(registry.get("a").map(|p| p.kind()), Some(ProviderKind::Ollama));
}

#[test]
fn unregister_clears_default_pointer() {
    let mut registry = ProviderRegistry::new();
    registry.register("a", openai("sk-1"), true);

    assert!(registry.unregister("a"));
    assert!(registry.get_default().is_none());
    assert!(registry.is_empty());
}

#[test]
fn unregister_keeps_unrelated_default() {
    let mut registry = ProviderRegistry::new();
    registry.register("a", openai("sk-1"), true);
    registry.register("b", ollama(), false);

    assert!(registry.unregister("b"));
    assert_eq!(registry.default_key(), Some("a"));
}

#[test]
fn unregister_missing_key_is_a_noop() {
    let mut registry = ProviderRegistry::new();
    registry.register("a", openai("sk-1"), false);

    assert!(!registry.unregister("ghost"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn get_by_kind_respects_insertion_order() {
    let mut registry = ProviderRegistry::new();
    registry.register("first-openai", openai("sk-1"), false);
    registry.register("second-openai", openai("sk-2"), false);

    // Same instance as "first-openai": aliasing one adapter under two keys.
    let aliased = registry.get("first-openai").unwrap().clone();
    registry.register("alias", aliased, false);

    let found = registry.get_by_kind(ProviderKind::OpenAI);
    assert!(found.is_some());
    assert_eq!(registry.keys().next(), Some("first-openai"));
}

#[test]
fn discover_capabilities_reports_every_key() {
    let mut registry = ProviderRegistry::new();
    registry.register("gpt", openai("sk-1"), false);
    registry.register("local", ollama(), false);

    let discovered = registry.discover_capabilities();
    assert_eq!(discovered.len(), 2);
    assert_eq!(discovered["gpt"].kind, ProviderKind::OpenAI);
    assert!(!discovered["gpt"].capabilities.models.is_empty());
    assert_eq!(discovered["local"].kind, ProviderKind::Ollama);
    assert!(discovered["local"].capabilities.cost_per_1k_tokens.is_none());
}

#[tokio::test]
async fn health_check_captures_per_key_failures() {
    let mut registry = ProviderRegistry::new();
    // Nothing listens on this port; the probe must fail without propagating.
    let mut config = ProviderConfig::new("", "llama3.1");
    config.base_url = Some("http://127.0.0.1:9".into());
    config.timeout = std::time::Duration::from_secs(2);
    registry.register(
        "dead",
        build_provider(ProviderKind::Ollama, config).unwrap(),
        false,
    );

    let health = registry.health_check().await;
    assert_eq!(health.len(), 1);
    assert!(!health["dead"].healthy);
    assert!(health["dead"].error.is_some());

    let bools = registry.test_all().await;
    assert!(!bools["dead"]);
}
