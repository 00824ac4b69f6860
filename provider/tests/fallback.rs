//! Tests for fallback resolution ordering.

use llm::{ErrorKind, Generator, ProviderConfig, ProviderKind};
use provider::{ProviderRegistry, build_provider, with_fallback};

/// Registry with `"a"` (OpenAI, default) and `"b"` (Ollama).
fn two_entry_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    registry.register(
        "a",
        build_provider(ProviderKind::OpenAI, ProviderConfig::new("sk-1", "gpt-4o")).unwrap(),
        true,
    );
    let mut config = ProviderConfig::new("", "llama3.1");
    config.base_url = Some("http://localhost:11434".into());
    registry.register(
        "b",
        build_provider(ProviderKind::Ollama, config).unwrap(),
        false,
    );
    registry
}

#[test]
fn preferred_key_wins() {
    let registry = two_entry_registry();
    let p = with_fallback(&registry, Some("b"), Some(ProviderKind::OpenAI)).unwrap();
    assert_eq!(p.kind(), ProviderKind::Ollama);
}

#[test]
fn missing_key_falls_back_to_kind() {
    let registry = two_entry_registry();
    let p = with_fallback(&registry, Some("missing"), Some(ProviderKind::Ollama)).unwrap();
    assert_eq!(p.kind(), ProviderKind::Ollama);
}

#[test]
fn unregistered_kind_falls_back_to_default() {
    let registry = two_entry_registry();
    // No Gemini registered, so resolution lands on the default ("a").
    let p = with_fallback(&registry, Some("missing"), Some(ProviderKind::Gemini)).unwrap();
    assert_eq!(p.kind(), ProviderKind::OpenAI);
}

#[test]
fn no_arguments_resolves_default() {
    let registry = two_entry_registry();
    let p = with_fallback(&registry, None, None).unwrap();
    assert_eq!(p.kind(), ProviderKind::OpenAI);
}

#[test]
fn empty_registry_is_provider_unavailable() {
    let registry = ProviderRegistry::new();
    let err = with_fallback(&registry, None, None).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ProviderUnavailable);
    assert!(err.is_retryable());
}

#[test]
fn no_default_and_no_match_is_provider_unavailable() {
    let mut registry = two_entry_registry();
    registry.unregister("a"); // removes the default
    let err = with_fallback(&registry, Some("missing"), Some(ProviderKind::Gemini)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::ProviderUnavailable);
}
