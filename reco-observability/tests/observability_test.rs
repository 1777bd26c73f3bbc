use reco_core::config::ObservabilityConfig;
use reco_core::models::{Strategy, UserSegment};
use reco_observability::tracing_setup::spans::names;
use reco_observability::{events, init_from_config, init_tracing_with_filter};

#[test]
fn repeated_initialization_does_not_panic() {
    init_tracing_with_filter("debug");
    init_from_config(&ObservabilityConfig::default());
}

#[test]
fn events_emit_without_subscriber_state() {
    init_tracing_with_filter("trace");
    events::strategy_selected(7, UserSegment::Established, Strategy::Collaborative);
    events::fallback_triggered(7, Strategy::Content, Strategy::Popularity);
    events::lookup_failed("1430");
    events::cold_start_excluded(3, 4);
    events::accuracy_sweep_completed(35, Some(10));
}

#[test]
fn span_macros_use_named_spans() {
    init_tracing_with_filter("info");
    let span = reco_observability::recommend_span!(7u64, 10usize);
    let _guard = span.enter();
    let sim = reco_observability::similarity_span!(3usize);
    let _sim_guard = sim.enter();
    assert_eq!(names::RECOMMEND, "reco.recommend");
    assert_eq!(names::SIMILARITY, "reco.similarity");
}
