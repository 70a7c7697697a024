mod common;

use common::{Failure, ScriptedAdapter, explicit, track, tracks, url};
use mspqueue::{ExplicitFilter, PlayMode, QueueController, QueueError};
use mspsource::{SearchQuery, SourceError};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;

fn queue(adapter: ScriptedAdapter) -> QueueController<ScriptedAdapter> {
    QueueController::with_rng(adapter, StdRng::seed_from_u64(42))
}

#[test]
fn normal_traversal_wraps_after_last_item() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    q.enqueue(tracks(&["A", "B", "C"]))?;

    assert_eq!(q.next_url()?, url("A"));
    assert_eq!(q.queue_position_one_based(), 1);
    assert_eq!(q.next_url()?, url("B"));
    assert_eq!(q.queue_position_one_based(), 2);
    assert_eq!(q.next_url()?, url("C"));
    assert_eq!(q.queue_position_one_based(), 3);

    assert_eq!(q.next_url()?, "");
    assert_eq!(q.queue_position_one_based(), 0);
    assert_eq!(q.next_url()?, url("A"));
    Ok(())
}

#[test]
fn explicit_items_never_reach_a_disallow_queue() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    assert_eq!(q.explicit_filter(), ExplicitFilter::Disallow);

    let admitted = q.enqueue(vec![track("A"), explicit("B"), track("C")])?;
    assert_eq!(admitted, 2);
    assert_eq!(q.length(), 2);

    assert_eq!(q.next_url()?, url("A"));
    assert_eq!(q.next_url()?, url("C"));
    assert_eq!(q.next_url()?, "");

    q.set_explicit_filter(ExplicitFilter::Allow);
    assert_eq!(q.length(), 2);
    assert!(q.items().iter().all(|item| item.id != "B"));
    Ok(())
}

#[test]
fn shuffle_visits_every_item_once() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    q.set_mode(PlayMode::Shuffle);
    q.enqueue(tracks(&["A", "B", "C", "D"]))?;

    let mut seen = HashSet::new();
    for _ in 0..4 {
        let played = q.next_url()?;
        assert!(!played.is_empty());
        assert!(seen.insert(played));
    }

    let expected: HashSet<String> = ["A", "B", "C", "D"].iter().map(|id| url(id)).collect();
    assert_eq!(seen, expected);
    Ok(())
}

#[test]
fn transient_failure_is_skipped_and_dropped() -> anyhow::Result<()> {
    let adapter = ScriptedAdapter::new().fail("B", Failure::Transient);
    let mut q = queue(adapter);
    q.enqueue(tracks(&["A", "B", "C"]))?;

    assert_eq!(q.next_url()?, url("A"));
    assert_eq!(q.next_url()?, url("C"));
    assert_eq!(q.next_url()?, "");
    assert_eq!(q.length(), 2);
    assert_eq!(q.adapter().resolved(), vec!["A", "B", "C"]);
    Ok(())
}

#[test]
fn remove_current_then_next_plays_the_following_item() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    q.enqueue(tracks(&["A", "B", "C"]))?;

    assert_eq!(q.next_url()?, url("A"));
    let removed = q.remove_current().map(|item| item.id);
    assert_eq!(removed.as_deref(), Some("A"));
    assert_eq!(q.length(), 2);
    assert_eq!(q.current_title(), "");

    assert_eq!(q.next_url()?, url("B"));
    assert_eq!(q.next_url()?, url("C"));
    Ok(())
}

#[test]
fn remove_current_in_the_middle() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    q.enqueue(tracks(&["A", "B", "C"]))?;

    q.next_url()?;
    q.next_url()?;
    assert_eq!(q.remove_current().map(|item| item.id).as_deref(), Some("B"));
    assert_eq!(q.next_url()?, url("C"));
    assert_eq!(q.previous_url()?, url("A"));
    Ok(())
}

#[test]
fn search_without_results_leaves_queue_untouched() -> anyhow::Result<()> {
    let adapter = ScriptedAdapter::new().with_results("blue", tracks(&["A", "B"]));
    let mut q = queue(adapter);
    q.enqueue_from(&SearchQuery::tracks("blue"))?;
    q.next_url()?;

    let err = q.enqueue_from(&SearchQuery::tracks("nonexistent")).unwrap_err();
    assert!(err.is_empty_result());
    assert!(err.to_string().contains("nonexistent"));
    assert_eq!(q.length(), 2);
    assert_eq!(q.cursor(), Some(0));
    Ok(())
}

#[test]
fn search_with_only_explicit_results_is_empty() {
    let adapter = ScriptedAdapter::new().with_results("rap", vec![explicit("X"), explicit("Y")]);
    let mut q = queue(adapter);

    let err = q.enqueue_from(&SearchQuery::tracks("rap")).unwrap_err();
    assert!(matches!(err, QueueError::EmptyResult(_)));
    assert!(q.is_empty());
    assert_eq!(q.cursor(), None);
}

#[test]
fn enqueue_on_empty_queue_keeps_cursor_before_first() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    q.enqueue(tracks(&["A", "B"]))?;
    assert_eq!(q.cursor(), None);
    assert_eq!(q.next_url()?, url("A"));
    Ok(())
}

#[test]
fn enqueue_appends_without_moving_cursor() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    q.enqueue(tracks(&["A", "B"]))?;
    q.next_url()?;
    q.next_url()?;

    q.enqueue(tracks(&["C"]))?;
    assert_eq!(q.cursor(), Some(1));
    assert_eq!(q.next_url()?, url("C"));
    Ok(())
}

#[test]
fn auth_failure_is_reported_to_the_caller() -> anyhow::Result<()> {
    let adapter = ScriptedAdapter::new().fail("B", Failure::Auth);
    let mut q = queue(adapter);
    q.enqueue(tracks(&["A", "B", "C"]))?;

    q.next_url()?;
    let err = q.next_url().unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(q.length(), 3);

    // Once the credentials are fixed, the same entry plays.
    q.adapter().heal("B");
    assert_eq!(q.get_url(None)?, url("B"));
    assert_eq!(q.next_url()?, url("C"));
    Ok(())
}

#[test]
fn subscription_failure_keeps_its_kind() -> anyhow::Result<()> {
    let adapter = ScriptedAdapter::new().fail("C", Failure::Subscription);
    let mut q = queue(adapter);
    q.enqueue(tracks(&["A", "B", "C"]))?;

    q.next_url()?;
    let err = q.get_url(Some(3)).unwrap_err();
    assert!(err.is_subscription_error());
    assert!(!err.is_auth_error());
    assert!(matches!(
        err.source_error(),
        Some(SourceError::SubscriptionRequired(_))
    ));
    assert_eq!(q.length(), 3);
    assert_eq!(q.cursor(), Some(2));

    q.previous_url()?;
    let err = q.next_url().unwrap_err();
    assert!(err.is_subscription_error());
    assert_eq!(q.length(), 3);
    assert_eq!(q.cursor(), Some(2));
    Ok(())
}

#[test]
fn search_failures_are_returned_unchanged() -> anyhow::Result<()> {
    let adapter = ScriptedAdapter::new()
        .with_results("blue", tracks(&["A", "B"]))
        .fail_search("locked", Failure::Auth)
        .fail_search("premium", Failure::Subscription)
        .fail_search("flaky", Failure::Transient);
    let mut q = queue(adapter);
    q.enqueue_from(&SearchQuery::tracks("blue"))?;
    q.next_url()?;

    let err = q.enqueue_from(&SearchQuery::tracks("locked")).unwrap_err();
    assert!(err.is_auth_error());

    let err = q.enqueue_from(&SearchQuery::album("premium")).unwrap_err();
    assert!(err.is_subscription_error());

    let err = q.enqueue_from(&SearchQuery::tracks("flaky")).unwrap_err();
    assert!(matches!(err.source_error(), Some(SourceError::Transient(_))));
    assert!(!err.is_empty_result());

    assert_eq!(q.length(), 2);
    assert_eq!(q.cursor(), Some(0));
    assert_eq!(q.current_id(), "A");
    Ok(())
}

#[test]
fn timeouts_and_invalid_items_are_skipped() -> anyhow::Result<()> {
    let adapter = ScriptedAdapter::new()
        .fail("A", Failure::Timeout)
        .fail("C", Failure::Invalid);
    let mut q = queue(adapter);
    q.enqueue(tracks(&["A", "B", "C", "D"]))?;

    assert_eq!(q.next_url()?, url("B"));
    assert_eq!(q.next_url()?, url("D"));
    assert_eq!(q.length(), 2);
    Ok(())
}

#[test]
fn queue_of_only_failures_drains_to_empty() -> anyhow::Result<()> {
    let adapter = ScriptedAdapter::new()
        .fail("A", Failure::Transient)
        .fail("B", Failure::Transient);
    let mut q = queue(adapter);
    q.enqueue(tracks(&["A", "B"]))?;

    assert_eq!(q.next_url()?, "");
    assert!(q.is_empty());
    assert_eq!(q.cursor(), None);
    assert_eq!(q.previous_url()?, "");
    Ok(())
}

#[test]
fn get_url_addresses_play_order() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    q.enqueue(tracks(&["A", "B", "C"]))?;

    assert_eq!(q.get_url(Some(3))?, url("C"));
    assert_eq!(q.current_id(), "C");
    assert_eq!(q.previous_url()?, url("B"));

    let err = q.get_url(Some(9)).unwrap_err();
    assert!(matches!(err, QueueError::InvalidPosition { position: 9, len: 3 }));
    Ok(())
}

#[test]
fn current_fields_follow_the_resolved_item() -> anyhow::Result<()> {
    let mut q = queue(ScriptedAdapter::new());
    let song = track("A")
        .with_container("Kind of Blue")
        .with_duration_ms(545_000)
        .with_release_date("1959-08-17")
        .with_extra("permalink", "https://example.org/a");
    q.enqueue(vec![song])?;

    assert_eq!(q.current_album(), "");
    q.next_url()?;

    assert_eq!(q.current_title(), "Song A");
    assert_eq!(q.current_artist(), "The Testers");
    assert_eq!(q.current_album(), "Kind of Blue");
    assert_eq!(q.current_duration_ms(), 545_000);
    assert_eq!(q.current_year(), 1959);
    assert_eq!(q.current_extra("permalink"), "https://example.org/a");
    assert_eq!(q.current_extra("missing"), "");
    assert_eq!(q.current_url(), url("A"));
    Ok(())
}
