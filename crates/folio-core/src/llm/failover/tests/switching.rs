//! Capacity-driven switching

use super::*;
use crate::llm::classifier::FailureKind;
use crate::llm::failover::{AskError, SwitchReason};

#[tokio::test(start_paused = true)]
async fn test_capacity_switches_to_next_and_retries() {
    let a = ScriptedAdapter::failing("a", capacity_error());
    let b = ScriptedAdapter::answering("b");
    let c = ScriptedAdapter::answering("c");
    let controller = controller(&[&a, &b, &c]);

    let reply = controller.ask("x").await.unwrap();
    assert_eq!(reply, "answer from b");
    assert_eq!(controller.current(), descriptor("b"));
    assert_eq!((a.calls(), b.calls(), c.calls()), (1, 1, 0));

    let status = controller.status();
    assert_eq!(status.elapsed_since_switch, Some(std::time::Duration::ZERO));
    assert_eq!(status.remaining_cooldown, Some(COOLDOWN));

    let history = controller.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].from, descriptor("a"));
    assert_eq!(history[0].to, descriptor("b"));
    assert_eq!(history[0].reason, SwitchReason::Capacity);
    assert!(history[0].detail.as_deref().unwrap().contains("TPD"));
}

#[tokio::test]
async fn test_retry_uses_same_prompt() {
    let a = ScriptedAdapter::failing("a", capacity_error());
    let b = ScriptedAdapter::answering("b");
    let controller = controller(&[&a, &b]);

    controller.ask("tell me about C-Tutor").await.unwrap();
    assert_eq!(a.prompts(), b.prompts());
}

#[tokio::test]
async fn test_single_hop_per_call() {
    let a = ScriptedAdapter::failing("a", capacity_error());
    let b = ScriptedAdapter::failing("b", capacity_error());
    let c = ScriptedAdapter::answering("c");
    let controller = controller(&[&a, &b, &c]);

    let err = controller.ask("x").await.unwrap_err();
    assert!(matches!(err, AskError::RetryFailed { .. }));
    assert_eq!(err.kind(), FailureKind::Capacity);
    assert!(
        err.to_string()
            .starts_with("Sorry, I encountered an error even after switching models")
    );
    assert_eq!(controller.current(), descriptor("b"));
    assert_eq!(c.calls(), 0);

    // The next call starts on b, hits capacity again and moves one more step.
    let reply = controller.ask("x").await.unwrap();
    assert_eq!(reply, "answer from c");
    assert_eq!(controller.current(), descriptor("c"));
    assert_eq!(a.calls(), 1);
    assert_eq!(controller.history().len(), 2);
}

#[tokio::test]
async fn test_capacity_at_end_of_chain_leaves_state_unchanged() {
    let a = ScriptedAdapter::failing("a", capacity_error());
    let b = ScriptedAdapter::failing("b", capacity_error());
    let controller = controller(&[&a, &b]);

    controller.ask("x").await.unwrap_err();
    let before = controller.status();
    assert_eq!(before.current, descriptor("b"));

    let err = controller.ask("x").await.unwrap_err();
    assert!(matches!(err, AskError::ChainExhausted { .. }));
    assert!(err.to_string().starts_with("Sorry, I encountered a rate limit error"));

    let after = controller.status();
    assert_eq!(after.current, before.current);
    assert_eq!(after.history, before.history);
    assert_eq!(a.calls(), 1);
    assert_eq!(b.calls(), 2);
}

#[tokio::test]
async fn test_single_provider_capacity_is_exhausted() {
    let a = ScriptedAdapter::failing("a", capacity_error());
    let controller = controller(&[&a]);

    let err = controller.ask("x").await.unwrap_err();
    assert!(matches!(err, AskError::ChainExhausted { .. }));
    assert_eq!(controller.current(), descriptor("a"));
    assert!(controller.status().elapsed_since_switch.is_none());
}

#[tokio::test]
async fn test_fatal_retry_failure_reports_fallback_provider() {
    let a = ScriptedAdapter::failing("a", capacity_error());
    let b = ScriptedAdapter::failing("b", fatal_error());
    let controller = controller(&[&a, &b]);

    let err = controller.ask("x").await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Fatal);
    assert_eq!(err.provider(), &descriptor("b"));
    // The switch still happened; the fallback stays current.
    assert_eq!(controller.current(), descriptor("b"));
}

#[tokio::test]
async fn test_current_is_always_a_chain_member() {
    let a = ScriptedAdapter::failing("a", capacity_error());
    let b = ScriptedAdapter::failing("b", transient_error());
    let c = ScriptedAdapter::answering("c");
    let controller = controller(&[&a, &b, &c]);
    let chain = controller.chain();

    for round in 0..12 {
        let _ = controller.ask("x").await;
        match round % 4 {
            0 => b.fail_with(capacity_error()),
            1 => b.fail_with(transient_error()),
            2 => {
                controller.force_revert();
            }
            _ => a.answer(),
        }
        assert!(chain.contains(&controller.current()));
    }
}
