use super::*;

/// Tests the removal-then-addition convergence plan.
///
/// The message has reactions 🎉 and 🐸 while the catalog declares 🎉 and
/// wave. 🐸 has no binding and must be cleared; wave has no reaction and must
/// be added; 🎉 matches and is untouched.
///
/// Expected: exactly one clear op followed by one add op
#[test]
fn removes_strays_then_adds_missing() {
    let bindings = parse_bindings("🎉 <@&555> - party role\n:wave: <@&777>");
    let message = create_test_message(1, 200, "", &[("🎉", None), ("🐸", None)]);

    let ops = plan_reconcile(&message, &bindings);

    assert_eq!(
        ops,
        vec![
            ReconcileOp::ClearReaction {
                emoji: ReactionType::Unicode("🐸".to_string()),
            },
            ReconcileOp::AddReaction {
                emoji_token: ":wave:".to_string(),
            },
        ]
    );
}

/// Tests idempotence on a converged message.
///
/// Every binding already has a reaction and every reaction is bound, so a
/// second reconciliation pass must not produce another round of operations.
///
/// Expected: no ops
#[test]
fn converged_message_needs_no_ops() {
    let bindings = parse_bindings("🎉 <@&555>\n<:partyhat:12345> <@&777>");
    let message = create_test_message(1, 200, "", &[("🎉", None), ("partyhat", Some(12345))]);

    assert!(plan_reconcile(&message, &bindings).is_empty());
}

/// Tests a message with no reactions yet.
///
/// Verifies that every binding gets an add op, in binding order, with the
/// token as written in the catalog text.
///
/// Expected: one add op per binding
#[test]
fn bare_message_gets_all_additions() {
    let bindings = parse_bindings("🎉 <@&555>\n<:partyhat:12345> <@&777>");
    let message = create_test_message(1, 200, "", &[]);

    let ops = plan_reconcile(&message, &bindings);

    assert_eq!(
        ops,
        vec![
            ReconcileOp::AddReaction {
                emoji_token: "🎉".to_string(),
            },
            ReconcileOp::AddReaction {
                emoji_token: "<:partyhat:12345>".to_string(),
            },
        ]
    );
}

/// Tests that a custom reaction matches its binding across written forms.
///
/// The platform reports the reaction with the bare emoji name while the
/// catalog line wrote the full `<:name:id>` token; the canonical keys line
/// up, so nothing is cleared or re-added.
///
/// Expected: no ops
#[test]
fn custom_reaction_matches_written_binding() {
    let bindings = parse_bindings("<:partyhat:12345> <@&555>");
    let message = create_test_message(1, 200, "", &[("partyhat", Some(12345))]);

    assert!(plan_reconcile(&message, &bindings).is_empty());
}

/// Tests that a reaction someone else already added is not re-added.
///
/// The addition pass only fills in bindings with no reaction at all; any
/// user's existing reaction counts as represented.
///
/// Expected: no add op for 🎉
#[test]
fn existing_reaction_by_any_user_counts() {
    let bindings = parse_bindings("🎉 <@&555>");
    let message = create_test_message(1, 200, "", &[("🎉", None)]);

    assert!(plan_reconcile(&message, &bindings).is_empty());
}
