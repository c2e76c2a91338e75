//! Common test utilities for building dialog flows.
use annai::prelude::*;

/// A linear flow with a content-less anchor between two content steps.
///
/// `start -> welcome ("Welcome!") -> note (empty, data only) -> details -> done`
#[allow(dead_code)]
pub fn linear_flow() -> DialogFlow {
    let mut builder = DialogFlow::builder("start");
    builder
        .start()
        .link_next("welcome")
        .set_content("Welcome!")
        .link_next("note")
        .set_data("audit", "checkpoint")
        .link_next("details")
        .set_content("Here are the details.")
        .link_next("done")
        .set_content("All done.");
    builder.build()
}

/// A fan-out reached through a content-less chain; the branch point
/// itself has no content either.
///
/// `start -> hop (empty) -> fork (empty; "left" -> left_info, "right" -> right_info)`
#[allow(dead_code)]
pub fn silent_fork_flow() -> DialogFlow {
    let mut builder = DialogFlow::builder("start");
    let fork = builder.start().link_next("hop").link_next("fork").id();
    builder
        .at(fork)
        .link_branch("left")
        .link_next("left_info")
        .set_content("Left it is.");
    builder
        .at(fork)
        .link_branch("right")
        .link_next("right_info")
        .set_content("Right it is.");
    builder.build()
}

/// A declarative two-branch helpdesk dialog in JSON form.
#[allow(dead_code)]
pub const HELPDESK_DEFINITION_JSON: &str = r#"{
    "start": "start",
    "steps": [
        { "name": "start", "next": "topic" },
        {
            "name": "topic",
            "content": "What do you need help with?",
            "branches": [
                { "key": "billing", "target": "billing_hint" },
                { "key": "outage", "target": "outage_hint" }
            ]
        },
        {
            "name": "billing_hint",
            "content": "Billing is handled in the billing portal."
        },
        {
            "name": "outage_hint",
            "content": "Check the status page first.",
            "data": { "ticket-id": "42" }
        }
    ]
}"#;
