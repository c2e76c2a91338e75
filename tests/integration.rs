//! End-to-end tests: declarative definitions, sessions, and controls.
mod common;
use annai::error::{DialogConversionError, FlowIntegrityError};
use annai::prelude::*;
use common::*;

#[test]
fn test_definition_compiles_and_navigates() {
    let definition =
        DialogDefinition::from_json(HELPDESK_DEFINITION_JSON).expect("Failed to parse definition");
    let flow = DialogFlow::from_definition(definition).expect("Failed to compile definition");
    flow.validate().expect("compiled flow should validate");

    let mut navigator = Navigator::new(Arc::new(flow));
    navigator.go_forward(None);
    assert_eq!(navigator.current_step().name(), "topic");

    navigator.go_forward(Some("billing"));
    assert_eq!(
        navigator.current_step().content(),
        "Billing is handled in the billing portal."
    );
    assert!(!navigator.has_next());
}

#[test]
fn test_session_hides_forward_until_branch_is_chosen() {
    let definition =
        DialogDefinition::from_json(HELPDESK_DEFINITION_JSON).expect("Failed to parse definition");
    let flow = Arc::new(DialogFlow::from_definition(definition).expect("Failed to compile"));
    let mut session = DialogSession::new(flow);

    // Off the branch point the forward control carries the default label.
    let controls = session.controls();
    assert!(!controls.back);
    assert_eq!(controls.forward.as_deref(), Some(DEFAULT_FORWARD_LABEL));
    assert!(controls.menu.is_empty());

    session.advance();
    assert_eq!(session.current_step().name(), "topic");

    // At the branch point the menu is offered but forward stays hidden.
    let controls = session.controls();
    assert!(controls.back);
    assert_eq!(controls.forward, None);
    assert_eq!(controls.menu, vec!["billing", "outage"]);

    session.select_branch("outage");
    assert_eq!(session.pending_branch(), Some("outage"));
    assert_eq!(session.controls().forward.as_deref(), Some(DEFAULT_FORWARD_LABEL));

    session.advance();
    let step = session.current_step();
    assert_eq!(step.name(), "outage_hint");
    assert_eq!(ticket_url(step).as_deref(), Some(
        "https://stackuphelpcentre.zendesk.com/hc/en-us/requests/new?ticket_form_id=42"
    ));

    // Terminal: nothing forward, back only.
    let controls = session.controls();
    assert_eq!(controls.forward, None);
    assert!(controls.back);
    assert!(controls.menu.is_empty());
}

#[test]
fn test_going_back_discards_pending_choice() {
    let definition =
        DialogDefinition::from_json(HELPDESK_DEFINITION_JSON).expect("Failed to parse definition");
    let flow = Arc::new(DialogFlow::from_definition(definition).expect("Failed to compile"));
    let mut session = DialogSession::new(flow);
    session.advance();

    session.select_branch("billing");
    session.back();
    assert_eq!(session.current_step().name(), "start");
    assert_eq!(session.pending_branch(), None);
}

#[test]
fn test_session_walks_triage_with_label_overrides() {
    let mut session = DialogSession::new(Arc::new(ticket_triage_flow()));
    session.advance();
    assert_eq!(session.current_step().name(), "issue_type");

    session.select_branch(IssueType::PlatformBug.key());
    assert_eq!(session.controls().forward.as_deref(), Some(DEFAULT_FORWARD_LABEL));

    session.advance();
    assert_eq!(session.current_step().name(), "suggest_discord");
    assert_eq!(
        session.controls().forward.as_deref(),
        Some("Open an official report")
    );

    session.advance();
    assert_eq!(session.current_step().name(), "open_ticket");
    assert!(ticket_url(session.current_step()).is_some());
}

#[test]
#[should_panic(expected = "has no next step")]
fn test_advancing_without_a_choice_panics() {
    let mut session = DialogSession::new(Arc::new(ticket_triage_flow()));
    session.advance();
    session.advance();
}

#[test]
#[should_panic(expected = "has no branch named")]
fn test_selecting_unknown_branch_panics() {
    let mut session = DialogSession::new(Arc::new(ticket_triage_flow()));
    session.advance();
    session.select_branch("not_a_real_branch");
}

#[test]
fn test_conversion_rejects_malformed_definitions() {
    let empty = DialogDefinition {
        start: "start".to_string(),
        steps: vec![],
    };
    assert!(matches!(
        DialogFlow::from_definition(empty),
        Err(DialogConversionError::EmptyDefinition)
    ));

    let bad_start = DialogDefinition::from_json(
        r#"{ "start": "nowhere", "steps": [ { "name": "start" } ] }"#,
    )
    .unwrap();
    match DialogFlow::from_definition(bad_start).expect_err("start should be rejected") {
        DialogConversionError::StartNotFound(name) => assert_eq!(name, "nowhere"),
        other => panic!("Expected StartNotFound, got {:?}", other),
    }

    let duplicate = DialogDefinition::from_json(
        r#"{ "start": "start", "steps": [ { "name": "start" }, { "name": "start" } ] }"#,
    )
    .unwrap();
    assert!(matches!(
        DialogFlow::from_definition(duplicate),
        Err(DialogConversionError::DuplicateStep(_))
    ));

    let dangling = DialogDefinition::from_json(
        r#"{ "start": "start", "steps": [ { "name": "start", "next": "missing" } ] }"#,
    )
    .unwrap();
    match DialogFlow::from_definition(dangling).expect_err("dangling link should be rejected") {
        DialogConversionError::TargetNotFound { source, target } => {
            assert_eq!(source, "start");
            assert_eq!(target, "missing");
        }
        other => panic!("Expected TargetNotFound, got {:?}", other),
    }
}

#[test]
fn test_conversion_rejects_inconsistent_trees() {
    let orphan = DialogDefinition::from_json(
        r#"{
            "start": "start",
            "steps": [
                { "name": "start", "next": "info" },
                { "name": "info", "content": "Hello." },
                { "name": "orphan", "content": "Unlinked." }
            ]
        }"#,
    )
    .unwrap();
    match DialogFlow::from_definition(orphan).expect_err("orphan should be rejected") {
        DialogConversionError::Integrity(FlowIntegrityError::UnreachableStep(name)) => {
            assert_eq!(name, "orphan")
        }
        other => panic!("Expected UnreachableStep, got {:?}", other),
    }

    // Two parents cannot share a child: the tree stores one back-reference.
    let shared_tail = DialogDefinition::from_json(
        r#"{
            "start": "start",
            "steps": [
                { "name": "start", "content": "Pick:", "branches": [
                    { "key": "a", "target": "a" },
                    { "key": "b", "target": "b" }
                ] },
                { "name": "a", "content": "A.", "next": "end" },
                { "name": "b", "content": "B.", "next": "end" },
                { "name": "end", "content": "Done." }
            ]
        }"#,
    )
    .unwrap();
    match DialogFlow::from_definition(shared_tail).expect_err("shared tail should be rejected") {
        DialogConversionError::Integrity(FlowIntegrityError::BrokenBackLink { parent, child }) => {
            assert_eq!(parent, "a");
            assert_eq!(child, "end");
        }
        other => panic!("Expected BrokenBackLink, got {:?}", other),
    }
}

#[test]
fn test_custom_format_converts_through_into_dialog() {
    /// A minimal custom format: named announcement pages shown in order.
    struct AnnouncementScript {
        pages: Vec<(&'static str, &'static str)>,
    }

    impl IntoDialog for AnnouncementScript {
        fn into_dialog(self) -> std::result::Result<DialogDefinition, DialogConversionError> {
            if self.pages.is_empty() {
                return Err(DialogConversionError::EmptyDefinition);
            }
            let mut steps = vec![StepDefinition {
                name: "start".to_string(),
                content: String::new(),
                data: Default::default(),
                next: Some(self.pages[0].0.to_string()),
                branches: Vec::new(),
            }];
            for (index, (name, text)) in self.pages.iter().enumerate() {
                steps.push(StepDefinition {
                    name: name.to_string(),
                    content: text.to_string(),
                    data: Default::default(),
                    next: self.pages.get(index + 1).map(|(next, _)| next.to_string()),
                    branches: Vec::new(),
                });
            }
            Ok(DialogDefinition {
                start: "start".to_string(),
                steps,
            })
        }
    }

    let script = AnnouncementScript {
        pages: vec![("welcome", "Welcome!"), ("news", "Fresh news.")],
    };
    let definition = script.into_dialog().expect("conversion should succeed");
    let flow = DialogFlow::from_definition(definition).expect("compilation should succeed");

    let mut navigator = Navigator::new(Arc::new(flow));
    navigator.go_forward(None);
    assert_eq!(navigator.current_step().content(), "Welcome!");
    navigator.go_forward(None);
    assert_eq!(navigator.current_step().content(), "Fresh news.");
    assert!(!navigator.has_next());
}

#[test]
fn test_flow_survives_a_serde_round_trip() {
    let flow = ticket_triage_flow();
    let json = serde_json::to_string(&flow).expect("Failed to serialize flow");
    let restored: DialogFlow = serde_json::from_str(&json).expect("Failed to deserialize flow");
    restored.validate().expect("restored flow should validate");

    let mut navigator = Navigator::new(Arc::new(restored));
    navigator.go_forward(None);
    navigator.go_forward(Some(IssueType::AccountRelated.key()));
    assert_eq!(
        navigator.current_step().data_value(TICKET_ID_KEY),
        Some("10970588074137")
    );
}
