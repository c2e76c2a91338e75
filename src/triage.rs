//! The shipped support-ticket triage dialog.
//!
//! A short wizard that narrows a support request down to an issue type
//! and ends on a help-center ticket link pre-selecting the right form.

use crate::adapter::FORWARD_LABEL_KEY;
use crate::flow::{DialogFlow, Step};

/// Help-center endpoint new ticket requests are filed against.
pub const BASE_TICKET_URL: &str = "https://stackuphelpcentre.zendesk.com/hc/en-us/requests/new";

/// Data key carrying the ticket-form identifier on terminal steps.
pub const TICKET_ID_KEY: &str = "ticket-id";

/// The closed set of issue types offered at the triage fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueType {
    GeneralEnquiry,
    WithdrawalRelated,
    SubmissionRelated,
    AccountRelated,
    PlatformBug,
}

impl IssueType {
    /// All issue types, in menu order.
    pub const ALL: [IssueType; 5] = [
        IssueType::GeneralEnquiry,
        IssueType::WithdrawalRelated,
        IssueType::SubmissionRelated,
        IssueType::AccountRelated,
        IssueType::PlatformBug,
    ];

    /// The branch key of this issue type in the triage flow.
    pub fn key(self) -> &'static str {
        match self {
            IssueType::GeneralEnquiry => "general_enquiry",
            IssueType::WithdrawalRelated => "withdrawal_related",
            IssueType::SubmissionRelated => "submission_related",
            IssueType::AccountRelated => "account_related",
            IssueType::PlatformBug => "platform_bug",
        }
    }

    /// The human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            IssueType::GeneralEnquiry => "General Enquiry",
            IssueType::WithdrawalRelated => "Withdrawal-Related Matters",
            IssueType::SubmissionRelated => "Submission-Related Matters",
            IssueType::AccountRelated => "Account-Related Matters",
            IssueType::PlatformBug => "Platform Bug Issue",
        }
    }

    /// Resolves a branch key back to its issue type.
    pub fn from_key(key: &str) -> Option<IssueType> {
        IssueType::ALL.into_iter().find(|issue| issue.key() == key)
    }
}

/// Builds the help-center link for a step carrying a ticket-form id.
/// Returns `None` for steps without one.
pub fn ticket_url(step: &Step) -> Option<String> {
    step.data_value(TICKET_ID_KEY)
        .map(|id| format!("{}?ticket_form_id={}", BASE_TICKET_URL, id))
}

/// Builds the triage dialog tree.
///
/// Call once per process and share the result (behind an `Arc`); every
/// session gets its own navigator over it. Branches are inserted in menu
/// order, matching [`IssueType::ALL`].
pub fn ticket_triage_flow() -> DialogFlow {
    let mut flow = DialogFlow::builder("start");

    let issue_type = flow
        .start()
        .link_next("issue_type")
        .set_content("Choose your issue type:")
        .id();

    flow.at(issue_type)
        .link_branch(IssueType::GeneralEnquiry.key())
        .link_next("open_ticket")
        .set_content("You should open a ticket.")
        .set_data(TICKET_ID_KEY, "9094359542041");

    flow.at(issue_type)
        .link_branch(IssueType::WithdrawalRelated.key())
        .link_next("check_processing_days")
        .set_content(
            "- Have you checked your estimated withdrawal date using `/calculate_withdrawal`?\n\
             - Is the estimated withdrawal date earlier than today?",
        )
        .set_data(FORWARD_LABEL_KEY, "Yes, proceed")
        .link_next("open_ticket")
        .set_content("You should open a ticket.")
        .set_data(TICKET_ID_KEY, "11749552676121");

    flow.at(issue_type)
        .link_branch(IssueType::SubmissionRelated.key())
        .link_next("suggest_discord")
        .set_content(
            "- Have you checked recent #re-review submission for similar issues reported?\n\
             - Have you discussed with other stackies in #re-review submission?",
        )
        .set_data(FORWARD_LABEL_KEY, "Open an official report")
        .link_next("open_ticket")
        .set_content("You should open a ticket.")
        .set_data(TICKET_ID_KEY, "11733869435673");

    flow.at(issue_type)
        .link_branch(IssueType::AccountRelated.key())
        .link_next("open_ticket")
        .set_content("You should open a ticket.")
        .set_data(TICKET_ID_KEY, "10970588074137");

    flow.at(issue_type)
        .link_branch(IssueType::PlatformBug.key())
        .link_next("suggest_discord")
        .set_content(
            "You can report in #bug-error-report. \
             Otherwise, proceed to open an official report.",
        )
        .set_data(FORWARD_LABEL_KEY, "Open an official report")
        .link_next("open_ticket")
        .set_content("You should open a ticket.")
        .set_data(TICKET_ID_KEY, "11733831427737");

    flow.build()
}
