use crate::{
    model::{member::CombatRole, participation::ParticipationKind},
    server::{
        error::AppError,
        model::participation::SignUpParam,
        service::{ledger::LedgerService, roster::RosterService},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod list_participants;
mod sign_up;
mod withdraw;

fn signup(event_id: i32, member_id: i32, kind: ParticipationKind) -> SignUpParam {
    SignUpParam {
        event_id,
        member_id,
        kind,
        role: Some(CombatRole::Tank),
        class: Some("Greatsword".to_string()),
    }
}
