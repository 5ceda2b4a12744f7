use crate::{
    model::{member::CombatRole, participation::ParticipationKind},
    server::{
        data::participation::ParticipationRepository, error::AppError,
        model::participation::SignUpParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod attended;
mod upsert;
