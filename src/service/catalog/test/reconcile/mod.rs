use serenity::all::ReactionType;
use test_utils::serenity::create_test_message;

use crate::service::catalog::parser::parse_bindings;
use crate::service::catalog::reconcile::{plan_reconcile, ReconcileOp};

mod plan_reconcile;
