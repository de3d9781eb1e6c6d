use serenity::all::{GuildId, MessageId};

use crate::service::catalog::directory::{BindingDirectory, GuildBindings};
use crate::service::catalog::parser::parse_bindings;

mod replace_guild;
