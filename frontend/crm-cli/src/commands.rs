use crate::customer_commands::CustomerCommands;

use clap::Subcommand;
use crm_core::Role;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Create an account (does not log in)
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,

        /// USER or ADMIN
        #[arg(long, default_value_t = Role::User)]
        role: Role,
    },

    /// Forget the stored session
    Logout,

    /// Show the current view and session
    Whoami,

    /// Customer operations (requires login)
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },
}
