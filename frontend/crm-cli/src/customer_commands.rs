use clap::{Args, Subcommand};
use crm_client::SearchQuery;
use crm_core::CustomerDraft;

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List customers, optionally filtered locally
    List {
        /// Case-insensitive text matched against every field
        #[arg(long)]
        filter: Option<String>,
    },

    /// Get one customer
    Get {
        id: i64,
    },

    /// Create a customer
    Create {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long, default_value = "")]
        address: String,

        #[arg(long)]
        phone_number: String,

        #[arg(long)]
        email: String,
    },

    /// Update a customer; omitted fields keep their current value
    Update {
        id: i64,

        #[command(flatten)]
        fields: CustomerFields,
    },

    /// Delete a customer
    Delete {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Search on the server by field
    Search {
        #[command(flatten)]
        fields: CustomerFields,
    },
}

#[derive(Args, Debug, Default)]
pub struct CustomerFields {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub phone_number: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

impl CustomerFields {
    /// Overlay the given fields on an existing draft
    pub fn apply_to(self, mut draft: CustomerDraft) -> CustomerDraft {
        if let Some(first_name) = self.first_name {
            draft.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            draft.last_name = last_name;
        }
        if let Some(address) = self.address {
            draft.address = address;
        }
        if let Some(phone_number) = self.phone_number {
            draft.phone_number = phone_number;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        draft
    }

    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new()
            .param_opt("firstName", self.first_name.as_deref())
            .param_opt("lastName", self.last_name.as_deref())
            .param_opt("address", self.address.as_deref())
            .param_opt("phoneNumber", self.phone_number.as_deref())
            .param_opt("email", self.email.as_deref())
    }
}
