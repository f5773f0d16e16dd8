use serde::{Deserialize, Serialize};
use crate::accounts::Account;
use crate::accounts::domain::model::AccountEntity;
use crate::core::domain::Identifiable;
use crate::core::library::Role;

// AccountDto is the account as seen by callers of the account service.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct AccountDto {
    pub account_id: String,
    pub role: Role,
    pub level: i64,
    pub borrowed_titles: Vec<String>,
    pub balance: i64,
}

impl AccountDto {
    pub(crate) fn from_entity(account_id: &str, entity: &AccountEntity) -> Self {
        Self {
            account_id: account_id.to_string(),
            role: entity.role(),
            level: entity.level,
            borrowed_titles: entity.borrowed_titles.clone(),
            balance: entity.balance,
        }
    }
}

impl Identifiable for AccountDto {
    fn id(&self) -> String {
        self.account_id.to_string()
    }
}

impl Account for AccountDto {
    fn role(&self) -> Role {
        self.role
    }

    fn borrowed_titles(&self) -> &[String] {
        &self.borrowed_titles
    }
}
