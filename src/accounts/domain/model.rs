use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::core::library::{MEMBER_LEVEL, Role};

// AccountEntity is the persisted account record; the account id is its key in the accounts document.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct AccountEntity {
    #[serde(default = "member_level")]
    pub level: i64,
    #[serde(rename = "books", default)]
    pub borrowed_titles: Vec<String>,
    #[serde(default)]
    pub balance: i64,
}

fn member_level() -> i64 {
    MEMBER_LEVEL
}

impl AccountEntity {
    pub fn new(balance: i64) -> Self {
        Self {
            level: MEMBER_LEVEL,
            borrowed_titles: vec![],
            balance,
        }
    }

    pub fn role(&self) -> Role {
        Role::from_level(self.level)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    pub fn holds(&self, title: &str) -> bool {
        self.borrowed_titles.iter().any(|t| t == title)
    }

    // returns false and leaves the list alone if the title is already held
    pub(crate) fn add_borrowed(&mut self, title: &str) -> bool {
        if self.holds(title) {
            return false;
        }
        self.borrowed_titles.push(title.to_string());
        true
    }

    pub(crate) fn remove_borrowed(&mut self, title: &str) -> bool {
        let before = self.borrowed_titles.len();
        self.borrowed_titles.retain(|t| t != title);
        before != self.borrowed_titles.len()
    }

    // keeps the position of the renamed title in the borrowed list
    pub(crate) fn rename_borrowed(&mut self, old_title: &str, new_title: &str) -> bool {
        if !self.holds(old_title) {
            return false;
        }
        if self.holds(new_title) {
            return self.remove_borrowed(old_title);
        }
        for title in self.borrowed_titles.iter_mut() {
            if title == old_title {
                *title = new_title.to_string();
            }
        }
        true
    }
}

// AccountsDocument is the whole accounts collection keyed by account id.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct AccountsDocument {
    accounts: BTreeMap<String, AccountEntity>,
}

impl AccountsDocument {
    pub fn get(&self, id: &str) -> Option<&AccountEntity> {
        self.accounts.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut AccountEntity> {
        self.accounts.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    pub(crate) fn insert(&mut self, id: &str, account: AccountEntity) -> Option<AccountEntity> {
        self.accounts.insert(id.to_string(), account)
    }

    pub fn iter(&self) -> impl Iterator<Item=(&String, &AccountEntity)> {
        self.accounts.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item=(&String, &mut AccountEntity)> {
        self.accounts.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    // number of accounts currently holding the title
    pub fn holders_of(&self, title: &str) -> u32 {
        self.accounts.values().filter(|a| a.holds(title)).count() as u32
    }
}

#[cfg(test)]
mod tests {
    use crate::accounts::domain::model::{AccountEntity, AccountsDocument};
    use crate::core::library::{MEMBER_LEVEL, Role};

    #[tokio::test]
    async fn test_should_build_account() {
        let account = AccountEntity::new(100);
        assert_eq!(Role::Member, account.role());
        assert_eq!(100, account.balance);
        assert!(account.borrowed_titles.is_empty());
        assert!(!account.is_admin());
    }

    #[tokio::test]
    async fn test_should_keep_borrowed_titles_unique() {
        let mut account = AccountEntity::new(100);
        assert!(account.add_borrowed("Dune"));
        assert!(!account.add_borrowed("Dune"));
        assert_eq!(vec!["Dune".to_string()], account.borrowed_titles);
        assert!(account.remove_borrowed("Dune"));
        assert!(!account.remove_borrowed("Dune"));
        assert!(account.borrowed_titles.is_empty());
    }

    #[tokio::test]
    async fn test_should_rename_borrowed_title() {
        let mut account = AccountEntity::new(100);
        account.add_borrowed("Emma");
        account.add_borrowed("Dune");
        account.add_borrowed("Ulysses");
        assert!(account.rename_borrowed("Dune", "Dune Messiah"));
        assert_eq!(vec!["Emma", "Dune Messiah", "Ulysses"], account.borrowed_titles);
        assert!(!account.rename_borrowed("Dune", "Other"));
        // renaming onto a title already held collapses the two entries
        assert!(account.rename_borrowed("Emma", "Ulysses"));
        assert_eq!(vec!["Dune Messiah", "Ulysses"], account.borrowed_titles);
    }

    #[tokio::test]
    async fn test_should_read_persisted_layout() {
        let json = r#"{"alice": {"level": 1, "books": ["Dune"], "balance": 100},
                       "root": {"level": 2, "books": [], "balance": 100}}"#;
        let doc: AccountsDocument = serde_json::from_str(json).expect("should parse");
        assert_eq!(2, doc.len());
        assert!(doc.get("root").expect("root").is_admin());
        assert_eq!(1, doc.holders_of("Dune"));
        assert_eq!(0, doc.holders_of("Emma"));
        let out = serde_json::to_value(&doc).expect("should serialize");
        assert_eq!(serde_json::json!(["Dune"]), out["alice"]["books"]);
    }

    #[tokio::test]
    async fn test_should_default_missing_level_to_member() {
        let json = r#"{"bob": {"books": []}}"#;
        let doc: AccountsDocument = serde_json::from_str(json).expect("should parse");
        let bob = doc.get("bob").expect("bob");
        assert_eq!(MEMBER_LEVEL, bob.level);
        assert_eq!(Role::Member, bob.role());
        assert!(!bob.is_admin());
    }
}
