use chrono::{DateTime, Utc};

use super::UserID;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserID,
    pub username: String,
    pub email: String,
    pub role: String,
    pub register_time: Option<DateTime<Utc>>,
    pub avatar: Option<String>,
}

impl User {
    pub fn is_logged_in(&self) -> bool {
        self.id != UserID::UNSET
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: UserID::UNSET,
            username: Default::default(),
            email: Default::default(),
            role: Default::default(),
            register_time: None,
            avatar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_is_anonymous() {
        let user = User::default();
        assert_eq!(user.id, UserID(-1));
        assert!(user.username.is_empty());
        assert!(user.register_time.is_none());
        assert!(user.avatar.is_none());
        assert!(!user.is_logged_in());
    }

    #[test]
    fn any_real_id_counts_as_logged_in() {
        let user = User { id: UserID(0), ..Default::default() };
        assert!(user.is_logged_in());
    }
}
