use crate::{config::ClientConfig, data::{ForumType, User}};

pub mod avatar;
pub mod lookup;
pub mod payload;

pub use payload::PayloadError;

#[derive(Debug, Default)]
struct Forum {
    types: Vec<ForumType>,
}

/// Session-wide client state: the logged in user and the forum category catalog.
#[derive(Debug, Default)]
pub struct Store {
    config: ClientConfig,
    user: User,
    forum: Forum,
}

impl Store {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            user: User::default(),
            forum: Forum::default(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn set_user(&mut self, user: User) {
        log::debug!("session user set to {:?} ({})", user.id, user.username);
        self.user = user;
    }

    pub fn types(&self) -> &[ForumType] {
        &self.forum.types
    }

    pub fn set_types(&mut self, types: Vec<ForumType>) {
        log::debug!("forum catalog replaced with {} types", types.len());
        self.forum.types = types;
    }

    pub fn push_type(&mut self, forum_type: ForumType) {
        log::debug!("forum type {:?} ({}) added", forum_type.id, forum_type.name);
        self.forum.types.push(forum_type);
    }

    /// Drops the user and catalog, keeping the configuration.
    pub fn reset(&mut self) {
        log::debug!("session store reset");
        self.user = User::default();
        self.forum = Forum::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{TypeID, UserID};

    #[test]
    fn starts_in_sentinel_state() {
        let store = Store::new(ClientConfig::default());
        assert_eq!(store.user().id, UserID(-1));
        assert_eq!(store.user().avatar, None);
        assert!(store.types().is_empty());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut store = Store::new(ClientConfig::new("http://forum.test"));
        store.set_user(User { id: UserID(7), username: "ada".to_string(), avatar: Some("/avatar/a".to_string()), ..Default::default() });
        store.push_type(ForumType::new(TypeID(1), "General"));
        store.reset();
        assert_eq!(store.user(), &User::default());
        assert!(store.types().is_empty());
        assert_eq!(store.config().base_url(), "http://forum.test");
    }

    #[test]
    fn user_mut_edits_in_place() {
        let mut store = Store::default();
        store.user_mut().avatar = Some("/avatar/b".to_string());
        assert_eq!(store.user().avatar.as_deref(), Some("/avatar/b"));
    }
}
