use super::Store;

pub const FALLBACK_AVATAR_URL: &str = "https://cube.elemecdn.com/0/88/03b0d39583f48206768a7534e55bcpng.png";

impl Store {
    pub fn avatar_url(&self) -> String {
        self.user_avatar_url(self.user.avatar.as_deref())
    }

    /// An empty path counts as unset and resolves to the fallback image.
    pub fn user_avatar_url(&self, avatar: Option<&str>) -> String {
        match avatar {
            Some(avatar) if !avatar.is_empty() => format!("{}/images{}", self.config.base_url(), avatar),
            _ => FALLBACK_AVATAR_URL.to_string(),
        }
    }
}
