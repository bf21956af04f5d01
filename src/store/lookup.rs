use crate::data::{ForumType, TypeID};

use super::Store;

impl Store {
    pub fn find_type_by_id(&self, id: TypeID) -> Option<&ForumType> {
        self.forum.types.iter().find(|t| t.id == id)
    }
}
