use super::TypeID;

/// A forum category as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumType {
    pub id: TypeID,
    pub name: String,
    pub desc: String,
    pub color: String,
}

impl ForumType {
    pub fn new(id: TypeID, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            desc: Default::default(),
            color: Default::default(),
        }
    }
}
