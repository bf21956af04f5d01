mod forum_type;
mod user;

pub use forum_type::*;
pub use user::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserID(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeID(pub i32);

impl UserID {
    pub const UNSET: UserID = UserID(-1);
}
