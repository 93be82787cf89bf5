use crate::domain::post::entity::Post;
use crate::domain::user::value_objects::{Role, UserId};

/// A post may be edited or deleted by its author, or by any admin.
pub struct CanModifyPostSpec<'a> {
    post: &'a Post,
    user_id: UserId,
    role: Role,
}

impl<'a> CanModifyPostSpec<'a> {
    pub fn new(post: &'a Post, user_id: UserId, role: Role) -> Self {
        Self {
            post,
            user_id,
            role,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.role.overrides_ownership() || self.post.is_authored_by(self.user_id)
    }
}
