pub mod event;
pub mod role;
pub mod user;

pub use event::Event;
pub use role::{EventRole, Permission, RoleAssignment};
pub use user::User;
