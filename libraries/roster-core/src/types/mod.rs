mod envelope;
mod ids;
mod user;

pub use envelope::ApiResponse;
pub use ids::UserId;
pub use user::{User, UserInput};
