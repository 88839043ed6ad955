pub mod lookup;

pub use crate::domain::model::{AvatarModel, LookupOutcome, LookupRequest, RawResponse};
pub use crate::domain::ports::AvatarSource;
pub use crate::utils::error::Result;
