pub mod category_filter;
pub mod layout;
pub mod locked_exhibition_card;
pub mod require_auth;

pub use category_filter::CategoryFilter;
pub use locked_exhibition_card::LockedExhibitionCard;
pub use require_auth::RequireAuth;
