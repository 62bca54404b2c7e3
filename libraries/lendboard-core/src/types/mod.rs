mod filter;
mod pagination;
mod profile;
mod record;
mod stats;

pub use filter::{FilterSpec, StatusFilter};
pub use pagination::{page_buttons, PageButtons, PageSize, PaginationSpec, MAX_PAGE_BUTTONS};
pub use profile::{
    Guarantor, GuarantorOverride, ProfileOverride, Socials, SocialsOverride, UserProfile,
};
pub use record::{assign_ids, users_from_value, ApiUser, RecordId, UserRecord, UserStatus};
pub use stats::Stats;
