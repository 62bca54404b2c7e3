//! Lendboard Core
//!
//! Platform-agnostic types, traits, and the user-list query pipeline for the
//! Lendboard admin dashboard.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `FilterSpec`, `PaginationSpec`, `Stats`, `UserProfile`
//! - **Core Traits**: `RecordSource` (list users) and `EditStore` (per-user overrides)
//! - **Query Pipeline**: the pure `evaluate` function (filter, stats, paginate)
//! - **Loader**: one-shot list fetch with a tri-state status and a teardown guard
//! - **Overlay**: detail profiles merged from stored overrides over a default
//! - **Error Handling**: unified `DashboardError` and `Result` types
//!
//! Data flows one way: a `RecordSource` feeds the `UserListLoader`, whose
//! records go through `evaluate` for every filter or page change. Detail views
//! talk to the `EditStore` through `UserDetails` and never touch the pipeline.
//!
//! # Example
//!
//! ```rust
//! use lendboard_core::{
//!     assign_ids, evaluate, ApiUser, FilterSpec, PageSize, PaginationSpec, StatusFilter,
//!     UserStatus,
//! };
//!
//! let users = vec![ApiUser {
//!     organization: "Lendsqr".into(),
//!     username: "Ada Obi".into(),
//!     email: "adaobi123@gmail.com".into(),
//!     phone: "08012345678".into(),
//!     date_joined: "May 15, 2020, 10:00 AM".into(),
//!     status: UserStatus::Active,
//! }];
//! let records = assign_ids(users);
//!
//! let filter = FilterSpec {
//!     status: StatusFilter::Only(UserStatus::Active),
//!     ..FilterSpec::default()
//! };
//! let result = evaluate(&records, &filter, PaginationSpec::new(1, PageSize::Ten));
//!
//! assert_eq!(result.total_filtered, 1);
//! assert_eq!(result.visible[0].id, 1);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod memory;
pub mod overlay;
pub mod query;
pub mod session;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{DashboardError, Result};
pub use loader::{LoadState, UserListLoader};
pub use memory::{MemoryEditStore, StaticSource};
pub use overlay::{edit_key, UserDetails};
pub use query::{evaluate, organizations, QueryResult};
pub use session::ListSession;
pub use traits::{EditStore, RecordSource};

// Export all types
pub use types::{
    // Records
    assign_ids, users_from_value, ApiUser, RecordId, UserRecord, UserStatus,
    // Query inputs
    FilterSpec, StatusFilter,
    page_buttons, PageButtons, PageSize, PaginationSpec, MAX_PAGE_BUTTONS,
    // Derived
    Stats,
    // Detail view
    Guarantor, GuarantorOverride, ProfileOverride, Socials, SocialsOverride, UserProfile,
};
