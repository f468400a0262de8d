pub mod filter;
pub mod localized;
pub mod page;
pub mod tag;
pub mod time_range;

pub use filter::{ContentPredicate, Filter, FilterPolicy, Ordering};
pub use localized::{Localized, LocalizedRow, Retained, retain_localized};
pub use page::{PageLimits, PageRequest, page_count};
pub use tag::{TagFilter, TagId, TagMode};
pub use time_range::TimeRange;
