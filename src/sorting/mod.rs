pub mod grouping;
pub mod list_sort;

pub use grouping::{ItemGroup, group_items, swap_movies_for_set};
pub use list_sort::{SortMethod, SortOrder, SortSettings, compare, sort_items};
