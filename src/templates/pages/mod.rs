pub mod detail_page;
pub mod edit_page;
pub mod map_page;

pub use detail_page::detail_page;
pub use edit_page::edit_page;
pub use map_page::map_page;
