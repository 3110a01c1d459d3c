pub mod tooltip;

pub use tooltip::listing_tooltip;
