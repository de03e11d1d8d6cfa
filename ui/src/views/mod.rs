mod section;
pub use section::PageSection;
