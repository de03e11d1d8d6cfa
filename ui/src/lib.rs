//! Shared UI crate for the Folio portfolio site: navbar core logic, the
//! navbar component and the page section view.

pub mod core;
pub mod views;

pub mod components {
    // Scroll-aware site navbar (components/site_navbar.rs)
    pub mod site_navbar;
    pub use site_navbar::SiteNavbar;
}
