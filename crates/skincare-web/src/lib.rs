//! Single-page skin care form.
//!
//! Each request runs one render cycle: optional season lookup for the
//! location, remedy lookup for the concern, HTML out.

pub mod error;
pub mod form;
pub mod page;
pub mod render;
pub mod server;
pub mod theme;

pub use error::AppError;
pub use form::{FormInput, FormQuery};
pub use page::{render_cycle, MainContent, Notice, NoticeLevel, PageModel};
pub use render::render_page;
pub use server::{create_router, run_server, serve_on, AppState};
pub use theme::PageStyle;
