pub mod repository;
pub mod utils;

mod create;
mod edit;
mod form;
mod list;
mod show;

pub use create::PropertyCreatePage;
pub use edit::PropertyEditPage;
pub use list::PropertyListPage;
pub use show::PropertyShowPage;
