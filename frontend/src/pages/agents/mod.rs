pub mod repository;

mod list;
mod show;

pub use list::AgentListPage;
pub use show::AgentShowPage;
