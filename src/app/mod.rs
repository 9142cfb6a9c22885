pub mod app;
pub mod calc;
pub mod flow;
pub mod form;
pub mod portfolio;
pub mod ui;
pub mod utils;

pub use app::App;
pub use portfolio::Portfolio;
