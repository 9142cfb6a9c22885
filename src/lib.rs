pub mod app;
pub mod catalog;
pub mod models;

#[cfg(test)]
mod test;
