pub mod dialog;
pub mod time;
pub mod use_api;

#[cfg(test)]
pub mod test;

pub use use_api::use_api;
