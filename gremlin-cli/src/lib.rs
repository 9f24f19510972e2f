pub mod commands;
pub mod config;

#[cfg(test)]
mod tests;
