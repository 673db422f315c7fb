pub mod binding;
pub mod controller;
pub mod view;

#[cfg(test)]
mod tests;
