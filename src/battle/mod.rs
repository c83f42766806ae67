pub mod calculators;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;
