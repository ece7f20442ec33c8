pub mod strategy;

pub mod test_minimize;
pub mod test_operations;
pub mod test_relation;
