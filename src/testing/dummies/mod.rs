mod tables;

pub use tables::{buys_computer_table, student_table, tennis_table};
