pub mod contribution;
pub mod draft;
pub mod etf;
pub mod pension;
pub mod statement;
pub mod statistics;
pub mod summary;
