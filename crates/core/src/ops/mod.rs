pub mod company;
pub mod company_statements;
pub mod etf;
pub mod insurance;
pub mod pensions;
pub mod state;

pub(crate) mod refresh;
