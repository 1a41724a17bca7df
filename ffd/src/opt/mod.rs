pub mod ffd_optimizer;
pub mod order;
pub mod search;
