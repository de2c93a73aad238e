pub mod graph;
pub mod cust_error;
pub mod subsets;
pub mod cover;
pub mod brute_search;
pub mod report;
pub mod generator;
