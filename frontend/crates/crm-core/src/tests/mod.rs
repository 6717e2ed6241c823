mod filter;
mod models;
