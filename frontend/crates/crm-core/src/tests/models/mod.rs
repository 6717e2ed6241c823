mod credential;
mod customer_record;
mod role;
mod session;
