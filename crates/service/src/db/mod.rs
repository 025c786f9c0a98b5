pub mod value_store;
