pub mod memory_db;
pub mod mongo_db;
