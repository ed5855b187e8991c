pub mod write_back;
pub mod write_back_record;
