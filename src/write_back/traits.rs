pub mod write_back_record;
