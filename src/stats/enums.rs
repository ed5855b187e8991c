pub mod stats_event;
