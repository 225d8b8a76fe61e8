pub mod scroll_queue;
