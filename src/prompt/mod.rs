mod select_context;

pub use select_context::select_context;
