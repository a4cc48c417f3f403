mod todos;

pub use todos::Todos;
