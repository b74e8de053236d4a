pub use self::edit_file::{apply_all, apply_substitution};
pub use self::read_file::read_text;
pub use self::write_file::write_text;

mod edit_file;
mod read_file;
mod write_file;
