pub mod birthday;
pub mod book;
pub mod email;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use book::AddressBook;
pub use email::Email;
pub use name::{is_valid_name, Name};
pub use phone::Phone;
pub use record::{parse_index, Record, RecordUpdate};
