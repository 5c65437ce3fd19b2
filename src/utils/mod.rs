pub mod extractor;
pub mod mime;
pub mod parameter_error_handler;
pub mod random_code;
pub mod validate;

pub use extractor::{SafeClassIdI64, SafeQuestionId, SafeTestIdI64, SafeUserIdI64};
pub use mime::mime_type_for_filename;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use random_code::generate_class_code;
