mod presentation;
mod test_error;
mod utils;
