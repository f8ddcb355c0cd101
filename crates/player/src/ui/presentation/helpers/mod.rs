pub mod time_helpers;
