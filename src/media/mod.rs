pub mod playlist;
pub mod scanner;
pub mod urlpath;
