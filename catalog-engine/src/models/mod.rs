pub mod book;
pub mod catalog;
pub mod filter;
pub mod page;
pub mod responses;
pub mod theme;
