pub mod dropdown;

pub use dropdown::{Dropdown, DropdownConfig};
