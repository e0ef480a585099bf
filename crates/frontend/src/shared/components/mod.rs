pub mod blank_state;
pub mod dropdown;
