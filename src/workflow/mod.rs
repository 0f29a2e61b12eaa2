pub mod copy_diff;
