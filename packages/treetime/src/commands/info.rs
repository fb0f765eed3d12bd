pub mod run_info;
