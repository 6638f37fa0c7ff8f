pub mod flat_pass;
