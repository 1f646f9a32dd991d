mod basic;
mod cli_options;
mod edge_cases;
