//! different utility modules used around the polynomial solver
/// logger set-up: terminal and optional file log
pub mod logger;
/// tiny module to plot the polynomial and its real roots
pub mod plots;
/// interactive request/response loop
pub mod session;
/// typed solver configuration
pub mod settings;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
