pub mod day_5;
