pub mod museums;
