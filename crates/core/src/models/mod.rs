pub mod chart;
pub mod price;
pub mod quote;
pub mod settings;
pub mod table;
